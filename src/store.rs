//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_core::domain::Profile;

/// Top-level screens
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Screen {
    #[default]
    Recipes,
    Collections,
    Tags,
    Recipe(i64),
    Profile,
    Account,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Recipes => "Recipes",
            Screen::Collections => "Collections",
            Screen::Tags => "Tags",
            Screen::Recipe(_) => "Recipe",
            Screen::Profile => "Profile",
            Screen::Account => "Account",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Screen currently shown
    pub screen: Screen,
    /// Profile of the signed-in user, once loaded
    pub profile: Option<Profile>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Switch screens. The previous screen's lists are dropped with it.
pub fn navigate(store: &AppStore, screen: Screen) {
    log::info!("[APP] navigate to {:?}", screen);
    *store.screen().write() = screen;
}

pub fn store_set_profile(store: &AppStore, profile: Option<Profile>) {
    *store.profile().write() = profile;
}
