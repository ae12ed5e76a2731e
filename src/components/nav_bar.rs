//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{navigate, use_app_store, AppStateStoreFields, Screen};

const TABS: [Screen; 5] = [
    Screen::Recipes,
    Screen::Collections,
    Screen::Tags,
    Screen::Profile,
    Screen::Account,
];

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            <span class="app-title">"Recipe Book"</span>
            {TABS.into_iter().map(|tab| {
                let target = tab.clone();
                let title = tab.title();
                let is_current = move || {
                    let current = store.screen().get();
                    // The detail screen lives under the Recipes tab
                    current == target || (target == Screen::Recipes && matches!(current, Screen::Recipe(_)))
                };
                view! {
                    <button
                        class=move || if is_current() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| navigate(&store, tab.clone())
                    >
                        {title}
                    </button>
                }
            }).collect_view()}
            <button class="nav-refresh" title="Reload" on:click=move |_| ctx.reload()>"⟳"</button>
        </nav>
    }
}
