//! Recipe Book Frontend App
//!
//! Navigation bar over one screen at a time. Switching screens drops the
//! previous screen's lists, so every visit starts from the first page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::domain::ProfileUpdate;
use reactive_stores::Store;

use crate::commands::{self, OrderedTable};
use crate::components::{AccountPanel, CollectionList, NavBar, ProfileForm, RecipeDetailView, RecipeList, TagList};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::store::{navigate, store_set_profile, use_app_store, AppState, AppStateStoreFields, Screen};

/// Loads the signed-in user's profile and saves edits
#[component]
fn ProfileScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (message, set_message) = signal(None::<String>);

    let user_id = ctx.user_id();
    if let Some(user_id) = user_id.clone() {
        if store.profile().get_untracked().is_none() {
            set_loading.set(true);
            let client = ctx.client();
            spawn_local(async move {
                match commands::get_profile(&client, &user_id).await {
                    Ok(profile) => store_set_profile(&store, Some(profile)),
                    Err(e) => {
                        log::error!("[Profile] failed to load: {}", e);
                        set_message.try_set(Some(e));
                    }
                }
                set_loading.try_set(false);
            });
        }
    }

    let on_save = move |update: ProfileUpdate| {
        let Some(user_id) = ctx.user_id() else { return };
        let client = ctx.client();
        set_saving.set(true);
        spawn_local(async move {
            match commands::update_profile(&client, &user_id, &update).await {
                Ok(()) => {
                    log::info!("[Profile] saved");
                    if let Some(mut profile) = store.profile().get_untracked() {
                        profile.username = Some(update.username);
                        profile.full_name = Some(update.full_name);
                        profile.website = Some(update.website);
                        store_set_profile(&store, Some(profile));
                    }
                    set_message.try_set(Some("Profile saved".to_string()));
                }
                Err(e) => {
                    log::error!("[Profile] failed to save: {}", e);
                    set_message.try_set(Some(e));
                }
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <section class="profile-screen">
            <h2>"Profile"</h2>
            <Show when=move || user_id.is_none()>
                <div class="empty-message">"Sign in to edit your profile"</div>
            </Show>
            <Show when=move || loading.get()>
                <div class="loading-message">"Loading profile..."</div>
            </Show>
            {move || store.profile().get().map(|profile| view! {
                <ProfileForm profile=profile saving=saving on_save=on_save />
            })}
            {move || message.get().map(|m| view! { <div class="status-message">{m}</div> })}
        </section>
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (selected_collection, set_selected_collection) = signal(None::<i64>);

    let ctx = AppContext::new(config, (reload_trigger, set_reload_trigger));
    provide_context(ctx);
    let store = Store::new(AppState::default());
    provide_context(store);

    // Persist a new step/ingredient order; the list already shows it
    let on_reorder = Callback::new(move |(table, order): (OrderedTable, Vec<(i64, i64)>)| {
        let client = ctx.client();
        spawn_local(async move {
            match commands::save_sort_order(&client, table, &order).await {
                Ok(()) => log::info!("[APP] saved {} order ({} rows)", table.name(), order.len()),
                Err(e) => log::error!("[APP] failed to save {} order: {}", table.name(), e),
            }
        });
    });

    let open_recipe = Callback::new(move |id: i64| navigate(&store, Screen::Recipe(id)));
    let back_to_recipes = Callback::new(move |_: ()| navigate(&store, Screen::Recipes));
    let select_collection = Callback::new(move |id: i64| {
        log::info!("[APP] collection {} selected", id);
        set_selected_collection.set(Some(id));
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || {
                    // The refresh button rebuilds the current screen
                    let _ = reload_trigger.get();
                    match store.screen().get() {
                        Screen::Recipes => view! { <RecipeList on_open=open_recipe /> }.into_any(),
                        Screen::Collections => view! {
                            <CollectionList selected=selected_collection on_select=select_collection />
                        }.into_any(),
                        Screen::Tags => view! { <TagList /> }.into_any(),
                        Screen::Recipe(id) => view! {
                            <RecipeDetailView recipe_id=id on_back=back_to_recipes on_reorder=on_reorder />
                        }.into_any(),
                        Screen::Profile => view! { <ProfileScreen /> }.into_any(),
                        Screen::Account => view! { <AccountPanel /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
