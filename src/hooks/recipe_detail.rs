//! Recipe Detail Hook

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::RecipeDetail;

use crate::commands;
use crate::context::use_app_context;

/// Detail fetch state for one recipe
#[derive(Clone, Copy)]
pub struct RecipeDetailHandle {
    pub detail: ReadSignal<Option<RecipeDetail>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// Fetch and format recipe `id` for the signed-in user
pub fn use_recipe_detail(id: i64) -> RecipeDetailHandle {
    let ctx = use_app_context();
    let (detail, set_detail) = signal(None::<RecipeDetail>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let client = ctx.client();
    let user_id = ctx.user_id();
    spawn_local(async move {
        match commands::get_recipe_detail(&client, id, user_id.as_deref()).await {
            Ok(loaded) => {
                log::info!("[RecipeDetail] loaded recipe {} ({} steps)", id, loaded.steps.len());
                set_detail.try_set(Some(loaded));
            }
            Err(e) => {
                log::error!("[RecipeDetail] failed to load recipe {}: {}", id, e);
                set_error.try_set(Some(e));
            }
        }
        set_loading.try_set(false);
    });

    RecipeDetailHandle { detail, loading, error }
}
