//! Recipe List Component
//!
//! Paginated recipe cards, newest first.

use leptos::prelude::*;
use recipe_core::domain::RecipeSummary;

use crate::format::format_duration;
use crate::hooks::use_recipes;
use crate::markdown::parse_markdown_inline;
use crate::components::ListFooter;

/// Single recipe card
#[component]
fn RecipeCard(recipe: RecipeSummary, #[prop(into)] on_open: Callback<i64>) -> impl IntoView {
    let id = recipe.id;
    let total_time = recipe.total_time();
    let description = recipe.description.clone().unwrap_or_default();

    view! {
        <li class="card recipe-card" on:click=move |_| on_open.run(id)>
            {recipe.image_url.clone().map(|src| view! { <img class="card-image" src=src alt="" /> })}
            <h3 class="card-title">{recipe.name.clone()}</h3>
            <p class="card-description" inner_html=parse_markdown_inline(&description)></p>
            <span class="card-meta">{format_duration(total_time)}</span>
        </li>
    }
}

#[component]
pub fn RecipeList(#[prop(into)] on_open: Callback<i64>) -> impl IntoView {
    let recipes = use_recipes();
    let state = recipes.state();

    view! {
        <section class="recipe-list">
            <h2>"Recipes"</h2>

            <ul class="card-list">
                <For
                    each=move || recipes.items().into_iter().enumerate()
                    key=|(index, recipe)| (*index, recipe.id)
                    children=move |(_, recipe)| view! { <RecipeCard recipe=recipe on_open=on_open /> }
                />
            </ul>

            <Show when=move || state.with(|s| s.items().is_empty() && !s.has_more())>
                <div class="empty-message">"No recipes yet"</div>
            </Show>

            <ListFooter
                shown=Signal::derive(move || state.with(|s| s.items().len()))
                total=Signal::derive(move || state.with(|s| s.total_count()))
                loading=Signal::derive(move || recipes.loading())
                has_more=Signal::derive(move || recipes.has_more())
                noun="recipes"
                on_load_more=move |_| recipes.load_more()
            />
        </section>
    }
}
