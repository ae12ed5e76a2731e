//! Recipe Detail Component
//!
//! Full recipe: metadata, ingredients, steps, notes, tags and collections.

use leptos::prelude::*;
use recipe_core::RecipeDetail;

use crate::commands::OrderedTable;
use crate::components::{IngredientList, StepList};
use crate::format::{format_duration, format_servings};
use crate::hooks::use_recipe_detail;
use crate::markdown::parse_markdown;

#[component]
fn RecipeBody(
    detail: RecipeDetail,
    #[prop(into)] on_reorder: Callback<(OrderedTable, Vec<(i64, i64)>)>,
) -> impl IntoView {
    let RecipeDetail {
        name,
        description,
        image_url,
        source_url,
        notes,
        prep_time,
        cook_time,
        total_time,
        servings,
        steps,
        ingredients,
        collections,
        tags,
        ..
    } = detail;
    let has_image = !image_url.is_empty();
    let has_notes = !notes.trim().is_empty();
    let has_source = !source_url.is_empty();
    let notes_html = parse_markdown(&notes);

    view! {
        <article class="recipe-detail">
            <h2 class="recipe-title">{name}</h2>

            <Show when=move || has_image>
                <img class="recipe-image" src=image_url.clone() alt="" />
            </Show>

            <div class="recipe-meta">
                <span>"Prep " {format_duration(prep_time)}</span>
                <span>"Cook " {format_duration(cook_time)}</span>
                <span>"Total " {format_duration(total_time)}</span>
                <span>{format_servings(servings)}</span>
            </div>

            <div class="recipe-tags">
                {tags.into_iter().map(|tag| {
                    let color = tag.color.clone().unwrap_or_else(|| "#666".to_string());
                    view! { <span class="tag-chip" style=format!("border-color: {};", color)>{tag.name}</span> }
                }).collect_view()}
            </div>

            <div class="recipe-description" inner_html=parse_markdown(&description)></div>

            <h3>"Ingredients"</h3>
            <IngredientList
                ingredients=ingredients
                on_reorder=move |order| on_reorder.run((OrderedTable::Ingredients, order))
            />

            <h3>"Steps"</h3>
            <StepList
                steps=steps
                on_reorder=move |order| on_reorder.run((OrderedTable::Steps, order))
            />

            <Show when=move || has_notes>
                <h3>"Notes"</h3>
                <div class="recipe-notes" inner_html=notes_html.clone()></div>
            </Show>

            <Show when=move || has_source>
                <a class="recipe-source" href=source_url.clone() target="_blank" rel="noopener noreferrer">
                    "Original recipe"
                </a>
            </Show>

            <div class="recipe-collections">
                {collections.into_iter().map(|c| view! { <span class="collection-chip">{c.name}</span> }).collect_view()}
            </div>
        </article>
    }
}

#[component]
pub fn RecipeDetailView(
    recipe_id: i64,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_reorder: Callback<(OrderedTable, Vec<(i64, i64)>)>,
) -> impl IntoView {
    let recipe = use_recipe_detail(recipe_id);

    view! {
        <section class="recipe-detail-screen">
            <button class="back-btn" on:click=move |_| on_back.run(())>"← Recipes"</button>

            <Show when=move || recipe.loading.get()>
                <div class="loading-message">"Loading recipe..."</div>
            </Show>

            {move || recipe.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            {move || recipe.detail.get().map(|detail| view! { <RecipeBody detail=detail on_reorder=on_reorder /> })}
        </section>
    }
}
