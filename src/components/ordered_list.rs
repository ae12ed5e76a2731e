//! Ordered Lists
//!
//! Steps and ingredients of a recipe. Rows can be dragged into a new order,
//! and clicking a row marks it done (local only).

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, is_effective_drop, make_on_mousedown, DndSignals, DropTarget};
use recipe_core::domain::{Ingredient, Step};
use recipe_core::ordering::{reorder, sort_order, Ordered};

use crate::components::DropSlot;
use crate::format::format_amount;
use crate::markdown::parse_markdown_inline;

/// Apply drops to `items` and report the new `(id, sort_number)` order
fn bind_reorder<T>(dnd: DndSignals, items: RwSignal<Vec<T>>, on_reorder: Callback<Vec<(i64, i64)>>)
where
    T: Ordered<Id = i64> + Send + Sync + 'static,
{
    bind_global_mouseup(dnd, move |dragged, target| {
        let DropTarget::Slot(slot) = target;
        let index = items
            .try_with_untracked(|v| v.iter().position(|item| item.id() == dragged))
            .flatten();
        let Some(index) = index else { return };
        if !is_effective_drop(index, slot) {
            return;
        }

        let order = items
            .try_update(|v| reorder(v, dragged, slot).then(|| sort_order(v)))
            .flatten();
        if let Some(order) = order {
            log::info!("[Reorder] moved {} to slot {}", dragged, slot);
            on_reorder.run(order);
        }
    });
}

fn row_class(dnd: DndSignals, id: i64, is_active: bool) -> String {
    let mut c = "ordered-row".to_string();
    if dnd.dragging_id_read.get() == Some(id) { c.push_str(" dragging"); }
    if !is_active { c.push_str(" done"); }
    c
}

#[component]
pub fn StepList(steps: Vec<Step>, #[prop(into)] on_reorder: Callback<Vec<(i64, i64)>>) -> impl IntoView {
    let items = RwSignal::new(steps);
    let dnd = create_dnd_signals();
    bind_reorder(dnd, items, on_reorder);

    let toggle = move |index: usize| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        items.update(|v| {
            if let Some(step) = v.get_mut(index) {
                step.is_active = !step.is_active;
            }
        });
    };

    view! {
        <ol class="step-list">
            <For
                each=move || items.get().into_iter().enumerate()
                key=|(index, step)| (*index, step.id, step.is_active)
                children=move |(index, step)| {
                    let id = step.id;
                    let is_active = step.is_active;
                    view! {
                        <DropSlot dnd=dnd position=index />
                        <li
                            class=move || row_class(dnd, id, is_active)
                            on:mousedown=make_on_mousedown(dnd, id)
                            on:click=move |_| toggle(index)
                        >
                            <span class="step-number">{index + 1}</span>
                            <span class="step-text" inner_html=parse_markdown_inline(&step.description)></span>
                        </li>
                    }
                }
            />
            {move || view! { <DropSlot dnd=dnd position=items.with(|v| v.len()) /> }}
        </ol>
    }
}

#[component]
pub fn IngredientList(
    ingredients: Vec<Ingredient>,
    #[prop(into)] on_reorder: Callback<Vec<(i64, i64)>>,
) -> impl IntoView {
    let items = RwSignal::new(ingredients);
    let dnd = create_dnd_signals();
    bind_reorder(dnd, items, on_reorder);

    let toggle = move |index: usize| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        items.update(|v| {
            if let Some(ingredient) = v.get_mut(index) {
                ingredient.is_active = !ingredient.is_active;
            }
        });
    };

    view! {
        <ul class="ingredient-list">
            <For
                each=move || items.get().into_iter().enumerate()
                key=|(index, ingredient)| (*index, ingredient.id, ingredient.is_active)
                children=move |(index, ingredient)| {
                    let id = ingredient.id;
                    let is_active = ingredient.is_active;
                    view! {
                        <DropSlot dnd=dnd position=index />
                        <li
                            class=move || row_class(dnd, id, is_active)
                            on:mousedown=make_on_mousedown(dnd, id)
                            on:click=move |_| toggle(index)
                        >
                            <span class="ingredient-amount">{format_amount(ingredient.amount, &ingredient.unit)}</span>
                            <span class="ingredient-name">{ingredient.name.clone()}</span>
                        </li>
                    }
                }
            />
            {move || view! { <DropSlot dnd=dnd position=items.with(|v| v.len()) /> }}
        </ul>
    }
}
