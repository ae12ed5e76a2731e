//! Drop Slot Component
//!
//! Thin gap between rows that becomes the drop target while dragging.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals, DropTarget};

#[component]
pub fn DropSlot(dnd: DndSignals, position: usize) -> impl IntoView {
    let is_over = move || dnd.drop_target_read.get() == Some(DropTarget::Slot(position));
    let is_visible = move || dnd.dragging_id_read.get().is_some();

    view! {
        <div
            class=move || {
                let mut c = "drop-slot".to_string();
                if is_over() { c.push_str(" active"); }
                if !is_visible() { c.push_str(" hidden"); }
                c
            }
            on:mouseenter=make_on_slot_mouseenter(dnd, position)
            on:mouseleave=make_on_mouseleave(dnd)
        />
    }
}
