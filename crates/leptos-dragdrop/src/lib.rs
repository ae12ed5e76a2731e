//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for reordering flat lists (recipe steps and
//! ingredients). Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop slot between rows: slot `n` is the gap before row `n`, slot `len`
/// is the end of the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<i64>>,
    pub dragging_id_write: WriteSignal<Option<i64>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<i64>>,
    pub pending_id_write: WriteSignal<Option<i64>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Milliseconds during which `drag_just_ended` suppresses the trailing click
const CLICK_SUPPRESS_MS: i32 = 100;

/// True once the pointer has moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Whether dropping `dragged` (currently at `index`) into `slot` moves it
pub fn is_effective_drop(index: usize, slot: usize) -> bool {
    slot != index && slot != index + 1
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<i64>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<i64>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.try_set(None);
    dnd.drop_target_write.try_set(None);
    dnd.pending_id_write.try_set(None);
    dnd.drag_just_ended_write.try_set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows.
/// Records pending drag with start position.
pub fn make_on_mousedown(dnd: DndSignals, row_id: i64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore form controls inside the row
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_id_write.set(Some(row_id));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for a drop slot
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// What a document mouseup means for the current gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// No drag started: let the click reach the row
    Click,
    /// Dragged but released outside any drop slot
    Cancelled,
    Dropped(i64, DropTarget),
}

pub fn classify_release(dragging: Option<i64>, target: Option<DropTarget>) -> Release {
    match (dragging, target) {
        (None, _) => Release::Click,
        (Some(dragged), Some(target)) => Release::Dropped(dragged, target),
        (Some(_), None) => Release::Cancelled,
    }
}

/// Document listener removed from the document when dropped
struct DocumentListener {
    event: &'static str,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocumentListener {
    fn add(event: &'static str, f: impl FnMut(web_sys::MouseEvent) + 'static) -> Option<Self> {
        let callback = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::MouseEvent)>::new(f);
        let doc = web_sys::window().and_then(|win| win.document())?;
        doc.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()).ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Bind document mousemove/mouseup handlers for the current owner.
///
/// `on_drop(dragged_id, target)` runs only for real drags, never for clicks.
/// The listeners are removed when the owner is cleaned up.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(i64, DropTarget) + 'static,
{
    let on_mousemove = move |ev: web_sys::MouseEvent| {
        // Signals are gone once the owning list unmounts
        let Some(pending) = dnd.pending_id_read.try_get_untracked() else { return };
        let Some(dragging) = dnd.dragging_id_read.try_get_untracked() else { return };

        if pending.is_some() && dragging.is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    };

    let on_mouseup = move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_id_read.try_get_untracked() else { return };
        let target = dnd.drop_target_read.try_get_untracked().flatten();

        match classify_release(dragging, target) {
            // Click event will fire naturally on the element
            Release::Click => {
                dnd.pending_id_write.try_set(None);
            }
            Release::Cancelled => end_drag(&dnd),
            Release::Dropped(dragged, target) => {
                end_drag(&dnd);
                on_drop(dragged, target);
            }
        }
    };

    let listeners: Vec<DocumentListener> = [
        DocumentListener::add("mousemove", on_mousemove),
        DocumentListener::add("mouseup", on_mouseup),
    ]
    .into_iter()
    .flatten()
    .collect();

    let listeners = StoredValue::new_local(listeners);
    on_cleanup(move || {
        listeners.try_update_value(|l| l.clear());
    });
}
