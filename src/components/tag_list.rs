//! Tag List Component
//!
//! Searchable tag list. Each settled search term gets a fresh list, so a
//! response for an older term can never land in the current one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::hooks::use_tags;
use crate::components::ListFooter;

/// Quiet period after the last keystroke before searching
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Results for one search term
#[component]
fn TagResults(search_term: String) -> impl IntoView {
    let tags = use_tags(search_term.clone());
    let state = tags.state();
    let empty_message = if search_term.is_empty() {
        "No tags yet".to_string()
    } else {
        format!("No tags match \"{}\"", search_term)
    };

    view! {
        <ul class="tag-list">
            <For
                each=move || tags.items().into_iter().enumerate()
                key=|(index, tag)| (*index, tag.id)
                children=move |(_, tag)| {
                    let color = tag.color.clone().unwrap_or_else(|| "#666".to_string());
                    view! {
                        <li class="tag-row">
                            <span class="tag-color-dot" style=format!("background-color: {};", color)></span>
                            <span class="tag-name">{tag.name}</span>
                        </li>
                    }
                }
            />
        </ul>

        <Show when=move || state.with(|s| s.items().is_empty() && !s.has_more())>
            <div class="empty-message">{empty_message.clone()}</div>
        </Show>

        <ListFooter
            shown=Signal::derive(move || state.with(|s| s.items().len()))
            total=Signal::derive(move || state.with(|s| s.total_count()))
            loading=Signal::derive(move || tags.loading())
            has_more=Signal::derive(move || tags.has_more())
            noun="tags"
            on_load_more=move |_| tags.load_more()
        />
    }
}

#[component]
pub fn TagList() -> impl IntoView {
    let (input, set_input) = signal(String::new());
    let (search_term, set_search_term) = signal(String::new());
    let generation = StoredValue::new(0u32);

    let on_input = move |ev: web_sys::Event| {
        let Some(value) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
        else {
            return;
        };
        set_input.set(value.clone());

        generation.update_value(|g| *g = g.wrapping_add(1));
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // A later keystroke owns the search now
            if generation.try_get_value() != Some(current) {
                return;
            }
            let term = value.trim().to_string();
            if search_term.try_get_untracked().as_ref() != Some(&term) {
                log::info!("[Tags] search {:?}", term);
                set_search_term.try_set(term);
            }
        });
    };

    view! {
        <section class="tag-list-screen">
            <h2>"Tags"</h2>

            <input
                type="search"
                class="tag-search"
                placeholder="Search tags..."
                prop:value=move || input.get()
                on:input=on_input
            />

            {move || {
                let term = search_term.get();
                view! { <TagResults search_term=term /> }
            }}
        </section>
    }
}
