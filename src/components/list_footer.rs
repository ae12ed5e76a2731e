//! List Footer Component
//!
//! Count summary and "Load more" button shared by every paginated list.

use leptos::prelude::*;

use crate::format::format_count;

#[component]
pub fn ListFooter(
    #[prop(into)] shown: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] has_more: Signal<bool>,
    /// Plural noun for the summary, e.g. "tags"
    noun: &'static str,
    #[prop(into)] on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="list-footer">
            <span class="list-count">{move || format_count(shown.get(), total.get(), noun)}</span>
            <Show
                when=move || has_more.get()
                fallback=move || view! { <span class="list-end">"That's everything"</span> }
            >
                <button
                    class="load-more-btn"
                    disabled=move || loading.get()
                    on:click=move |_| on_load_more.run(())
                >
                    {move || if loading.get() { "Loading..." } else { "Load more" }}
                </button>
            </Show>
        </div>
    }
}
