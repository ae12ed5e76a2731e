//! Collection List Component
//!
//! Paginated collections, newest first.

use leptos::prelude::*;

use crate::format::format_date;
use crate::hooks::use_collections;
use crate::components::ListFooter;

#[component]
pub fn CollectionList(
    selected: ReadSignal<Option<i64>>,
    #[prop(into)] on_select: Callback<i64>,
) -> impl IntoView {
    let collections = use_collections();
    let state = collections.state();

    view! {
        <section class="collection-list">
            <h2>"Collections"</h2>

            <ul class="card-list">
                <For
                    // Duplicates across pages are possible, so key by position too
                    each=move || collections.items().into_iter().enumerate()
                    key=|(index, collection)| (*index, collection.id)
                    children=move |(_, collection)| {
                        let id = collection.id;
                        let is_selected = move || selected.get() == Some(id);
                        view! {
                            <li
                                class=move || if is_selected() { "card selected" } else { "card" }
                                on:click=move |_| on_select.run(id)
                            >
                                <h3 class="card-title">{collection.name.clone()}</h3>
                                <p class="card-description">{collection.description.clone().unwrap_or_default()}</p>
                                <span class="card-meta">{format_date(collection.created_at)}</span>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || state.with(|s| s.items().is_empty() && !s.has_more())>
                <div class="empty-message">"No collections yet"</div>
            </Show>

            <ListFooter
                shown=Signal::derive(move || state.with(|s| s.items().len()))
                total=Signal::derive(move || state.with(|s| s.total_count()))
                loading=Signal::derive(move || collections.loading())
                has_more=Signal::derive(move || collections.has_more())
                noun="collections"
                on_load_more=move |_| collections.load_more()
            />
        </section>
    }
}
