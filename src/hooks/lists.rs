//! List Hooks
//!
//! One paginated list per screen: recipes and collections come from the
//! newest-first table query, tags from the tag-search query.

use recipe_core::backend::{TableRangeSource, TagSearchSource};
use recipe_core::domain::{Collection, RecipeSummary};
use recipe_core::paging::ListState;

use super::paged_list::{use_paged_list, PagedListHandle};
use crate::context::use_app_context;

pub type CollectionsHandle = PagedListHandle<TableRangeSource<Collection>>;
pub type RecipesHandle = PagedListHandle<TableRangeSource<RecipeSummary>>;
pub type TagsHandle = PagedListHandle<TagSearchSource>;

/// Collections, newest first. No search term is sent.
pub fn use_collections() -> CollectionsHandle {
    let ctx = use_app_context();
    use_paged_list(
        TableRangeSource::new(ctx.client(), "collections"),
        ListState::new(ctx.page_size()),
    )
}

/// Recipes, newest first
pub fn use_recipes() -> RecipesHandle {
    let ctx = use_app_context();
    use_paged_list(
        TableRangeSource::new(ctx.client(), "recipes"),
        ListState::new(ctx.page_size()),
    )
}

/// Tags matching `search_term` (empty matches all)
pub fn use_tags(search_term: String) -> TagsHandle {
    let ctx = use_app_context();
    use_paged_list(
        TagSearchSource::new(ctx.client()),
        ListState::new(ctx.page_size()).with_search(search_term),
    )
}
