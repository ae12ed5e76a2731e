//! Data Hooks
//!
//! Screen-scoped state that fetches from the backend.

mod paged_list;
mod lists;
mod recipe_detail;

pub use lists::{use_collections, use_recipes, use_tags};
pub use recipe_detail::use_recipe_detail;
