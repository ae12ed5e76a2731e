//! Recipe Book Core
//!
//! Layered like the UI consumes it:
//! - domain: entities and errors
//! - paging: paginated list state and loader
//! - detail: recipe detail formatter
//! - ordering: sort-number handling for steps and ingredients
//! - backend: REST client and page sources

pub mod domain;
pub mod paging;
pub mod detail;
pub mod ordering;
pub mod backend;
mod lenient;

pub use domain::{DomainError, DomainResult, Entity};
pub use detail::{format_recipe_detail, RecipeDetail};
