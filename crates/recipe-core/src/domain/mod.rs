//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod entity;
mod recipe;
mod collection;
mod tag;
mod profile;

pub use entity::{Entity, DomainError, DomainResult};
pub use recipe::{RawRecipe, RawStep, RawIngredient, RecipeSummary, Step, Ingredient};
pub use collection::{Collection, CollectionLink};
pub use tag::{Tag, TagLink};
pub use profile::{Profile, ProfileUpdate};
