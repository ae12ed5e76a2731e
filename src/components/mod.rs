//! UI Components
//!
//! Screens and the pieces they share.

mod list_footer;
mod drop_slot;
mod ordered_list;
mod collection_list;
mod recipe_list;
mod recipe_detail;
mod tag_list;
mod profile_form;
mod account_panel;
mod nav_bar;

pub use list_footer::ListFooter;
pub use drop_slot::DropSlot;
pub use ordered_list::{IngredientList, StepList};
pub use collection_list::CollectionList;
pub use recipe_list::RecipeList;
pub use recipe_detail::RecipeDetailView;
pub use tag_list::TagList;
pub use profile_form::ProfileForm;
pub use account_panel::AccountPanel;
pub use nav_bar::NavBar;
