//! Paginated Lists
//!
//! Offset/limit pagination shared by the collection, tag and recipe lists.

mod state;
mod source;
mod loader;

pub use state::{ListState, LoadOutcome, Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use source::PageSource;
pub use loader::{PagedList, StateCell};
