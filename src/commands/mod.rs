//! Backend Command Wrappers
//!
//! Frontend bindings to backend calls, organized by domain. Errors are
//! flattened to strings for display.

mod recipe;
mod profile;

pub use recipe::*;
pub use profile::*;
