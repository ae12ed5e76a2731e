//! Page Source Trait
//!
//! Abstract backend query collaborator. Implementations translate a
//! `PageRequest` into an offset/limit range query with an exact total count.

use async_trait::async_trait;

use super::state::{Page, PageRequest};
use crate::domain::DomainResult;

/// Backend query returning one page of records per request.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait PageSource {
    type Item;

    /// Short name used in log lines
    fn label(&self) -> &str;

    /// Fetch `request.limit` records starting at `request.offset`
    async fn fetch_page(&self, request: &PageRequest) -> DomainResult<Page<Self::Item>>;
}
