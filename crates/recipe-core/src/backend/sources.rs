//! Page Sources
//!
//! The two concrete backend queries behind paginated lists.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::client::RestClient;
use crate::domain::{DomainResult, Tag};
use crate::paging::{Page, PageRequest, PageSource};

/// Newest rows first
pub const NEWEST_FIRST: &str = "created_at.desc";

/// Range query over a whole table, newest rows first.
///
/// The request's search term is ignored.
pub struct TableRangeSource<T> {
    client: RestClient,
    table: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> TableRangeSource<T> {
    pub fn new(client: RestClient, table: &'static str) -> Self {
        Self {
            client,
            table,
            _item: PhantomData,
        }
    }
}

impl<T> Clone for TableRangeSource<T> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone(), self.table)
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned> PageSource for TableRangeSource<T> {
    type Item = T;

    fn label(&self) -> &str {
        self.table
    }

    async fn fetch_page(&self, request: &PageRequest) -> DomainResult<Page<T>> {
        self.client.fetch_range(self.table, Some(NEWEST_FIRST), request).await
    }
}

/// Tag search through the dedicated `search_tags` function
#[derive(Clone)]
pub struct TagSearchSource {
    client: RestClient,
}

impl TagSearchSource {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl PageSource for TagSearchSource {
    type Item = Tag;

    fn label(&self) -> &str {
        "tags"
    }

    async fn fetch_page(&self, request: &PageRequest) -> DomainResult<Page<Tag>> {
        self.client.search_tags(request).await
    }
}
