//! Accumulated List State
//!
//! Sans-IO state machine behind every paginated list: `begin_load` decides
//! whether a request may be issued, `apply_page` folds a successful response in.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Items requested per call unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One range query against the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
    pub search_term: Option<String>,
}

/// One page of records plus the exact size of the whole result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn new(records: Vec<T>, total_count: usize) -> Self {
        Self { records, total_count }
    }

    pub fn empty(total_count: usize) -> Self {
        Self { records: Vec::new(), total_count }
    }
}

/// What a `load_more` call ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Guarded out: a load was in flight or the list is exhausted
    Skipped,
    /// Appended this many records
    Appended(usize),
    /// The backend returned an empty page; no further loads will be issued
    Exhausted,
    /// The backend call failed; the state is unchanged
    Failed(DomainError),
    /// The response arrived after its list was disposed
    Discarded,
}

/// Accumulated results of a paginated list
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    offset: usize,
    page_size: usize,
    loading: bool,
    has_more: bool,
    total_count: usize,
    search_term: Option<String>,
}

impl<T> ListState<T> {
    /// Fresh, empty list. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            offset: 0,
            page_size: page_size.max(1),
            loading: false,
            has_more: true,
            total_count: 0,
            search_term: None,
        }
    }

    /// Send `term` with every request
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Mark a load in flight and build its request.
    ///
    /// Returns `None` (and changes nothing) while loading or once exhausted.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some(PageRequest {
            offset: self.offset,
            limit: self.page_size,
            search_term: self.search_term.clone(),
        })
    }

    /// Fold a successful page into the list. Does not touch `loading`.
    pub fn apply_page(&mut self, page: Page<T>) -> LoadOutcome {
        if page.records.is_empty() {
            self.has_more = false;
            return LoadOutcome::Exhausted;
        }

        let count = page.records.len();
        self.items.extend(page.records);
        self.offset += count;
        self.total_count = page.total_count;
        LoadOutcome::Appended(count)
    }

    /// Clear the in-flight flag
    pub fn finish_load(&mut self) {
        self.loading = false;
    }
}
