//! Paginated List Loader
//!
//! Drives a `ListState` against a `PageSource`. The state lives behind a
//! `StateCell` so the same loader works with a plain `RefCell` or with a
//! reactive signal owned by the UI.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::source::PageSource;
use super::state::{ListState, LoadOutcome};

/// Interior-mutable home of a `ListState`.
///
/// `update_state` returns `None` when the state no longer exists (for
/// example a signal whose owner was disposed).
pub trait StateCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R>;
}

impl<T> StateCell<T> for RefCell<ListState<T>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Clears `loading` when dropped, so every exit path releases the guard
struct InFlight<'a, T, C: StateCell<T>> {
    cell: &'a C,
    _item: PhantomData<fn() -> T>,
}

impl<T, C: StateCell<T>> Drop for InFlight<'_, T, C> {
    fn drop(&mut self) {
        self.cell.update_state(|s| s.finish_load());
    }
}

/// A paginated list bound to its backend query
pub struct PagedList<S: PageSource, C = RefCell<ListState<<S as PageSource>::Item>>> {
    source: S,
    state: C,
}

impl<S: PageSource> PagedList<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self::with_state(source, RefCell::new(ListState::new(page_size)))
    }
}

impl<S, C> PagedList<S, C>
where
    S: PageSource,
    C: StateCell<S::Item>,
{
    pub fn with_state(source: S, state: C) -> Self {
        Self { source, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the next page and append it.
    ///
    /// No-op while a load is in flight or after an empty page. Failures are
    /// logged and leave items, offset and has-more untouched.
    pub async fn load_more(&self) -> LoadOutcome {
        let Some(request) = self.state.update_state(|s| s.begin_load()).flatten() else {
            return LoadOutcome::Skipped;
        };
        let _in_flight: InFlight<'_, S::Item, C> = InFlight {
            cell: &self.state,
            _item: PhantomData,
        };

        log::debug!(
            "[{}] loading offset={} limit={} search={:?}",
            self.source.label(),
            request.offset,
            request.limit,
            request.search_term
        );

        match self.source.fetch_page(&request).await {
            Ok(page) => {
                let outcome = self
                    .state
                    .update_state(|s| s.apply_page(page))
                    .unwrap_or(LoadOutcome::Discarded);
                match &outcome {
                    LoadOutcome::Exhausted => {
                        log::info!("[{}] reached end of list at offset {}", self.source.label(), request.offset)
                    }
                    LoadOutcome::Discarded => {
                        log::debug!("[{}] list disposed, dropping page at offset {}", self.source.label(), request.offset)
                    }
                    _ => {}
                }
                outcome
            }
            Err(e) => {
                log::error!(
                    "[{}] failed to load page at offset {}: {}",
                    self.source.label(),
                    request.offset,
                    e
                );
                LoadOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, DomainResult};
    use crate::paging::{Page, PageRequest};
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    enum Scripted {
        Page(Vec<u32>, usize),
        Fail(&'static str),
        Gated(oneshot::Receiver<()>, Vec<u32>, usize),
    }

    /// Replays canned responses and records every request
    #[derive(Default)]
    struct FakeSource {
        script: RefCell<VecDeque<Scripted>>,
        requests: RefCell<Vec<PageRequest>>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn then(self, step: Scripted) -> Self {
            self.script.borrow_mut().push_back(step);
            self
        }
    }

    #[async_trait(?Send)]
    impl PageSource for FakeSource {
        type Item = u32;

        fn label(&self) -> &str {
            "fake"
        }

        async fn fetch_page(&self, request: &PageRequest) -> DomainResult<Page<u32>> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(request.clone());
            let next = self.script.borrow_mut().pop_front();
            match next {
                Some(Scripted::Page(records, total)) => Ok(Page::new(records, total)),
                Some(Scripted::Fail(msg)) => Err(DomainError::Backend(msg.to_string())),
                Some(Scripted::Gated(gate, records, total)) => {
                    let _ = gate.await;
                    Ok(Page::new(records, total))
                }
                None => Ok(Page::empty(0)),
            }
        }
    }

    fn snapshot(list: &PagedList<FakeSource>) -> ListState<u32> {
        list.state().borrow().clone()
    }

    #[tokio::test]
    async fn test_pages_accumulate_in_fetch_order() {
        let source = FakeSource::default()
            .then(Scripted::Page(vec![1, 2, 3], 7))
            .then(Scripted::Page(vec![4, 5, 6], 7))
            .then(Scripted::Page(vec![7], 7));
        let list = PagedList::new(source, 3);

        assert_eq!(list.load_more().await, LoadOutcome::Appended(3));
        assert_eq!(list.load_more().await, LoadOutcome::Appended(3));
        assert_eq!(list.load_more().await, LoadOutcome::Appended(1));

        let state = snapshot(&list);
        assert_eq!(state.items(), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(state.offset(), 7);
        assert_eq!(state.total_count(), 7);
        assert!(!state.loading());

        let offsets: Vec<usize> = list.source().requests.borrow().iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let source = FakeSource::default()
            .then(Scripted::Page(vec![1, 2], 3))
            .then(Scripted::Page(vec![2, 3], 3));
        let list = PagedList::new(source, 2);

        list.load_more().await;
        list.load_more().await;

        assert_eq!(snapshot(&list).items(), &[1, 2, 2, 3]);
    }

    #[tokio::test]
    async fn test_reentrant_load_issues_one_request() {
        let (release, gate) = oneshot::channel();
        let source = FakeSource::default().then(Scripted::Gated(gate, vec![10, 11], 2));
        let list = PagedList::new(source, 2);

        let (first, second, third) = tokio::join!(list.load_more(), list.load_more(), async {
            let loading = list.state().borrow().loading();
            let _ = release.send(());
            loading
        });

        let outcomes = [first, second];
        assert_eq!(list.source().calls.get(), 1);
        assert!(outcomes.contains(&LoadOutcome::Appended(2)));
        assert!(outcomes.contains(&LoadOutcome::Skipped));
        assert!(third, "loading should be set while the request is in flight");
        assert!(!snapshot(&list).loading());
    }

    #[tokio::test]
    async fn test_empty_page_stops_further_requests() {
        let source = FakeSource::default()
            .then(Scripted::Page(vec![1], 1))
            .then(Scripted::Page(vec![], 1));
        let list = PagedList::new(source, 10);

        list.load_more().await;
        assert_eq!(list.load_more().await, LoadOutcome::Exhausted);
        assert_eq!(list.load_more().await, LoadOutcome::Skipped);
        assert_eq!(list.load_more().await, LoadOutcome::Skipped);

        let state = snapshot(&list);
        assert!(!state.has_more());
        assert_eq!(state.items(), &[1]);
        assert_eq!(state.offset(), 1);
        assert_eq!(list.source().calls.get(), 2);
    }

    #[tokio::test]
    async fn test_error_leaves_state_unchanged() {
        let source = FakeSource::default()
            .then(Scripted::Page(vec![1, 2], 5))
            .then(Scripted::Fail("connection reset"))
            .then(Scripted::Page(vec![3], 5));
        let list = PagedList::new(source, 2);

        list.load_more().await;
        let before = snapshot(&list);

        let outcome = list.load_more().await;
        assert_eq!(outcome, LoadOutcome::Failed(DomainError::Backend("connection reset".to_string())));
        assert_eq!(snapshot(&list), before);
        assert!(!snapshot(&list).loading());

        // A later call retries from the same offset
        list.load_more().await;
        let requests = list.source().requests.borrow();
        assert_eq!(requests[1].offset, 2);
        assert_eq!(requests[2].offset, 2);
        assert_eq!(snapshot(&list).items(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn test_loading_false_before_first_call() {
        let list = PagedList::new(FakeSource::default(), 10);
        assert!(!snapshot(&list).loading());
    }

    #[tokio::test]
    async fn test_dropped_load_releases_guard() {
        let (_release, gate) = oneshot::channel();
        let source = FakeSource::default().then(Scripted::Gated(gate, vec![1], 1));
        let list = PagedList::new(source, 10);

        tokio::select! {
            biased;
            _ = list.load_more() => panic!("gated load should not finish"),
            _ = async {} => {}
        }

        let state = snapshot(&list);
        assert!(!state.loading());
        assert!(state.has_more());
        assert!(state.items().is_empty());
        assert_eq!(list.source().calls.get(), 1);
    }

    #[tokio::test]
    async fn test_search_term_sent_with_every_request() {
        let source = FakeSource::default()
            .then(Scripted::Page(vec![1], 2))
            .then(Scripted::Page(vec![2], 2));
        let list = PagedList::with_state(source, RefCell::new(ListState::new(1).with_search("bread")));

        list.load_more().await;
        list.load_more().await;

        let requests = list.source().requests.borrow();
        assert!(requests.iter().all(|r| r.search_term.as_deref() == Some("bread")));
        assert!(requests.iter().all(|r| r.limit == 1));
    }

    /// A cell whose state has gone away, like a disposed signal
    struct Disposed;

    impl StateCell<u32> for Disposed {
        fn update_state<R>(&self, _f: impl FnOnce(&mut ListState<u32>) -> R) -> Option<R> {
            None
        }
    }

    #[tokio::test]
    async fn test_disposed_state_skips_request() {
        let list = PagedList::with_state(FakeSource::default(), Disposed);
        assert_eq!(list.load_more().await, LoadOutcome::Skipped);
        assert_eq!(list.source().calls.get(), 0);
    }

    /// A cell whose state can be dropped mid-request, like a signal whose
    /// owner unmounts while a page is loading
    struct Droppable(RefCell<Option<ListState<u32>>>);

    impl StateCell<u32> for Droppable {
        fn update_state<R>(&self, f: impl FnOnce(&mut ListState<u32>) -> R) -> Option<R> {
            self.0.borrow_mut().as_mut().map(f)
        }
    }

    #[tokio::test]
    async fn test_page_after_dispose_is_discarded() {
        let (release, gate) = oneshot::channel();
        let source = FakeSource::default().then(Scripted::Gated(gate, vec![1, 2], 2));
        let list = PagedList::with_state(source, Droppable(RefCell::new(Some(ListState::new(2)))));

        let (outcome, state_at_dispose) = tokio::join!(list.load_more(), async {
            let taken = list.state().0.borrow_mut().take();
            let _ = release.send(());
            taken
        });

        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(list.source().calls.get(), 1);
        assert!(list.state().0.borrow().is_none());

        // The last state seen was mid-load and received no records
        let state = state_at_dispose.expect("state present until disposed");
        assert!(state.loading());
        assert!(state.items().is_empty());
    }
}
