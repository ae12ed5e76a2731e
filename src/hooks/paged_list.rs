//! Paginated List Hook
//!
//! Binds a `PagedList` to a reactive signal. The list lives as long as the
//! component that called the hook; a response arriving after that is dropped.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::paging::{ListState, PageSource, PagedList, StateCell};

/// List state held in a signal so views re-render on every change
pub struct SignalState<T: Send + Sync + 'static>(RwSignal<ListState<T>>);

impl<T: Send + Sync + 'static> StateCell<T> for SignalState<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Read-only list state plus the `load_more` trigger
pub struct PagedListHandle<S>
where
    S: PageSource + 'static,
    S::Item: Send + Sync + 'static,
{
    state: RwSignal<ListState<S::Item>>,
    list: StoredValue<Rc<PagedList<S, SignalState<S::Item>>>, LocalStorage>,
}

impl<S> Clone for PagedListHandle<S>
where
    S: PageSource + 'static,
    S::Item: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for PagedListHandle<S>
where
    S: PageSource + 'static,
    S::Item: Send + Sync + 'static,
{
}

impl<S> PagedListHandle<S>
where
    S: PageSource + 'static,
    S::Item: Clone + Send + Sync + 'static,
{
    pub fn state(&self) -> ReadSignal<ListState<S::Item>> {
        self.state.read_only()
    }

    pub fn items(&self) -> Vec<S::Item> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading())
    }

    pub fn has_more(&self) -> bool {
        self.state.with(|s| s.has_more())
    }

    /// Start loading the next page. Ignored while a page is in flight or
    /// once the list is exhausted.
    pub fn load_more(&self) {
        let Some(list) = self.list.try_get_value() else {
            return;
        };
        spawn_local(async move {
            list.load_more().await;
        });
    }
}

/// Create a list for the current screen and fetch its first page
pub fn use_paged_list<S>(source: S, initial: ListState<S::Item>) -> PagedListHandle<S>
where
    S: PageSource + 'static,
    S::Item: Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(initial);
    let list = PagedList::with_state(source, SignalState(state));
    let handle = PagedListHandle {
        state,
        list: StoredValue::new_local(Rc::new(list)),
    };
    handle.load_more();
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use async_trait::async_trait;
    use recipe_core::paging::{LoadOutcome, Page, PageRequest};
    use recipe_core::DomainResult;
    use tokio::sync::oneshot;

    /// Returns one record per call, optionally waiting on a gate first
    struct GatedSource {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl GatedSource {
        fn open() -> Self {
            Self { gate: RefCell::new(None) }
        }

        fn gated(gate: oneshot::Receiver<()>) -> Self {
            Self { gate: RefCell::new(Some(gate)) }
        }
    }

    #[async_trait(?Send)]
    impl PageSource for GatedSource {
        type Item = u32;

        fn label(&self) -> &str {
            "gated"
        }

        async fn fetch_page(&self, request: &PageRequest) -> DomainResult<Page<u32>> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(Page::new(vec![request.offset as u32 + 1], 3))
        }
    }

    #[tokio::test]
    async fn test_signal_state_receives_pages() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ListState::<u32>::new(1));
        let list = PagedList::with_state(GatedSource::open(), SignalState(state));

        assert_eq!(list.load_more().await, LoadOutcome::Appended(1));
        assert_eq!(list.load_more().await, LoadOutcome::Appended(1));

        assert_eq!(state.with_untracked(|s| s.items().to_vec()), vec![1, 2]);
        assert_eq!(state.with_untracked(|s| s.total_count()), 3);
        assert!(!state.with_untracked(|s| s.loading()));
    }

    #[tokio::test]
    async fn test_disposed_signal_discards_late_page() {
        let owner = Owner::new();
        owner.set();

        let (release, gate) = oneshot::channel();
        let state = RwSignal::new(ListState::<u32>::new(1));
        let list = PagedList::with_state(GatedSource::gated(gate), SignalState(state));

        let (outcome, was_loading) = tokio::join!(list.load_more(), async {
            let loading = state.with_untracked(|s| s.loading());
            state.dispose();
            let _ = release.send(());
            loading
        });

        assert!(was_loading);
        assert_eq!(outcome, LoadOutcome::Discarded);
        assert!(state.try_with_untracked(|s| s.items().len()).is_none());
        // Further loads are guarded out rather than panicking
        assert_eq!(list.load_more().await, LoadOutcome::Skipped);
    }
}
