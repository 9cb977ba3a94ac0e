use examdesk::view::{Page, Paginator};
use leptos::logging;
use leptos::prelude::*;

/// Return type for use_pagination hook
pub struct UsePaginationReturn<T: Send + Sync + 'static> {
    /// Paginator synced with the current collection; its page is always in range
    pub paginator: Memo<Paginator>,
    pub page: Memo<Page<T>>,
    /// Jump to a 1-based page; out-of-range pages are ignored
    pub on_page: Callback<usize>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Hook for paging a reactive collection
///
/// When the collection shrinks the current page is clamped to the new
/// last page rather than reset, and it stays there if the collection grows
/// back.
///
/// # Example
/// ```rust
/// let pagination = use_pagination(sort.sorted.into(), 10);
///
/// view! {
///     <Pagination
///         paginator=pagination.paginator
///         on_page=pagination.on_page
///         on_prev=pagination.on_prev
///         on_next=pagination.on_next
///         item_name="users"
///     />
/// }
/// ```
pub fn use_pagination<T>(data: Signal<Vec<T>>, page_size: usize) -> UsePaginationReturn<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let base = match Paginator::new(page_size) {
        Ok(paginator) => paginator,
        Err(e) => {
            logging::warn!("{} (got {}); showing one record per page", e, page_size);
            Paginator::new(1).unwrap_or_default()
        }
    };
    let state = RwSignal::new(base.resized(data.with_untracked(Vec::len)));

    let paginator = Memo::new(move |_| {
        let total_items = data.with(Vec::len);
        state.with(|state| state.resized(total_items))
    });

    // Keep the clamp, so a regrown collection does not jump back to the old page
    Effect::new(move |_| {
        let synced = paginator.get();
        if state.with_untracked(|state| *state != synced) {
            state.set(synced);
        }
    });

    let page = Memo::new(move |_| {
        paginator.with(|paginator| data.with(|items| paginator.page_of(items.iter().cloned())))
    });

    let navigate = move |step: fn(&mut Paginator) -> bool| {
        let mut next = paginator.get_untracked();
        if step(&mut next) {
            state.set(next);
        }
    };

    let on_page = Callback::new(move |target: usize| {
        let mut next = paginator.get_untracked();
        if next.go_to_page(target) {
            state.set(next);
        }
    });

    let on_prev = Callback::new(move |_| navigate(Paginator::prev_page));
    let on_next = Callback::new(move |_| navigate(Paginator::next_page));
    let on_reset = Callback::new(move |_| {
        navigate(|paginator| {
            paginator.reset();
            true
        })
    });

    UsePaginationReturn {
        paginator,
        page,
        on_page,
        on_prev,
        on_next,
        on_reset,
    }
}
