use examdesk::view::{FieldName, Record, SortOrder, SortState};
use leptos::prelude::*;

/// Return type for use_sort hook
pub struct UseSortReturn<T, F>
where
    T: Send + Sync + 'static,
    F: FieldName + Send + Sync,
{
    pub state: ReadSignal<SortState<F>>,
    /// Sort by a field; picking the current field again flips the order
    pub on_sort: Callback<F>,
    pub on_reset: Callback<()>,
    pub sorted: Memo<Vec<T>>,
}

/// Hook for managing sort state
///
/// # Example
/// ```rust
/// let sort = use_sort(search.filtered.into(), Some(ExamField::Title), SortOrder::Asc);
///
/// view! {
///     <SortHeader label="Duration" field=ExamField::Duration state=sort.state on_sort=sort.on_sort/>
/// }
/// ```
pub fn use_sort<T>(
    data: Signal<Vec<T>>,
    default_key: Option<T::Field>,
    default_order: SortOrder,
) -> UseSortReturn<T, T::Field>
where
    T: Record + Clone + PartialEq + Send + Sync + 'static,
    T::Field: Send + Sync,
{
    let (state, set_state) = signal(SortState::new(default_key, default_order));

    let on_sort = Callback::new(move |field: T::Field| {
        set_state.update(|state| state.toggle(field));
    });

    let on_reset = Callback::new(move |_| {
        set_state.update(|state| state.reset());
    });

    let sorted = Memo::new(move |_| {
        state.with(|state| data.with(|items| state.apply(items.iter().cloned())))
    });

    UseSortReturn {
        state,
        on_sort,
        on_reset,
        sorted,
    }
}
