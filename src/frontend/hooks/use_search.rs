use examdesk::view::{Record, search};
use leptos::prelude::*;

/// Return type for use_search hook
pub struct UseSearchReturn<T: Send + Sync + 'static> {
    pub query: ReadSignal<String>,
    pub on_query_change: Callback<String>,
    pub on_clear: Callback<()>,
    /// Records with at least one search field containing the query
    pub filtered: Memo<Vec<T>>,
}

/// Hook for case-insensitive substring search over `fields`
///
/// # Example
/// ```rust
/// let search = use_search(data, vec![UserField::Username, UserField::Email]);
///
/// view! {
///     <SearchInput
///         value=search.query
///         on_change=search.on_query_change
///         on_clear=search.on_clear
///         placeholder="Search users..."
///     />
/// }
/// ```
pub fn use_search<T>(data: Signal<Vec<T>>, fields: Vec<T::Field>) -> UseSearchReturn<T>
where
    T: Record + Clone + PartialEq + Send + Sync + 'static,
    T::Field: Send + Sync,
{
    let (query, set_query) = signal(String::new());

    let on_query_change = Callback::new(move |value: String| {
        set_query.set(value);
    });

    let on_clear = Callback::new(move |_| {
        set_query.set(String::new());
    });

    let filtered = Memo::new(move |_| {
        query.with(|query| data.with(|items| search::filter(items.iter().cloned(), &fields, query)))
    });

    UseSearchReturn {
        query,
        on_query_change,
        on_clear,
        filtered,
    }
}
