use examdesk::view::{FieldName, SortOrder, SortState};
use leptos::prelude::*;

/// Clickable table header cell that sorts by `field`.
///
/// Shows ↑ or ↓ while `field` is the active key and ↕ otherwise.
#[component]
pub fn SortHeader<F>(
    label: &'static str,
    field: F,
    state: ReadSignal<SortState<F>>,
    on_sort: Callback<F>,
) -> impl IntoView
where
    F: FieldName + Send + Sync,
{
    let indicator = move || {
        state.with(|state| match (state.key() == Some(field), state.order()) {
            (false, _) => "↕",
            (true, SortOrder::Asc) => "↑",
            (true, SortOrder::Desc) => "↓",
        })
    };
    let is_active = move || state.with(|state| state.key() == Some(field));

    view! {
        <th
            on:click=move |_| on_sort.run(field)
            class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider cursor-pointer select-none hover:bg-gray-100"
            class:text-blue-600=is_active
            class:text-gray-500=move || !is_active()
            title=format!("Sort by {}", field.name())
        >
            <span class="inline-flex items-center gap-1">
                {label}
                <span class="text-gray-400">{indicator}</span>
            </span>
        </th>
    }
}
