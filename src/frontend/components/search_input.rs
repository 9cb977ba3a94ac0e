use leptos::prelude::*;

/// Search box that reports every keystroke.
///
/// Filtering runs on each change, so there is no debounce.
#[component]
pub fn SearchInput(
    /// The current query
    value: ReadSignal<String>,
    /// Called with the new query on every input
    on_change: Callback<String>,
    /// Called when the clear button is pressed
    on_clear: Callback<()>,
    #[prop(optional, default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        on_change.run(event_target_value(&ev));
    };

    view! {
        <div class="relative">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=on_input
                class="w-full rounded-lg border border-gray-300 px-4 py-2 pr-10 focus:border-blue-500 focus:ring-2 focus:ring-blue-500 focus:outline-none"
            />
            <Show when=move || value.with(|v| !v.is_empty())>
                <button
                    on:click=move |_| on_clear.run(())
                    class="absolute right-2 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-700"
                    title="Clear search"
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
