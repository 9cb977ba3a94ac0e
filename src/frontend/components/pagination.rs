use examdesk::view::Paginator;
use leptos::prelude::*;

/// Numbered page buttons shown around the current page
const WINDOW: usize = 5;

#[component]
pub fn Pagination(
    paginator: Memo<Paginator>,
    on_page: Callback<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    #[prop(optional, into)] item_name: Option<String>,
) -> impl IntoView {
    let item_name = item_name.unwrap_or_else(|| "items".to_string());
    let current = move || paginator.with(Paginator::page);

    view! {
        <div class="flex flex-col sm:flex-row items-center justify-between gap-3 px-4 py-3 border-t border-gray-200">
            <div class="text-sm text-gray-600">
                {move || paginator.with(Paginator::summary)} " " {item_name}
            </div>

            <Show when=move || paginator.with(|p| p.total_pages() > 1)>
                <div class="flex items-center gap-1">
                    <button
                        on:click=move |_| on_prev.run(())
                        disabled=move || !paginator.with(Paginator::has_prev)
                        class="px-3 py-1 rounded border border-gray-300 disabled:opacity-50 disabled:cursor-not-allowed hover:border-blue-500"
                    >
                        "← Previous"
                    </button>

                    {move || {
                        paginator
                            .with(|p| p.page_window(WINDOW))
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <button
                                        on:click=move |_| on_page.run(page)
                                        class="px-3 py-1 rounded border"
                                        class:bg-blue-600=move || current() == page
                                        class:text-white=move || current() == page
                                        class:border-gray-300=move || current() != page
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}

                    <button
                        on:click=move |_| on_next.run(())
                        disabled=move || !paginator.with(Paginator::has_next)
                        class="px-3 py-1 rounded border border-gray-300 disabled:opacity-50 disabled:cursor-not-allowed hover:border-blue-500"
                    >
                        "Next →"
                    </button>
                </div>
            </Show>
        </div>
    }
}
