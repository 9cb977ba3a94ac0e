use examdesk::models::{Exam, ExamField, mock_exams};
use examdesk::view::SortOrder;
use leptos::prelude::*;

use crate::components::{Pagination, SearchInput, SortHeader};
use crate::hooks::{use_pagination, use_search, use_sort};

const PAGE_SIZE: usize = 10;

#[component]
pub fn Exams() -> impl IntoView {
    let exams = Signal::stored(mock_exams());

    let search = use_search(
        exams,
        vec![
            ExamField::Title,
            ExamField::Description,
            ExamField::Category,
            ExamField::Author,
        ],
    );
    let sort = use_sort(search.filtered.into(), None, SortOrder::Asc);
    let pagination = use_pagination(sort.sorted.into(), PAGE_SIZE);

    let rows = move || {
        pagination
            .page
            .get()
            .items
            .into_iter()
            .map(|exam: Exam| {
                let published = exam.status == "published";
                let draft = !published;
                view! {
                    <tr class="border-t border-gray-100 hover:bg-gray-50">
                        <td class="px-4 py-3">
                            <div class="font-medium">{exam.title}</div>
                            <div class="text-xs text-gray-500">
                                {exam.description.unwrap_or_default()}
                            </div>
                        </td>
                        <td class="px-4 py-3">{exam.category.unwrap_or_default()}</td>
                        <td class="px-4 py-3">{format!("{} min", exam.duration)}</td>
                        <td class="px-4 py-3">{exam.questions}</td>
                        <td class="px-4 py-3">{exam.difficulty.unwrap_or_default()}</td>
                        <td class="px-4 py-3">
                            <span
                                class="px-2 py-0.5 rounded text-xs"
                                class:bg-green-100=published
                                class:text-green-800=published
                                class:bg-yellow-100=draft
                                class:text-yellow-800=draft
                            >
                                {exam.status}
                            </span>
                        </td>
                        <td class="px-4 py-3 text-gray-500">{exam.author.unwrap_or_default()}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="space-y-4">
            <div class="flex items-center justify-between gap-4">
                <h2 class="text-2xl font-semibold">"Exams"</h2>
                <div class="flex items-center gap-2">
                    <div class="w-72">
                        <SearchInput
                            value=search.query
                            on_change=search.on_query_change
                            on_clear=search.on_clear
                            placeholder="Search exams..."
                        />
                    </div>
                    <button
                        on:click=move |_| {
                            search.on_clear.run(());
                            sort.on_reset.run(());
                            pagination.on_reset.run(());
                        }
                        class="px-3 py-2 rounded-lg border border-gray-300 text-sm hover:border-blue-500"
                    >
                        "Reset"
                    </button>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            <SortHeader label="Title" field=ExamField::Title state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Category" field=ExamField::Category state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Duration" field=ExamField::Duration state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Questions" field=ExamField::Questions state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Difficulty" field=ExamField::Difficulty state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Status" field=ExamField::Status state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Author" field=ExamField::Author state=sort.state on_sort=sort.on_sort/>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || pagination.page.with(|page| !page.items.is_empty())
                            fallback=|| view! {
                                <tr>
                                    <td colspan="7" class="px-4 py-8 text-center text-gray-500">"No exams found."</td>
                                </tr>
                            }
                        >
                            {rows}
                        </Show>
                    </tbody>
                </table>
                <Pagination
                    paginator=pagination.paginator
                    on_page=pagination.on_page
                    on_prev=pagination.on_prev
                    on_next=pagination.on_next
                    item_name="exams"
                />
            </div>
        </section>
    }
}
