use examdesk::models::{Role, User, UserField, mock_users};
use examdesk::view::SortOrder;
use leptos::prelude::*;

use crate::components::{Pagination, SearchInput, SortHeader};
use crate::hooks::{use_pagination, use_search, use_sort};

const PAGE_SIZE: usize = 3;

fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "bg-red-100 text-red-800",
        Role::Manager => "bg-blue-100 text-blue-800",
        Role::User => "bg-gray-100 text-gray-800",
    }
}

#[component]
pub fn Users() -> impl IntoView {
    let users = Signal::stored(mock_users());

    let search = use_search(users, vec![UserField::Username, UserField::Email]);
    let sort = use_sort(search.filtered.into(), None, SortOrder::Asc);
    let pagination = use_pagination(sort.sorted.into(), PAGE_SIZE);

    let rows = move || {
        pagination
            .page
            .get()
            .items
            .into_iter()
            .map(|user: User| {
                let status_class = if user.is_active() {
                    "text-green-700"
                } else {
                    "text-gray-400"
                };
                view! {
                    <tr class="border-t border-gray-100 hover:bg-gray-50">
                        <td class="px-4 py-3 font-medium">{user.username}</td>
                        <td class="px-4 py-3 text-gray-600">{user.email}</td>
                        <td class="px-4 py-3">
                            <span class=format!("px-2 py-0.5 rounded text-xs {}", role_badge(user.role))>
                                {user.role.as_str()}
                            </span>
                        </td>
                        <td class=format!("px-4 py-3 {}", status_class)>{user.status}</td>
                        <td class="px-4 py-3 text-gray-500">
                            {user.last_login.unwrap_or_else(|| "-".to_string())}
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="space-y-4">
            <div class="flex items-center justify-between gap-4">
                <h2 class="text-2xl font-semibold">"Users"</h2>
                <div class="w-72">
                    <SearchInput
                        value=search.query
                        on_change=search.on_query_change
                        on_clear=search.on_clear
                        placeholder="Search users..."
                    />
                </div>
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            <SortHeader label="Username" field=UserField::Username state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Email" field=UserField::Email state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Role" field=UserField::Role state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Status" field=UserField::Status state=sort.state on_sort=sort.on_sort/>
                            <SortHeader label="Last Login" field=UserField::LastLogin state=sort.state on_sort=sort.on_sort/>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || pagination.page.with(|page| !page.items.is_empty())
                            fallback=|| view! {
                                <tr>
                                    <td colspan="5" class="px-4 py-8 text-center text-gray-500">"No users found."</td>
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
                    item_name="users"
                />
            </div>
        </section>
    }
}
