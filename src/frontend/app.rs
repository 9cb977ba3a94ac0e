use examdesk::session::{Session, SessionUser, SystemClock};
use leptos::logging;
use leptos::prelude::*;

use crate::pages::{Exams, Users};
use crate::storage::LocalTokenStore;

type BrowserSession = Session<LocalTokenStore, SystemClock>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Users,
    Exams,
}

impl Tab {
    const ALL: [Tab; 2] = [Tab::Users, Tab::Exams];

    fn label(self) -> &'static str {
        match self {
            Tab::Users => "Users",
            Tab::Exams => "Exams",
        }
    }
}

fn restore_session() -> BrowserSession {
    match Session::restore(LocalTokenStore, SystemClock) {
        Ok(session) => {
            if session.refresh_due() {
                logging::warn!("Stored session token is due for refresh");
            }
            session
        }
        Err(e) => {
            logging::warn!("Ignoring stored session: {}", e);
            Session::new(LocalTokenStore, SystemClock)
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = StoredValue::new(restore_session());
    let user = RwSignal::new(
        session.with_value(|s| s.user().filter(|_| s.is_authenticated()).cloned()),
    );
    let tab = RwSignal::new(Tab::Users);

    let on_sign_out = move |_| {
        session.update_value(|s| s.sign_out());
        user.set(None);
    };

    view! {
        <main class="min-h-screen bg-gray-100 flex flex-col">
            <nav class="bg-white border-b border-gray-200">
                <div class="container mx-auto flex justify-between items-center px-6 py-4">
                    <div class="flex items-center gap-2">
                        <h1 class="text-2xl font-bold text-blue-700">"examdesk"</h1>
                        <span class="text-xs text-gray-400 font-mono">
                            {env!("CARGO_PKG_VERSION")}
                        </span>
                    </div>
                    <div class="flex gap-2 items-center">
                        {Tab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        on:click=move |_| tab.set(t)
                                        class="px-4 py-2 rounded-lg font-medium transition-colors"
                                        class:bg-blue-100=move || tab.get() == t
                                        class:text-blue-800=move || tab.get() == t
                                        class:text-gray-600=move || tab.get() != t
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <SessionBadge user=user.read_only() on_sign_out=Callback::new(on_sign_out)/>
                </div>
            </nav>

            <div class="flex-1 container mx-auto px-6 py-8">
                {move || match tab.get() {
                    Tab::Users => view! { <Users/> }.into_any(),
                    Tab::Exams => view! { <Exams/> }.into_any(),
                }}
            </div>
        </main>
    }
}

#[component]
fn SessionBadge(user: ReadSignal<Option<SessionUser>>, on_sign_out: Callback<()>) -> impl IntoView {
    view! {
        <div class="text-sm text-gray-600">
            {move || match user.get() {
                Some(user) => view! {
                    <span class="flex items-center gap-2">
                        <span>{user.username}</span>
                        <span class="px-2 py-0.5 rounded bg-gray-100 text-xs">{user.role.as_str()}</span>
                        <button
                            on:click=move |_| on_sign_out.run(())
                            class="text-blue-600 hover:underline"
                        >
                            "Sign out"
                        </button>
                    </span>
                }
                .into_any(),
                None => view! { <span>"Not signed in"</span> }.into_any(),
            }}
        </div>
    }
}
