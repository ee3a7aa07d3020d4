//! Fallback for unknown routes, including the create/update paths when this
//! app is deployed without those views.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-gray-50 px-4 text-center dark:bg-gray-900">
            <h1 class="text-7xl font-black text-gray-200 select-none dark:text-gray-700">"404"</h1>
            <p class="mt-2 text-xl font-semibold text-gray-900 dark:text-white">"Page not found"</p>
            <p class="mt-2 max-w-sm text-sm text-gray-500 dark:text-gray-400">
                "This page is not part of the user list."
            </p>
            <div class="mt-6 flex items-center gap-4">
                <A
                    href=paths::USERS
                    {..}
                    class="inline-flex items-center rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800"
                >
                    "Back to users"
                </A>
                <button
                    type="button"
                    on:click=move |_| {
                        let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
                            tracing::debug!("no history available for back navigation");
                            return;
                        };
                        if let Err(err) = history.back() {
                            tracing::debug!(?err, "history back navigation failed");
                        }
                    }
                    class="inline-flex items-center rounded-lg border border-gray-200 bg-white px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-300"
                >
                    "Go back"
                </button>
            </div>
        </div>
    }
}
