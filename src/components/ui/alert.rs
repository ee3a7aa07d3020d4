//! Error banner rendered above the users table. Messages are fixed strings;
//! backend error bodies are logged, never rendered.

use leptos::prelude::*;

#[component]
pub fn Alert(message: String) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-center text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            role="alert"
        >
            {message}
        </div>
    }
}
