use crate::app_lib::build_info;
use leptos::prelude::*;

/// Card footer with the copyright year and the build commit.
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    let commit = build_info::short_commit(build_info::git_commit_hash());

    view! {
        <div class="border-t border-gray-200 px-6 py-3 text-center text-xs text-gray-500 dark:border-gray-700 dark:text-gray-400">
            {format!("© {year} User Management System")}
            <span class="ml-2 font-mono text-gray-400" title="Build commit">{commit}</span>
        </div>
    }
}
