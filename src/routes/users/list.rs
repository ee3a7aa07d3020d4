//! Users list page. It fetches the list once on mount and deletes rows after
//! confirmation; all state transitions go through `UserListState`.

use crate::{
    app_lib::config::AppConfig,
    components::{Alert, Footer},
    features::users::{
        actions,
        client::HttpUsersApi,
        prompt::WindowPrompt,
        state::{TableBody, UserListState, UserRow},
    },
    routes::paths,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use tracing::debug;

const HEADER_CELL: &str =
    "px-6 py-3 text-center text-xs font-medium uppercase tracking-wider text-blue-900 dark:text-blue-100";

/// Renders the user table and loads it once when mounted.
#[component]
pub fn UsersPage() -> impl IntoView {
    let config = AppConfig::load();
    debug!(backend_url = %config.backend_url, "users page mounted");
    let api = StoredValue::new(HttpUsersApi::from_config(&config));
    let state = RwSignal::new(UserListState::default());

    // Not cancelled on unmount; a late result finds the signal disposed and is dropped.
    spawn_local(async move {
        let Some(api) = api.try_get_value() else {
            return;
        };
        let outcome = actions::load_users(&api).await;
        if state.try_update(|current| current.apply_load(outcome)).is_none() {
            debug!("users page unmounted before the list arrived");
        }
    });

    // Each click runs independently; removal is keyed by id so completion order is irrelevant.
    let on_delete = move |id: String| {
        spawn_local(async move {
            let Some(api) = api.try_get_value() else {
                return;
            };
            let outcome = actions::delete_user(&api, &WindowPrompt, &id).await;
            if state.try_update(|current| current.apply_delete(&outcome)).is_none() {
                debug!(user_id = %id, "users page unmounted before delete finished");
            }
        });
    };

    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-gray-50 px-4 py-8 dark:bg-gray-900">
            <div class="w-full max-w-5xl overflow-hidden rounded-2xl border border-gray-200 bg-white shadow-lg dark:border-gray-700 dark:bg-gray-800">
                <div class="flex items-center justify-between bg-blue-700 px-6 py-4 text-white">
                    <h1 class="text-xl font-bold">"User Management"</h1>
                    <A
                        href=paths::CREATE_USER
                        {..}
                        class="rounded-lg bg-white px-4 py-2 text-sm font-semibold text-blue-700 hover:bg-blue-50"
                    >
                        "➕ Add New User"
                    </A>
                </div>

                <div class="space-y-4 p-6">
                    {move || {
                        state
                            .with(|current| current.banner().map(ToString::to_string))
                            .map(|message| view! { <Alert message=message /> })
                    }}
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200 text-center dark:divide-gray-700">
                            <thead class="bg-blue-50 dark:bg-blue-900/40">
                                <tr>
                                    <th scope="col" class=HEADER_CELL>"#"</th>
                                    <th scope="col" class=HEADER_CELL>"Name"</th>
                                    <th scope="col" class=HEADER_CELL>"Email"</th>
                                    <th scope="col" class=HEADER_CELL>"Age"</th>
                                    <th scope="col" class=HEADER_CELL>"Action"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                {move || match state.with(UserListState::body) {
                                    TableBody::Rows(rows) => rows
                                        .into_iter()
                                        .map(|row| user_row(row, on_delete))
                                        .collect_view()
                                        .into_any(),
                                    TableBody::Empty(message) => view! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-8 text-sm text-gray-500 dark:text-gray-400">
                                                {message}
                                            </td>
                                        </tr>
                                    }
                                    .into_any(),
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>

                <Footer />
            </div>
        </div>
    }
}

fn user_row(row: UserRow, on_delete: impl Fn(String) + Copy + 'static) -> impl IntoView {
    let edit_href = row.edit_href();
    let age = row.age_label();
    let UserRow { index, user } = row;
    let id = user.id;

    view! {
        <tr class="transition-colors hover:bg-gray-50 dark:hover:bg-gray-700/50">
            <td class="px-6 py-4 text-sm font-semibold text-gray-900 dark:text-white">{index}</td>
            <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">{user.name}</td>
            <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">{user.email}</td>
            <td class="px-6 py-4 text-sm text-gray-700 dark:text-gray-300">{age}</td>
            <td class="px-6 py-4 text-sm whitespace-nowrap">
                <A
                    href=edit_href
                    {..}
                    class="mr-2 inline-flex rounded-md border border-blue-600 px-3 py-1 text-blue-600 hover:bg-blue-50 dark:text-blue-400"
                >
                    "✏️ Edit"
                </A>
                <button
                    type="button"
                    class="inline-flex rounded-md border border-red-600 px-3 py-1 text-red-600 hover:bg-red-50 dark:text-red-400"
                    on:click=move |_| on_delete(id.clone())
                >
                    "🗑️ Delete"
                </button>
            </td>
        </tr>
    }
}
