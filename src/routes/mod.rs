pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod users;

#[cfg(target_arch = "wasm32")]
pub(crate) use not_found::NotFoundPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use users::UsersPage;

#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::{
    components::{Route, Routes},
    path,
};

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=UsersPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
