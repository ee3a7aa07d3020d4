#[cfg(target_arch = "wasm32")]
mod app;
// Host builds keep these compiled for unit tests; only the browser build uses them.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod features;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::{app::App, app_lib::config::AppConfig};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = AppConfig::load();
    app_lib::telemetry::init(config.log_level);
    tracing::debug!(backend_url = %config.backend_url, "starting users web app");
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
