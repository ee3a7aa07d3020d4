//! Shared frontend utilities: backend configuration, HTTP helpers, errors,
//! console logging and build metadata.
//!
//! The users view talks to a single backend whose base URL comes from
//! [`config::AppConfig`]. Request plumbing lives in [`api`] so feature clients
//! only name endpoint paths. Nothing here stores credentials.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{delete_ignoring_body, get_json};
pub(crate) use errors::AppError;
