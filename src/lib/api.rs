//! HTTP helpers for the users backend. Feature clients use these to avoid
//! duplicating request setup and error mapping. Requests carry no timeout and
//! are never retried; a slow backend simply leaves the view in its current
//! state until the response arrives.

#[cfg(target_arch = "wasm32")]
use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, Response};
#[cfg(target_arch = "wasm32")]
use serde::de::DeserializeOwned;

/// Maximum number of error body characters kept for logs.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches and decodes JSON from `path` under `base_url`.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(base_url: &str, path: &str) -> Result<T, AppError> {
    let url = build_url_with_base(base_url, path);
    let response = Request::get(&url)
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
        .send()
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Issues a DELETE and treats any 2xx as success without reading the body.
#[cfg(target_arch = "wasm32")]
pub async fn delete_ignoring_body(base_url: &str, path: &str) -> Result<(), AppError> {
    let url = build_url_with_base(base_url, path);
    let response = Request::delete(&url)
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
        .send()
        .await
        .map_err(map_request_error)?;

    handle_empty_response(response).await
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

#[cfg(target_arch = "wasm32")]
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

#[cfg(target_arch = "wasm32")]
async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(&body),
    }
}

/// Trims and truncates HTTP error bodies before they reach logs.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
