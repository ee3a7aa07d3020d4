//! Client for the user endpoints of the backend. Endpoint paths are kept here
//! so views never assemble URLs, and the [`UsersApi`] seam lets the list
//! logic run against a fake backend in tests.

use crate::app_lib::AppError;
#[cfg(target_arch = "wasm32")]
use crate::app_lib::{config::AppConfig, delete_ignoring_body, get_json};
use serde_json::Value;

pub(crate) const LIST_USERS_PATH: &str = "/users";

/// Path of the delete endpoint for `id`. The id is used verbatim.
pub(crate) fn delete_user_path(id: &str) -> Result<String, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    Ok(format!("/deleteUser/{id}"))
}

/// Backend operations the users view depends on.
pub(crate) trait UsersApi {
    /// Fetches the raw list body. Its shape is checked by the caller because a
    /// non-array body is reported differently from a failed request.
    async fn list_users(&self) -> Result<Value, AppError>;

    /// Deletes one user. Any success body is ignored.
    async fn delete_user(&self, id: &str) -> Result<(), AppError>;
}

/// [`UsersApi`] backed by `fetch` against the configured backend.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub(crate) struct HttpUsersApi {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpUsersApi {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.backend_url.clone(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Value, AppError> {
        get_json(&self.base_url, LIST_USERS_PATH).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let path = delete_user_path(id)?;
        delete_ignoring_body(&self.base_url, &path).await
    }
}
