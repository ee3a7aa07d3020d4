//! List state for the users page. The page owns one [`UserListState`] and
//! mutates it only through [`UserListState::apply_load`] and
//! [`UserListState::apply_delete`]; rendering reads [`UserListState::banner`]
//! and [`UserListState::body`].

use crate::{
    app_lib::AppError,
    features::users::types::User,
    routes::paths,
};
use tracing::debug;

pub(crate) const INVALID_FORMAT_MESSAGE: &str = "Invalid data format received from server.";
pub(crate) const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users.";
pub(crate) const NO_USERS_MESSAGE: &str = "No users found 😔";
pub(crate) const LOAD_ERROR_MESSAGE: &str = "Error loading users 😔";

/// Result of the list request after the body shape has been checked.
#[derive(Debug)]
pub(crate) enum LoadOutcome {
    Loaded(Vec<User>),
    InvalidFormat,
    Failed(AppError),
}

/// Result of a delete attempt on one row.
#[derive(Debug)]
pub(crate) enum DeleteOutcome {
    Declined,
    Deleted(String),
    Failed(AppError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct UserListState {
    users: Vec<User>,
    error: Option<String>,
}

/// One rendered table row; `index` is 1-based.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct UserRow {
    pub index: usize,
    pub user: User,
}

impl UserRow {
    pub(crate) fn edit_href(&self) -> String {
        paths::update_user(&self.user.id)
    }

    pub(crate) fn age_label(&self) -> String {
        self.user
            .age
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// What the table body shows.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TableBody {
    Rows(Vec<UserRow>),
    Empty(&'static str),
}

impl UserListState {
    #[cfg(test)]
    pub(crate) fn users(&self) -> &[User] {
        &self.users
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn apply_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(users) => {
                self.users = users;
                self.error = None;
            }
            LoadOutcome::InvalidFormat => {
                self.users.clear();
                self.error = Some(INVALID_FORMAT_MESSAGE.to_string());
            }
            // The previous list stays visible after a failed request.
            LoadOutcome::Failed(err) => {
                debug!(error = %err, kept = self.users.len(), "keeping previous user list");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub(crate) fn apply_delete(&mut self, outcome: &DeleteOutcome) {
        match outcome {
            DeleteOutcome::Deleted(id) => self.remove(id),
            DeleteOutcome::Failed(err) => debug!(error = %err, "delete failed, list unchanged"),
            DeleteOutcome::Declined => {}
        }
    }

    /// Removes the first user with `id`; a missing id is a no-op.
    pub(crate) fn remove(&mut self, id: &str) {
        if let Some(position) = self.users.iter().position(|user| user.id == id) {
            self.users.remove(position);
        }
    }

    /// Message for the error banner above the table.
    pub(crate) fn banner(&self) -> Option<&str> {
        self.error()
    }

    pub(crate) fn body(&self) -> TableBody {
        if self.users.is_empty() {
            let message = if self.error.is_some() {
                LOAD_ERROR_MESSAGE
            } else {
                NO_USERS_MESSAGE
            };
            return TableBody::Empty(message);
        }

        TableBody::Rows(
            self.users
                .iter()
                .enumerate()
                .map(|(position, user)| UserRow {
                    index: position + 1,
                    user: user.clone(),
                })
                .collect(),
        )
    }
}
