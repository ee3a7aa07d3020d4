//! Users feature: record types, the backend client, confirmation prompts and
//! the list state driven by the users page.

pub(crate) mod actions;
pub(crate) mod client;
pub(crate) mod prompt;
pub(crate) mod state;
pub(crate) mod types;
