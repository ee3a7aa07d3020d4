//! Blocking user prompts around destructive actions.

pub(crate) const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this user?";
pub(crate) const DELETE_FAILED_MESSAGE: &str = "Failed to delete user.";

/// Interactive confirmation and failure notification.
pub(crate) trait Prompt {
    /// Returns `true` only when the user explicitly accepts.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// [`Prompt`] backed by `window.confirm` and `window.alert`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WindowPrompt;

#[cfg(target_arch = "wasm32")]
impl Prompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        // No window or a blocked dialog counts as a decline.
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(prompt = message, "no window available for alert");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            tracing::warn!(?err, prompt = message, "alert dialog failed");
        }
    }
}
