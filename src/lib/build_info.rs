const SHORT_COMMIT_LEN: usize = 7;

pub fn git_commit_hash() -> &'static str {
    match option_env!("USERS_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Abbreviated commit shown in the page footer.
pub fn short_commit(hash: &str) -> &str {
    hash.get(..SHORT_COMMIT_LEN).unwrap_or(hash)
}
