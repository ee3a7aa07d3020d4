use std::process::Command;

/// Build-time settings read through `option_env!` in `app_lib::config`.
const CONFIG_ENV_VARS: [&str; 2] = ["USERS_BACKEND_URL", "USERS_LOG_LEVEL"];

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    for name in CONFIG_ENV_VARS {
        println!("cargo:rerun-if-env-changed={name}");
    }

    let sha = git_head().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=USERS_WEB_GIT_SHA={sha}");
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
