//! Build-time configuration for the backend endpoint and log level with an
//! optional runtime override. The runtime config is read from
//! `window.USERS_CONFIG` (if present) so static deployments can point at a
//! different backend without rebuilding. Values are public; do not store
//! secrets here.

use tracing::level_filters::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the users backend. Empty means same-origin, root-relative
    /// requests; a missing value is a deployment problem, not handled here.
    pub backend_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let backend_url = option_env!("USERS_BACKEND_URL").unwrap_or("");
        let log_level = option_env!("USERS_LOG_LEVEL")
            .and_then(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            backend_url: backend_url.trim().to_string(),
            log_level,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    backend_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.backend_url {
        config.backend_url = value;
    }
    // An unparsable runtime level keeps the build-time one.
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_log_level) {
        config.log_level = level;
    }
}

/// Parses a level name (`error` .. `trace`) or its number (`0` .. `4`).
pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    let level = level.trim();
    if let Ok(parsed) = level.parse::<u8>() {
        return match parsed {
            0 => Some(LevelFilter::ERROR),
            1 => Some(LevelFilter::WARN),
            2 => Some(LevelFilter::INFO),
            3 => Some(LevelFilter::DEBUG),
            4 => Some(LevelFilter::TRACE),
            _ => None,
        };
    }

    match level.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USERS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        backend_url: read_runtime_value(&object, "backend_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
