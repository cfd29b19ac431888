//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and builds the
//! [`ServerConfig`] used at startup. CLI flags are applied on top of this.

use mergington_activities_common::config::{LogFormat, ServerConfig};
use std::path::PathBuf;

/// Bind address variable
pub const ENV_HOST: &str = "ACTIVITIES_HOST";
/// Listen port variable
pub const ENV_PORT: &str = "ACTIVITIES_PORT";
/// Static directory variable
pub const ENV_STATIC_DIR: &str = "ACTIVITIES_STATIC_DIR";
/// Seed file variable
pub const ENV_SEED_FILE: &str = "ACTIVITIES_SEED_FILE";
/// Log format variable (`text`, `json`, `auto`)
pub const ENV_LOG_FORMAT: &str = "ACTIVITIES_LOG_FORMAT";
/// Log level variable, used when `RUST_LOG` is not set
pub const ENV_LOG_LEVEL: &str = "ACTIVITIES_LOG_LEVEL";

/// Get a non-empty environment variable
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - The variable is unset, empty, or not valid unicode
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable or a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Unparseable values are logged and replaced with the default.
pub fn get_env_parse<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env(name) {
        Some(raw) => raw.parse().unwrap_or_else(|err| {
            tracing::warn!(
                "Environment variable '{}' has invalid value '{}' ({}), using default",
                name,
                raw,
                err
            );
            default
        }),
        None => default,
    }
}

/// Load the server configuration from environment variables
pub fn load_from_env() -> ServerConfig {
    let defaults = ServerConfig::default();

    ServerConfig {
        host: get_env_or(ENV_HOST, &defaults.host),
        port: get_env_parse(ENV_PORT, defaults.port),
        static_dir: get_env(ENV_STATIC_DIR)
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir),
        seed_file: get_env(ENV_SEED_FILE).map(PathBuf::from),
        log_format: get_env_parse(ENV_LOG_FORMAT, LogFormat::default()),
    }
}

/// Log format used to initialize logging before the rest of the config is read
///
/// The `--log-format` flag wins over `ACTIVITIES_LOG_FORMAT`. An invalid
/// environment value falls back silently here; `load_from_env` reports it
/// once the subscriber is installed.
pub fn log_format(flag: Option<LogFormat>) -> LogFormat {
    flag.or_else(|| get_env(ENV_LOG_FORMAT).and_then(|raw| raw.parse().ok()))
        .unwrap_or_default()
}

/// Default log filter when `RUST_LOG` is not set
pub fn log_level() -> String {
    get_env_or(ENV_LOG_LEVEL, "info")
}
