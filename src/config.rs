//! Configuration loading with env-var overrides.
//!
//! Reads `calc.toml` from the working directory (or the path in
//! `CALC_CONFIG`) when it exists, then applies `CALC_BIND` and
//! `CALC_LOG_LEVEL` overrides. A missing file just means defaults; an
//! unreadable or malformed file is a startup error.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// Fully-resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP listener binds to.
    pub bind: String,
    /// Log level handed to the tracing subscriber (`RUST_LOG` wins over it).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    server: RawServer,
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default = "default_bind")]
    bind: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load config from `calc.toml` (or `CALC_CONFIG`), then apply env-var
/// overrides.
pub fn load() -> Result<Config, AppError> {
    let path = env::var("CALC_CONFIG").unwrap_or_else(|_| "calc.toml".to_string());
    let bind_override = env::var("CALC_BIND").ok();
    let log_level_override = env::var("CALC_LOG_LEVEL").ok();
    load_from(
        Path::new(&path),
        bind_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = if path.exists() {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str::<RawConfig>(&text)
            .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?
    } else {
        RawConfig::default()
    };

    Ok(Config {
        bind: bind_override
            .map(str::to_string)
            .unwrap_or(raw.server.bind),
        log_level: log_level_override
            .map(str::to_string)
            .unwrap_or(raw.server.log_level),
    })
}
