//! Application configuration baked in at build time.
//!
//! The browser has no process environment, so overrides are read with
//! `option_env!` when the WASM bundle is compiled. Every value is optional;
//! the defaults reproduce the stock deployment (API under `/api`, session
//! slots `userId`/`userName`/`userEmail`, no redirect away from `/login`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::routes::GuardPolicy;
use crate::session::StorageKeys;

pub const DEFAULT_API_BASE: &str = "/api";

pub const API_BASE_VAR: &str = "LIFTLOG_API_BASE";
pub const STORAGE_PREFIX_VAR: &str = "LIFTLOG_STORAGE_PREFIX";
pub const LOGIN_REDIRECT_VAR: &str = "LIFTLOG_LOGIN_REDIRECT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a path starting with '/' or an http(s) URL, got {value:?}")]
    InvalidApiBase { var: &'static str, value: String },
    #[error("{var} must be an app path starting with '/', got {value:?}")]
    InvalidRedirect { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base of the REST API, without a trailing slash.
    pub api_base: String,
    pub storage_keys: StorageKeys,
    pub guard: GuardPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            storage_keys: StorageKeys::default(),
            guard: GuardPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional:
    /// - `LIFTLOG_API_BASE`: default `/api`
    /// - `LIFTLOG_STORAGE_PREFIX`: prefix for the three storage keys, default none
    /// - `LIFTLOG_LOGIN_REDIRECT`: where authenticated users opening `/login` go;
    ///   default renders the login screen
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = parse_api_base(non_blank(lookup(API_BASE_VAR)))?;
        let storage_keys = non_blank(lookup(STORAGE_PREFIX_VAR))
            .map_or_else(StorageKeys::default, |prefix| StorageKeys::prefixed(&prefix));
        let login_redirect_when_authenticated = parse_redirect(non_blank(lookup(LOGIN_REDIRECT_VAR)))?;

        Ok(Self { api_base, storage_keys, guard: GuardPolicy { login_redirect_when_authenticated } })
    }

    /// Config from values captured when the bundle was compiled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a captured value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Build-time config, falling back to defaults when it is malformed.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|err| {
            log::warn!("invalid build configuration, using defaults: {err}");
            Self::default()
        })
    }

    /// Absolute endpoint URL for an API resource such as `login`.
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.api_base, resource.trim_start_matches('/'))
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_VAR => option_env!("LIFTLOG_API_BASE"),
        STORAGE_PREFIX_VAR => option_env!("LIFTLOG_STORAGE_PREFIX"),
        LOGIN_REDIRECT_VAR => option_env!("LIFTLOG_LOGIN_REDIRECT"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_api_base(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE.to_owned());
    };
    let valid = raw.starts_with('/') || raw.starts_with("http://") || raw.starts_with("https://");
    if !valid {
        return Err(ConfigError::InvalidApiBase { var: API_BASE_VAR, value: raw });
    }
    let trimmed = raw.trim_end_matches('/');
    Ok(if trimmed.is_empty() { String::new() } else { trimmed.to_owned() })
}

fn parse_redirect(raw: Option<String>) -> Result<Option<String>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(path) if path.starts_with('/') => Ok(Some(path)),
        Some(value) => Err(ConfigError::InvalidRedirect { var: LOGIN_REDIRECT_VAR, value }),
    }
}
