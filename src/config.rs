// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! by the application. Configuration is loaded from the environment once at
//! startup and handed to request handlers through
//! [`AppState`](crate::state::AppState).
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GREETING` | Greeting text shown on the root page | `Hello` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use thiserror::Error;

/// Environment variable name for the greeting text.
///
/// A variable set to the empty string counts as set and is used verbatim;
/// only an unset variable falls back to [`DEFAULT_GREETING`].
pub const GREETING_ENV: &str = "GREETING";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Greeting used when `GREETING` is unset.
pub const DEFAULT_GREETING: &str = "Hello";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration failures. All of these abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port number.
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Runtime configuration resolved from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Greeting text interpolated into the root page.
    pub greeting: String,
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Tests inject
    /// a closure over a fixture map instead of mutating the real process
    /// environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let greeting = lookup(GREETING_ENV).unwrap_or_else(|| DEFAULT_GREETING.to_string());
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT_ENV) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            greeting,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        AppConfig::from_lookup(|name| map.get(name).map(|value| value.to_string()))
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = from_vars(&[]).expect("defaults load");
        assert_eq!(config.greeting, "Hello");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn set_variables_override_defaults() {
        let config = from_vars(&[("GREETING", "Hi"), ("HOST", "127.0.0.1"), ("PORT", "3000")])
            .expect("config loads");
        assert_eq!(config.greeting, "Hi");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn empty_greeting_counts_as_set() {
        let config = from_vars(&[("GREETING", "")]).expect("config loads");
        assert_eq!(config.greeting, "");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = from_vars(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = from_vars(&[("PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
