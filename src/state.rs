// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::config::{AppConfig, DEFAULT_GREETING};

/// Shared application state handed to request handlers.
///
/// The greeting is resolved once at startup and read-only afterwards, so
/// clones share one allocation and no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            greeting: Arc::from(config.greeting.as_str()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            greeting: Arc::from(DEFAULT_GREETING),
        }
    }
}
