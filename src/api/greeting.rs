// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Root page handler.
///
/// Renders the configured greeting into a fixed HTML heading. The greeting
/// is escaped, so a value containing markup cannot inject into the page.
pub async fn greeting(State(state): State<AppState>) -> Html<String> {
    Html(render_greeting(&state.greeting))
}

fn render_greeting(greeting: &str) -> String {
    format!("<h1>{}, This is a test!</h1>", escape_html(greeting))
}

/// Minimal HTML escaping for text interpolated into the page body.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
