// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub mod greeting;

/// Build the application router.
///
/// One route is exposed: `GET /`. Everything else falls through to the
/// framework defaults (404 for unknown paths, 405 for other methods on
/// `/`). Request-id stamping and per-request tracing ride on middleware
/// layers rather than extra routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::greeting))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(CorsLayer::permissive())
}
