// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::server::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get},
};

pub fn api_routes() -> Router<AppState> {
    // Static segments take priority over `{category}`.
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/dashboard", get(handlers::dashboard))
        .route(
            "/api/goals",
            get(handlers::list_goals).post(handlers::add_goal),
        )
        .route(
            "/api/{category}",
            get(handlers::list_entries).post(handlers::add_entry),
        )
        .route("/api/{category}/{index}", delete(handlers::delete_entry))
}
