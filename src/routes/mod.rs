// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers and the view-route table.
//!
//! The view table is plain data: an ordered list of (path, name, handler)
//! records. [`build_router`] consumes it into an `axum::Router` according to
//! the requested [`HistoryMode`]; [`resolve`] answers which entry a path
//! belongs to without going through the framework.

pub mod camera;

use crate::config::ConfigError;
use crate::error::AppError;
use crate::AppState;
use axum::http::{header, Method};
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Browser navigation strategy the view routes are built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMode {
    /// Path-based history: views are served under the given base path.
    /// An empty base means the root.
    Web { base: String },
    /// Fragment-based history: the server only ever sees the root path, so
    /// the table is mounted at the root and fragments stay client-side.
    Hash,
}

impl HistoryMode {
    /// Path-based history under `base`.
    ///
    /// The base must be absolute; a trailing slash is normalized away, so
    /// `"/"` and `"/app/"` become the root and `"/app"`.
    pub fn web(base: &str) -> Result<Self, ConfigError> {
        if !base.starts_with('/') {
            return Err(ConfigError::InvalidBasePath(base.to_string()));
        }
        Ok(Self::Web {
            base: base.trim_end_matches('/').to_string(),
        })
    }
}

/// One view route: URL path, symbolic name, and the handler serving it.
pub struct ViewRoute {
    /// URL path pattern
    pub path: &'static str,
    /// Symbolic route name
    pub name: &'static str,
    handler: fn() -> MethodRouter<Arc<AppState>>,
}

/// The ordered view table. Earlier entries win when paths overlap.
pub fn view_routes() -> Vec<ViewRoute> {
    vec![ViewRoute {
        path: "/camera",
        name: "camera",
        handler: || get(camera::camera_view),
    }]
}

/// Resolve a request path against the table. First match wins.
pub fn resolve<'a>(routes: &'a [ViewRoute], path: &str) -> Option<&'a ViewRoute> {
    routes.iter().find(|route| route.path == path)
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Explicit 404 for paths outside the table.
async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Build the complete router: the view table mounted per the history mode,
/// the capture API, and a health check.
pub fn build_router(state: Arc<AppState>, history: HistoryMode) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let mut views = Router::new();
    for route in view_routes() {
        views = views.route(route.path, (route.handler)());
    }

    let views = match history {
        HistoryMode::Web { base } if !base.is_empty() => Router::new().nest(&base, views),
        // Hash mode and root-based web history both serve from "/"
        _ => views,
    };

    Router::new()
        .route("/health", get(health_check))
        .merge(views)
        .merge(camera::api_routes())
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
