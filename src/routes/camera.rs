// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Camera view and the capture API it consumes.

use crate::db::collections;
use crate::error::{AppError, Result};
use crate::models::Capture;
use crate::AppState;
use axum::http::StatusCode;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Longest accepted caption.
const MAX_CAPTION_LEN: usize = 500;
/// Largest accepted image payload. Firestore caps documents at ~1 MiB, so
/// anything bigger is rejected before the write is attempted.
const MAX_IMAGE_DATA_LEN: usize = 1_000_000;

/// Capture API routes, consumed by the camera view.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/captures", get(list_captures).post(create_capture))
}

// ─── Camera View ─────────────────────────────────────────────

/// Camera view descriptor.
#[derive(Serialize)]
pub struct CameraView {
    pub name: String,
    pub title: String,
    /// Firebase project the captures land in
    pub project: String,
    pub captures_url: String,
}

/// The camera view handler referenced by the route table.
pub async fn camera_view(State(state): State<Arc<AppState>>) -> Json<CameraView> {
    Json(CameraView {
        name: "camera".to_string(),
        title: "Relic Camera".to_string(),
        project: state.config.firebase.project_id.clone(),
        captures_url: "/api/captures".to_string(),
    })
}

// ─── Captures ────────────────────────────────────────────────

/// Request body for a new capture.
#[derive(Deserialize)]
pub struct CreateCaptureRequest {
    /// Image as a data URL
    pub image_data: String,
    pub caption: Option<String>,
    /// Client-side capture time; stamped server-side when absent
    pub captured_at: Option<String>,
}

/// Store a new capture.
async fn create_capture(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCaptureRequest>,
) -> Result<(StatusCode, Json<Capture>)> {
    if req.image_data.is_empty() {
        return Err(AppError::BadRequest(
            "image_data must not be empty".to_string(),
        ));
    }
    if req.image_data.len() > MAX_IMAGE_DATA_LEN {
        return Err(AppError::BadRequest("image_data too large".to_string()));
    }
    if let Some(caption) = &req.caption {
        if caption.len() > MAX_CAPTION_LEN {
            return Err(AppError::BadRequest(format!(
                "caption longer than {} characters",
                MAX_CAPTION_LEN
            )));
        }
    }
    if let Some(ts) = &req.captured_at {
        if chrono::DateTime::parse_from_rfc3339(ts).is_err() {
            return Err(AppError::BadRequest(
                "captured_at must be ISO 8601".to_string(),
            ));
        }
    }

    let capture = Capture {
        image_data: req.image_data,
        caption: req.caption,
        captured_at: req
            .captured_at
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
    };

    let stored = state.db.add_capture(&capture).await?;

    tracing::info!(collection = collections::CAPTURES, "Capture stored");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Captures listing response.
#[derive(Serialize)]
pub struct CapturesResponse {
    pub captures: Vec<Capture>,
    pub total: usize,
}

/// List all captures, newest first.
async fn list_captures(State(state): State<Arc<AppState>>) -> Result<Json<CapturesResponse>> {
    let captures = state.db.list_captures().await?;
    Ok(Json(CapturesResponse {
        total: captures.len(),
        captures,
    }))
}
