// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Relic Camera: archive camera captures in Firestore
//!
//! This crate provides the backend for the Relic camera page: a view-route
//! table serving the camera view and a capture API persisting photos to the
//! project's Firestore document store.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
