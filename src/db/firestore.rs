// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper.
//!
//! Owns the single initialized connection to the project's document store.
//! The wrapper is constructed explicitly at startup from the validated
//! Firebase configuration and shared by reference through `AppState`; no
//! module-level global is involved. On top of the raw handle it provides
//! the generic document primitives (append with auto-generated ID, list a
//! collection) plus typed operations for captures.

use crate::config::FirebaseConfig;
use crate::db::collections;
use crate::error::AppError;
use crate::models::Capture;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client for the configured project.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(config: &FirebaseConfig) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(&config.project_id).await;
        }

        let client = firestore::FirestoreDb::new(&config.project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = %config.project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// The shared underlying handle, or an error if offline.
    ///
    /// Callers borrow the handle; the wrapper keeps ownership for the life
    /// of the process.
    pub fn client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Document Primitives ─────────────────────────────────────

    /// Append a document to a collection with an auto-generated ID.
    ///
    /// Returns the document as written (the remote acknowledgment).
    pub async fn add_document<T>(&self, collection: &str, document: &T) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.client()?
            .fluent()
            .insert()
            .into(collection)
            .generate_document_id()
            .object(document)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Retrieve all documents in a collection.
    pub async fn list_documents<T>(&self, collection: &str) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.client()?
            .fluent()
            .select()
            .from(collection)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Capture Operations ──────────────────────────────────────

    /// Store a new capture.
    pub async fn add_capture(&self, capture: &Capture) -> Result<Capture, AppError> {
        self.add_document(collections::CAPTURES, capture).await
    }

    /// Get all captures, newest first.
    pub async fn list_captures(&self) -> Result<Vec<Capture>, AppError> {
        self.client()?
            .fluent()
            .select()
            .from(collections::CAPTURES)
            .order_by([(
                "captured_at",
                firestore::FirestoreQueryDirection::Descending,
            )])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
