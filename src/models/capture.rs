//! Capture model for storage and API.

use serde::{Deserialize, Serialize};

/// A camera capture stored in Firestore.
///
/// Document IDs are auto-generated on insert; ordering is by `captured_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capture {
    /// Captured image as a data URL produced by the camera view
    pub image_data: String,
    /// Optional user-entered caption
    pub caption: Option<String>,
    /// When the capture was taken (ISO 8601)
    pub captured_at: String,
}
