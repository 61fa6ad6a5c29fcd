//! API request/response models for the layout service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Layout Models
// =============================================================================

/// Screen coordinates of one diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Body of `GET /api/layout` and `POST /api/layout`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutData {
    /// Node key to position.
    #[serde(default)]
    pub positions: BTreeMap<String, Position>,
}

// =============================================================================
// Responses
// =============================================================================

/// Acknowledgement for write requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
