//! HTTP route handlers for the layout service.
//!
//! Handlers are thin: each one maps a request onto a [`LayoutStore`] call.
//!
//! [`LayoutStore`]: super::store::LayoutStore

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::models::{ErrorResponse, LayoutData, MessageResponse};
use super::AppState;

// =============================================================================
// Errors
// =============================================================================

/// An error reply with a JSON `detail` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }

    fn internal(err: std::io::Error) -> Self {
        tracing::error!(error = %err, "layout store failure");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { detail: self.detail })).into_response()
    }
}

// =============================================================================
// API Handlers
// =============================================================================

/// GET `/api/model` - The generated model JSON, as written by `convert -f json`.
pub async fn get_model(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>, ApiError> {
    match state.store.load_model().await.map_err(ApiError::internal)? {
        Some(model) => Ok(Json(model)),
        None => Err(ApiError::not_found(
            "Model file not found. Run the converter first.",
        )),
    }
}

/// GET `/api/layout` - Saved node positions.
///
/// Response format:
/// ```json
/// { "positions": { "Order": { "x": 120.0, "y": 40.0 } } }
/// ```
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Result<Json<LayoutData>, ApiError> {
    let layout = state.store.load_layout().await.map_err(ApiError::internal)?;
    Ok(Json(layout))
}

/// POST `/api/layout` - Replace the saved node positions.
pub async fn save_layout(
    State(state): State<Arc<AppState>>,
    Json(layout): Json<LayoutData>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.save_layout(&layout).await.map_err(ApiError::internal)?;
    tracing::info!(nodes = layout.positions.len(), "layout saved");
    Ok(Json(MessageResponse::new("Layout saved successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serve::models::Position;
    use crate::serve::store::LayoutStore;
    use tempfile::TempDir;

    fn create_test_state() -> (Arc<AppState>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = LayoutStore::new(temp_dir.path().join("model.json"), temp_dir.path().join("layout.json"));
        (Arc::new(AppState { store }), temp_dir)
    }

    #[tokio::test]
    async fn test_model_not_found() {
        let (state, _temp) = create_test_state();
        let err = get_model(State(state)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_layout_round_trip() {
        let (state, _temp) = create_test_state();

        let Json(empty) = get_layout(State(state.clone())).await.unwrap();
        assert!(empty.positions.is_empty());

        let mut layout = LayoutData::default();
        layout.positions.insert("Starship".to_string(), Position { x: 1.0, y: 2.0 });
        let Json(reply) = save_layout(State(state.clone()), Json(layout.clone())).await.unwrap();
        assert_eq!(reply.message, "Layout saved successfully");

        let Json(saved) = get_layout(State(state)).await.unwrap();
        assert_eq!(saved, layout);
    }
}
