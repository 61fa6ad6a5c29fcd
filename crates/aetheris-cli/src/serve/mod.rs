//! Layout persistence service for the diagram visualizer.
//!
//! A small key-value store over HTTP: the visualizer fetches the model JSON
//! produced by `aetheris convert -f json`, and reads and writes the screen
//! position of each node. No diagram logic runs here.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//! - `store` - File-backed model and layout documents

mod handlers;
mod models;
mod store;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{routing::get, Router};
use color_eyre::eyre::WrapErr;
use tower_http::cors::{Any, CorsLayer};

use aetheris_core::ServeConfig;

use store::LayoutStore;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    pub store: LayoutStore,
}

// =============================================================================
// Server Options
// =============================================================================

/// Resolved options for one server run.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub port: u16,
    pub model_path: PathBuf,
    pub layout_path: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl From<&ServeConfig> for ServeOptions {
    fn from(config: &ServeConfig) -> Self {
        Self {
            port: config.port,
            model_path: config.model_path.clone(),
            layout_path: config.layout_path.clone(),
            allowed_origins: config.allowed_origins.clone(),
        }
    }
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Build the router for the given state.
pub fn router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/model", get(handlers::get_model))
        .route("/api/layout", get(handlers::get_layout).post(handlers::save_layout))
        .layer(cors)
        .with_state(state)
}

/// Start the layout service and run until interrupted.
pub async fn start_server(options: ServeOptions) -> color_eyre::Result<()> {
    let state = Arc::new(AppState {
        store: LayoutStore::new(&options.model_path, &options.layout_path),
    });
    let app = router(state, &options.allowed_origins);

    let addr = SocketAddr::from(([127, 0, 0, 1], options.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, model = %options.model_path.display(), layout = %options.layout_path.display(), "layout service started");
    eprintln!("Layout service listening on http://{addr}");
    eprintln!("Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
