//! HTTP server
//!
//! - `GET /generate/json/`: the dungeon as a JSON grid of material codes
//! - `GET /generate/...`: the dungeon as a PNG image
//! - anything else: static files from the served directory
//!
//! Query keys: `dungeonWidth`, `dungeonHeight`, `roomAttempts`,
//! `minRoomSize`, `maxRoomSize`, `pixelSize`, `seed`. Missing or out of
//! range values fall back to their defaults.

use std::path::PathBuf;

use axum::Router;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use dgen_core::{Dungeon, GenerationParams, ParamError, RawParams, generate_with};
use dgen_render::{RenderError, RenderOptions, json, png};
use serde::Deserialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::task::JoinError;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::seeded_rng;

// =============================================================================
// Configuration
// =============================================================================

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for paths outside `/generate/`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            static_dir: PathBuf::from("."),
        }
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", 8080)
    }
}

// =============================================================================
// Server
// =============================================================================

pub struct Server {
    config: ServerConfig,
}

impl Server {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let address = self.config.socket_addr();
        let router = create_router(self.config.static_dir.clone());

        let listener = TcpListener::bind(&address).await?;
        info!("Server listening on {}", address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Routes for generation plus the static file fallback
pub fn create_router(static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/generate/json/", get(generate_json))
        .route("/generate/", get(generate_png))
        .route("/generate/{*rest}", get(generate_png))
        .fallback_service(ServeDir::new(static_dir.into()))
        .layer(TraceLayer::new_for_http())
}

// =============================================================================
// Handlers
// =============================================================================

/// Generation query; every value is optional and parsed leniently
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuery {
    pub dungeon_width: Option<String>,
    pub dungeon_height: Option<String>,
    pub room_attempts: Option<String>,
    pub min_room_size: Option<String>,
    pub max_room_size: Option<String>,
    pub pixel_size: Option<String>,
    pub seed: Option<String>,
}

impl GenerateQuery {
    pub fn params(&self) -> GenerationParams {
        GenerationParams::from_raw(&RawParams {
            width: self.dungeon_width.clone(),
            height: self.dungeon_height.clone(),
            room_attempts: self.room_attempts.clone(),
            min_room_size: self.min_room_size.clone(),
            max_room_size: self.max_room_size.clone(),
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::from_raw(self.pixel_size.as_deref())
    }

    /// Generate with a generator of its own, off the async workers
    async fn generate(&self) -> Result<Dungeon, ServerError> {
        let params = self.params();
        let mut rng = seeded_rng(self.seed.as_deref());
        info!(seed = rng.seed(), ?params, "generating dungeon");

        let dungeon = tokio::task::spawn_blocking(move || generate_with(&params, &mut rng)).await??;
        Ok(dungeon)
    }
}

async fn generate_json(Query(query): Query<GenerateQuery>) -> Result<Response, ServerError> {
    let dungeon = query.generate().await?;
    let body = json::to_json(&dungeon)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn generate_png(Query(query): Query<GenerateQuery>) -> Result<Response, ServerError> {
    let dungeon = query.generate().await?;
    let options = query.render_options();
    let body = tokio::task::spawn_blocking(move || png::encode(&dungeon, &options)).await??;
    Ok(([(header::CONTENT_TYPE, "image/png")], body).into_response())
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Generation task failed: {0}")]
    Task(#[from] JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

// =============================================================================
// Shutdown Signal
// =============================================================================

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
