// File: ./src/server/mod.rs
// Local read-only file API over the export root.
pub mod handlers;
pub mod middleware;

use crate::server::middleware::RequestLogLayer;
use crate::store::ExportTree;
use anyhow::{Context, Result};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Shared by every handler; the tree itself is stateless.
#[derive(Clone, Debug)]
pub struct ShimState {
    pub tree: Arc<ExportTree>,
}

impl ShimState {
    pub fn new(tree: ExportTree) -> Self {
        Self {
            tree: Arc::new(tree),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerOptions {
    pub export_root: PathBuf,
    pub bind: SocketAddr,
    /// Served for every path the API does not claim.
    pub static_dir: Option<PathBuf>,
}

/// The three API routes. Paths they do not match fall through to `static_dir`
/// when one is given, and to a plain 404 otherwise.
pub fn build_router(state: ShimState, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/api/runs", get(handlers::list_runs))
        .route("/api/run/{run}/files", get(handlers::list_files))
        .route("/api/run/{run}/file/{file}", get(handlers::fetch_file))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };
    router.layer(RequestLogLayer::new("local-api"))
}

pub async fn serve(options: ServerOptions) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(options.bind)
        .await
        .with_context(|| format!("Failed to bind {}", options.bind))?;
    let local = listener.local_addr()?;

    log::info!(
        "Serving {} at http://{}",
        options.export_root.display(),
        local
    );
    if let Some(dir) = &options.static_dir {
        log::info!("Static files from {}", dir.display());
    }

    let router = build_router(
        ShimState::new(ExportTree::new(options.export_root)),
        options.static_dir,
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("Shutting down");
        })
        .await
        .context("Server error")?;
    Ok(())
}
