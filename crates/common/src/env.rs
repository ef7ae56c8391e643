//! Environment/runtime helpers
//!
//! Startup sanity checks. Directory creation for the asset tree belongs to the store.

use tracing::warn;

/// Warn when the frontend directory is missing; returns whether it exists.
pub async fn ensure_env(frontend_dir: &str) -> bool {
    let present = tokio::fs::metadata(frontend_dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !present {
        warn!(%frontend_dir, "frontend directory not found; static files will 404");
    }
    present
}
