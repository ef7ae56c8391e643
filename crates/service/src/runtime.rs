//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Warn when the frontend directory is missing; returns whether it exists.
pub async fn ensure_env(frontend_dir: &str) -> bool {
    common::env::ensure_env(frontend_dir).await
}
