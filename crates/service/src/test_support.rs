#![cfg(test)]
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::file::asset_store::FsAssetStore;

/// Store rooted in a fresh directory under the system temp dir.
pub async fn temp_store() -> Result<(Arc<FsAssetStore>, PathBuf), anyhow::Error> {
    let root = std::env::temp_dir().join(format!("asset_store_{}", uuid::Uuid::new_v4()));
    let store = FsAssetStore::open(&root).await?;
    Ok((store, root))
}

pub async fn cleanup(root: &Path) {
    let _ = tokio::fs::remove_dir_all(root).await;
}
