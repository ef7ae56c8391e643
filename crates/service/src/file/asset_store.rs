//! Directory-tree implementation of `AssetStore`.
//!
//! Layout on disk:
//!
//! ```text
//! <root>/
//!   maps/<name>.json
//!   characters/<name>.json
//!   objects/<name>.json
//! ```
//!
//! - `open` is the only place directories are created.
//! - `save` truncates and rewrites the file; concurrent writers race and the last one wins.
//! - `load` decodes the full record, so a damaged file is a `Parse` error.
//! - `list` only needs name and timestamps. Files that are not JSON objects are
//!   skipped with a warning, and a failing directory read ends the listing early.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;
use tracing::{debug, warn};

use crate::assets::{
    name::{file_name, validate_name, RECORD_EXT},
    record::RecordHeader,
    AssetKind, AssetRecord, AssetStore, AssetSummary, SavedAsset,
};
use crate::errors::ServiceError;
use crate::storage::json_file::{read_json, write_json_pretty};

/// Asset store rooted at one directory. Holds no in-memory state.
#[derive(Clone, Debug)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    /// Open the store at `root`, creating the root and every partition directory if missing.
    pub async fn open<P: Into<PathBuf>>(root: P) -> Result<Arc<Self>, ServiceError> {
        let root = root.into();
        for kind in AssetKind::ALL {
            fs::create_dir_all(root.join(kind.partition())).await?;
        }
        debug!(root = %root.display(), "asset store opened");
        Ok(Arc::new(Self { root }))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn partition_dir(&self, kind: AssetKind) -> PathBuf {
        self.root.join(kind.partition())
    }

    fn record_path(&self, kind: AssetKind, name: &str) -> Result<(PathBuf, String), ServiceError> {
        validate_name(name)?;
        let filename = file_name(name);
        Ok((self.partition_dir(kind).join(&filename), filename))
    }

    /// Write the record, replacing any previous one with the same name.
    pub async fn save(&self, kind: AssetKind, name: &str, code: &str) -> Result<SavedAsset, ServiceError> {
        let (path, filename) = self.record_path(kind, name)?;
        if code.is_empty() {
            return Err(ServiceError::MissingField("code"));
        }
        let record = AssetRecord::new(kind, name, code, Utc::now());
        write_json_pretty(&path, &record).await?;
        debug!(%kind, %name, bytes = code.len(), "asset saved");
        Ok(SavedAsset { kind, filename })
    }

    pub async fn load(&self, kind: AssetKind, name: &str) -> Result<AssetRecord, ServiceError> {
        let (path, _) = self.record_path(kind, name)?;
        match read_json::<AssetRecord>(&path).await {
            Ok(record) => {
                debug!(%kind, %name, "asset loaded");
                Ok(record)
            }
            Err(ServiceError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Err(ServiceError::not_found(&format!("{kind} {name:?}")))
            }
            Err(e) => Err(e),
        }
    }

    /// Summaries of every parseable `*.json` record in the partition, sorted by file name.
    pub async fn list(&self, kind: AssetKind) -> Result<Vec<AssetSummary>, ServiceError> {
        let dir = self.partition_dir(kind);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        while let Some(entry) = next_or_stop(entries.next_entry().await, kind) {
            let Ok(filename) = entry.file_name().into_string() else {
                continue;
            };
            if !filename.ends_with(RECORD_EXT) {
                continue;
            }
            match read_json::<RecordHeader>(&entry.path()).await {
                Ok(header) => summaries.push(AssetSummary::from_header(header, filename)),
                Err(e) => {
                    warn!(%kind, %filename, error = %e, "skipping unreadable asset record");
                }
            }
        }
        summaries.sort_by(|a, b| a.filename.cmp(&b.filename));
        debug!(%kind, count = summaries.len(), "assets listed");
        Ok(summaries)
    }

    pub async fn delete(&self, kind: AssetKind, name: &str) -> Result<(), ServiceError> {
        let (path, _) = self.record_path(kind, name)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(%kind, %name, "asset deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ServiceError::not_found(&format!("{kind} {name:?}")))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Turn a failed directory read into the end of the listing; what was read so far is kept.
fn next_or_stop<T>(next: std::io::Result<Option<T>>, kind: AssetKind) -> Option<T> {
    match next {
        Ok(entry) => entry,
        Err(e) => {
            warn!(%kind, error = %e, "partition listing interrupted");
            None
        }
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn save(&self, kind: AssetKind, name: &str, code: &str) -> Result<SavedAsset, ServiceError> { self.save(kind, name, code).await }
    async fn load(&self, kind: AssetKind, name: &str) -> Result<AssetRecord, ServiceError> { self.load(kind, name).await }
    async fn list(&self, kind: AssetKind) -> Result<Vec<AssetSummary>, ServiceError> { self.list(kind).await }
    async fn delete(&self, kind: AssetKind, name: &str) -> Result<(), ServiceError> { self.delete(kind, name).await }
}
