use async_trait::async_trait;

use super::{AssetKind, AssetRecord, AssetSummary, SavedAsset};
use crate::errors::ServiceError;

/// Trait abstraction for asset persistence.
/// The filesystem implementation lives in `crate::file::asset_store`.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Create or overwrite the asset `name` of the given kind.
    async fn save(&self, kind: AssetKind, name: &str, code: &str) -> Result<SavedAsset, ServiceError>;
    async fn load(&self, kind: AssetKind, name: &str) -> Result<AssetRecord, ServiceError>;
    /// Summaries of every readable record of a kind. Unreadable records are skipped.
    async fn list(&self, kind: AssetKind) -> Result<Vec<AssetSummary>, ServiceError>;
    async fn delete(&self, kind: AssetKind, name: &str) -> Result<(), ServiceError>;
}
