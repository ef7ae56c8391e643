//! Asset domain: the three asset kinds, the persisted record shape, name
//! rules, and the `AssetStore` trait that request handlers talk to.

pub mod kind;
pub mod name;
pub mod record;
pub mod store;

pub use kind::AssetKind;
pub use record::{AssetRecord, AssetSummary, SaveAssetInput, SavedAsset};
pub use store::AssetStore;
