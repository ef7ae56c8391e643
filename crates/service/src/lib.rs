//! Service layer for named asset persistence.
//! - `assets` holds the domain types and the `AssetStore` seam.
//! - `file` implements the store on top of a directory tree.
//! - `storage` has the JSON document helpers shared by file-backed stores.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod assets;
pub mod file;
