use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::errors::ServiceError;

/// Read and decode one JSON document.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ServiceError> {
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encode `value` as 2-space indented JSON and write it over `path`.
///
/// The write is a plain truncate-and-write; readers racing it may see a
/// partial document.
pub async fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(value)?;
    fs::write(path, data).await?;
    Ok(())
}
