//! Record shapes stored on disk and returned to clients.
//!
//! Records are written with RFC 3339 UTC timestamps. Older stores hold
//! timestamps without an offset (`2024-05-01T10:00:00.123456`); those are
//! read as UTC. Listing only needs the name and the two timestamps, so it
//! decodes a loose `RecordHeader` and never rejects a record for a bad
//! `type` or a missing `code`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::kind::AssetKind;
use crate::errors::ServiceError;

/// Persisted state of one asset, one JSON file per record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssetRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub code: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl AssetRecord {
    /// Fresh record; both timestamps are `now`, even when it replaces an older one.
    pub fn new(kind: AssetKind, name: &str, code: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            code: code.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Parse an ISO-8601 timestamp, with or without an offset. Offset-less values are UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {raw}")))
}

/// The parts of a record file that listing looks at. Any JSON object decodes.
#[derive(Debug, Default, Deserialize)]
pub struct RecordHeader {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
}

/// Projection returned when listing a partition.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AssetSummary {
    pub name: String,
    pub filename: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AssetSummary {
    /// Missing or non-string names fall back to the file stem; unreadable timestamps become `None`.
    pub fn from_header(header: RecordHeader, filename: String) -> Self {
        let name = match header.name {
            Some(Value::String(name)) => name,
            _ => filename.strip_suffix(super::name::RECORD_EXT).unwrap_or(&filename).to_string(),
        };
        let timestamp = |v: Option<Value>| v.as_ref().and_then(Value::as_str).and_then(parse_timestamp);
        Self {
            created_at: timestamp(header.created_at),
            updated_at: timestamp(header.updated_at),
            name,
            filename,
        }
    }
}

/// Result of a successful save.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SavedAsset {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub filename: String,
}

/// Save request as submitted by clients; every field is optional on the wire.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SaveAssetInput {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
}

impl SaveAssetInput {
    /// Presence checks first, then the type. Empty strings count as missing.
    pub fn validate(self) -> Result<(AssetKind, String, String), ServiceError> {
        let kind = required(self.kind, "type")?;
        let name = required(self.name, "name")?;
        let code = required(self.code, "code")?;
        let kind = kind.parse::<AssetKind>()?;
        Ok((kind, name, code))
    }
}

fn required(v: Option<String>, field: &'static str) -> Result<String, ServiceError> {
    match v {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ServiceError::MissingField(field)),
    }
}
