use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Kind of asset. Each kind is stored in its own partition directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Map,
    Character,
    Object,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Map, AssetKind::Character, AssetKind::Object];

    /// Wire name, as used in routes and inside records.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Map => "map",
            AssetKind::Character => "character",
            AssetKind::Object => "object",
        }
    }

    /// Partition directory name under the assets root.
    pub fn partition(self) -> &'static str {
        match self {
            AssetKind::Map => "maps",
            AssetKind::Character => "characters",
            AssetKind::Object => "objects",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "map" => Ok(AssetKind::Map),
            "character" => Ok(AssetKind::Character),
            "object" => Ok(AssetKind::Object),
            other => Err(ServiceError::InvalidType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        for kind in AssetKind::ALL {
            assert_eq!(kind.as_str().parse::<AssetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_unknown_and_mixed_case() {
        for bad in ["", "maps", "Map", "OBJECT", "weapon"] {
            assert!(matches!(bad.parse::<AssetKind>(), Err(ServiceError::InvalidType(_))), "{bad}");
        }
    }

    #[test]
    fn partitions_are_distinct() {
        assert_eq!(AssetKind::Map.partition(), "maps");
        assert_eq!(AssetKind::Character.partition(), "characters");
        assert_eq!(AssetKind::Object.partition(), "objects");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&AssetKind::Character).unwrap(), "\"character\"");
        let k: AssetKind = serde_json::from_str("\"object\"").unwrap();
        assert_eq!(k, AssetKind::Object);
    }
}
