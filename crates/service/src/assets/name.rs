use crate::errors::ServiceError;

/// Extension of every record file.
pub const RECORD_EXT: &str = ".json";

const MAX_FILE_NAME: usize = 255;

/// Reject names that could escape the partition directory or that the
/// filesystem cannot hold.
pub fn validate_name(name: &str) -> Result<(), ServiceError> {
    let bad = |reason: &str| -> Result<(), ServiceError> {
        Err(ServiceError::InvalidName(format!("{name:?}: {reason}")))
    };
    if name.is_empty() {
        return Err(ServiceError::MissingField("name"));
    }
    if name.contains(['/', '\\', '\0']) {
        return bad("must not contain path separators");
    }
    if name.contains("..") {
        return bad("must not contain '..'");
    }
    if name.starts_with('.') {
        return bad("must not start with '.'");
    }
    if name.len() + RECORD_EXT.len() > MAX_FILE_NAME {
        return bad("too long");
    }
    Ok(())
}

/// File name a record is stored under.
pub fn file_name(name: &str) -> String {
    format!("{name}{RECORD_EXT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for ok in ["level1", "Hero Knight", "tree_oak-02", "خريطة", "a.b"] {
            assert!(validate_name(ok).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_traversal() {
        for bad in ["../secret", "a/b", "a\\b", "..", ".hidden", "x..y", "nul\0byte"] {
            assert!(matches!(validate_name(bad), Err(ServiceError::InvalidName(_))), "{bad:?}");
        }
    }

    #[test]
    fn rejects_overlong_and_empty() {
        let long = "n".repeat(251);
        assert!(matches!(validate_name(&long), Err(ServiceError::InvalidName(_))));
        assert!(validate_name(&"n".repeat(250)).is_ok());
        assert!(matches!(validate_name(""), Err(ServiceError::MissingField("name"))));
    }

    #[test]
    fn file_name_appends_extension() {
        assert_eq!(file_name("castle"), "castle.json");
    }
}
