use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid asset type: {0}")]
    InvalidType(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid asset name: {0}")]
    InvalidName(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Errors caused by the request itself rather than by the disk.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidType(_) | Self::MissingField(_) | Self::InvalidName(_) | Self::NotFound(_)
        )
    }
}
