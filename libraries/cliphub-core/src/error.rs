/// Core error types for ClipHub
use thiserror::Error;

/// Result type alias using `HubError`
pub type Result<T> = std::result::Result<T, HubError>;

/// Error taxonomy shared by every ClipHub component.
///
/// Each variant carries a human-readable message; the numeric
/// classification for transport layers comes from [`HubError::code`].
#[derive(Error, Debug)]
pub enum HubError {
    /// Malformed id or empty required field
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced playlist, video, or owner scope yields no result
    #[error("Not found: {0}")]
    NotFound(String),

    /// Requester is not allowed to touch the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Duplicate playlist name or duplicate membership
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying store call failed or timed out
    #[error("Storage error: {0}")]
    Storage(String),
}

impl HubError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Numeric classification of the error, HTTP-compatible.
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) => 400,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Storage(_) => 500,
        }
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_match_classification() {
        assert_eq!(HubError::invalid_argument("x").code(), 400);
        assert_eq!(HubError::forbidden("x").code(), 403);
        assert_eq!(HubError::not_found("x").code(), 404);
        assert_eq!(HubError::conflict("x").code(), 409);
        assert_eq!(HubError::storage("x").code(), 500);
    }

    #[test]
    fn messages_are_prefixed() {
        let err = HubError::conflict("video already in playlist");
        assert_eq!(err.to_string(), "Conflict: video already in playlist");
    }
}
