/// ID types for ClipHub entities
use crate::error::HubError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of a canonical object id in hex characters (12 bytes).
const OBJECT_ID_LEN: usize = 24;

/// Check whether a raw string is a well-formed object id.
///
/// The store's canonical id format is 24 hex digits. This is purely
/// syntactic; it says nothing about whether the entity exists.
pub fn is_valid_object_id(raw: &str) -> bool {
    raw.len() == OBJECT_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Generate a fresh object id: 4 bytes of unix seconds followed by
/// 8 random bytes, hex-encoded.
fn generate_object_id() -> String {
    use std::fmt::Write as _;

    let seconds = chrono::Utc::now().timestamp() as u32;
    let random = Uuid::new_v4().into_bytes();

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    bytes[4..].copy_from_slice(&random[..8]);

    let mut out = String::with_capacity(OBJECT_ID_LEN);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// User identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Parse a user ID, validating the object id format
    pub fn parse(raw: impl Into<String>) -> Result<Self, HubError> {
        let raw = raw.into();
        if !is_valid_object_id(&raw) {
            return Err(HubError::invalid_argument(format!("invalid user id: {raw}")));
        }
        Ok(Self(raw))
    }

    /// Generate a new random user ID
    pub fn generate() -> Self {
        Self(generate_object_id())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = HubError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Parse a video ID, validating the object id format
    pub fn parse(raw: impl Into<String>) -> Result<Self, HubError> {
        let raw = raw.into();
        if !is_valid_object_id(&raw) {
            return Err(HubError::invalid_argument(format!(
                "invalid video id: {raw}"
            )));
        }
        Ok(Self(raw))
    }

    /// Generate a new random video ID
    pub fn generate() -> Self {
        Self(generate_object_id())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = HubError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Playlist identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Parse a playlist ID, validating the object id format
    pub fn parse(raw: impl Into<String>) -> Result<Self, HubError> {
        let raw = raw.into();
        if !is_valid_object_id(&raw) {
            return Err(HubError::invalid_argument(format!(
                "invalid playlist id: {raw}"
            )));
        }
        Ok(Self(raw))
    }

    /// Generate a new random playlist ID
    pub fn generate() -> Self {
        Self(generate_object_id())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlaylistId {
    type Error = HubError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl From<PlaylistId> for String {
    fn from(id: PlaylistId) -> Self {
        id.0
    }
}
