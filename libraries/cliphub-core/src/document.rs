/// Document representation shared by the store and its callers
use crate::error::{HubError, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A schemaless store document: a JSON object keyed by field name.
pub type Document = serde_json::Map<String, Value>;

/// Field every document is keyed by.
pub const ID_FIELD: &str = "_id";

/// Collection names used by the playlist subsystem.
pub mod collections {
    /// Playlists owned by users
    pub const PLAYLISTS: &str = "playlists";
    /// Uploaded videos (borrowed entities)
    pub const VIDEOS: &str = "videos";
    /// Platform users (borrowed entities)
    pub const USERS: &str = "users";
}

/// Serialize a typed value into a store document.
///
/// Fails with [`HubError::Storage`] when the value does not serialize
/// to a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(HubError::storage(format!(
            "expected an object document, got {other}"
        ))),
    }
}

/// Deserialize a store document into a typed value.
pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

/// Read a document's `_id` as a string slice, if present.
pub fn document_id(doc: &Document) -> Option<&str> {
    doc.get(ID_FIELD).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Playlist, UserId};

    #[test]
    fn playlist_round_trips_as_document() {
        let playlist = Playlist::new(UserId::generate(), "Favorites", "my favs");
        let doc = to_document(&playlist).unwrap();

        assert_eq!(document_id(&doc), Some(playlist.id.as_str()));

        let back: Playlist = from_document(doc).unwrap();
        assert_eq!(back, playlist);
    }

    #[test]
    fn non_object_values_are_rejected() {
        assert!(to_document(&42).is_err());
        assert!(to_document(&"plain string").is_err());
    }
}
