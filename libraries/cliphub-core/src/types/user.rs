/// User domain types
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// User entity as stored in the `users` collection.
///
/// Users are owned by the account lifecycle elsewhere on the platform;
/// this subsystem only reads them when composing playlist views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    #[serde(rename = "_id")]
    pub id: UserId,

    /// Login name, unique per platform
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Public projection of a user, embedded into composed playlist views.
///
/// Copied at read time, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Display name
    pub full_name: String,

    /// Login name
    pub username: String,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_store_field_names() {
        let user = User {
            id: UserId::generate(),
            username: "alice".to_string(),
            full_name: "Alice Example".to_string(),
            avatar: Some("https://cdn.cliphub.io/a.png".to_string()),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("_id").is_some());
        assert_eq!(value["fullName"], "Alice Example");
        assert_eq!(value["username"], "alice");
    }
}
