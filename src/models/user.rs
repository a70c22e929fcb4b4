//! User model.

use serde::{Deserialize, Serialize};

use crate::models::resource::Resource;

/// A user as listed in a role collection.
pub type User = Resource<UserEntity>;

/// User fields returned by the role collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserEntity {
    /// Login name. UAA clients acting as users have none.
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// The name to report for this user: the username, or the GUID when the
    /// API returns none.
    pub fn display_name(&self) -> &str {
        match self.entity.username.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.guid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_username() {
        let user: User = serde_json::from_value(serde_json::json!({
            "metadata": { "guid": "u-1" },
            "entity": { "username": "alice", "admin": false, "active": true }
        }))
        .unwrap();
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn test_display_name_falls_back_to_guid() {
        let user: User = serde_json::from_value(serde_json::json!({
            "metadata": { "guid": "client-credentials-user" },
            "entity": { "admin": false }
        }))
        .unwrap();
        assert_eq!(user.display_name(), "client-credentials-user");
    }
}
