use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    /// bcrypt hash, never returned to clients. Accounts created before
    /// hashing was introduced have none and cannot log in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            password_hash: Some(password_hash),
            created_at: Utc::now(),
        }
    }
}

/// Public view of a user, returned by the profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Compact user block embedded in the login response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn legacy_user_without_hash_decodes() {
        let legacy = doc! {
            "id": "u-1",
            "email": "old@example.com",
            "name": "Old",
            "password": "plaintext",
            "created_at": bson::DateTime::now(),
        };

        let user: User = bson::from_document(legacy).unwrap();
        assert_eq!(user.email, "old@example.com");
        assert!(user.password_hash.is_none());
    }

    #[test]
    fn profile_serializes_created_at_as_rfc3339() {
        let user = User::new("sam@example.com".into(), "Sam".into(), "hash".into());
        let json = serde_json::to_value(UserProfile::from(user.clone())).unwrap();

        let raw = json["created_at"].as_str().unwrap();
        assert_eq!(DateTime::parse_from_rfc3339(raw).unwrap(), user.created_at);
    }
}
