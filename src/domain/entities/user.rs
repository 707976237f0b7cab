//! User entity owned by the user service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// `username` and `email` are unique across users. Uniqueness is checked by
/// [`crate::application::services::UserService`] before every write, not by a
/// storage constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        first_name: String,
        last_name: String,
        username: String,
        email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            username,
            email,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating or fully replacing a user.
///
/// `id` is honoured on create only; when absent the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_camel_case() {
        let now = Utc::now();
        let user = User::new(
            7,
            "Alice".to_string(),
            "Martin".to_string(),
            "alice".to_string(),
            "a@x.com".to_string(),
            now,
            now,
        );

        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], json!(7));
        assert_eq!(value["firstName"], json!("Alice"));
        assert_eq!(value["lastName"], json!("Martin"));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("first_name").is_none());
    }
}
