// src/models/user.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Full `users` row, only used while checking a password.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl UserCredentials {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            is_admin: self.is_admin,
        }
    }
}

/// Row about to be inserted into `users`; `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Identifier of a row in `saves`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Save {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_camel_case_admin_flag() {
        let user = User {
            id: 1,
            username: "alice".into(),
            is_admin: false,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "username": "alice", "isAdmin": false}));
    }

    #[test]
    fn credentials_drop_the_password_when_projected() {
        let creds = UserCredentials {
            id: 7,
            username: "bob".into(),
            password: "$2b$04$hash".into(),
            is_admin: true,
        };
        let json = serde_json::to_value(creds.into_user()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["isAdmin"], true);
    }
}
