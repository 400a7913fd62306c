//! User entity representing a registered account in the FavoriteHub system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// The email is stored lowercase-normalized; uniqueness is enforced by the
/// storage layer. Users are never hard-deleted, only status flags change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Lowercase-normalized email address, unique per account
    pub email: String,

    /// Bcrypt hash of the user's password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether the account can log in
    pub is_active: bool,

    /// Whether the account's email has been verified
    pub is_verified: bool,

    /// Whether the account has staff privileges
    pub is_staff: bool,

    /// Whether the account has superuser privileges
    pub is_superuser: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User from a normalized email and password hash.
    ///
    /// Registration produces active, verified accounts; there is no
    /// verification-email flow, only the flags.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_active: true,
            is_verified: true,
            is_staff: false,
            is_superuser: false,
            created_at: Utc::now(),
        }
    }

    /// Creates a superuser account
    pub fn new_superuser(email: String, password_hash: String) -> Self {
        let mut user = Self::new(email, password_hash);
        user.is_staff = true;
        user.is_superuser = true;
        user
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Reactivates the account
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Checks whether the account is allowed to authenticate
    pub fn can_login(&self) -> bool {
        self.is_active && self.is_verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("a@b.com".to_string(), "hash".to_string());

        assert_eq!(user.email, "a@b.com");
        assert!(user.is_active);
        assert!(user.is_verified);
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
        assert!(user.can_login());
    }

    #[test]
    fn test_superuser_creation() {
        let user = User::new_superuser("admin@b.com".to_string(), "hash".to_string());

        assert!(user.is_staff);
        assert!(user.is_superuser);
    }

    #[test]
    fn test_deactivation() {
        let mut user = User::new("a@b.com".to_string(), "hash".to_string());

        user.deactivate();
        assert!(!user.is_active);
        assert!(!user.can_login());

        user.activate();
        assert!(user.can_login());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("a@b.com".to_string(), "hash".to_string());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@b.com");
    }
}
