//! User Entity
//!
//! The single user record: profile fields plus the stored password hash.
//! The hash never leaves the backend; responses carry only username and
//! email.

use chrono::{DateTime, Utc};
use platform::password::PasswordHash;

use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};

/// User entity
///
/// Exactly one record exists per email; the store's unique constraint is
/// the arbiter under concurrent signups.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (store-assigned, opaque to clients)
    pub user_id: UserId,
    /// Display name (required, non-unique)
    pub username: UserName,
    /// Email address (unique, natural lookup key)
    pub email: Email,
    /// Salted bcrypt password hash
    pub password_hash: PasswordHash,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: UserName, email: Email, password_hash: PasswordHash) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored password hash (password change or reset)
    pub fn set_password_hash(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::PlainPassword;

    fn sample_user() -> User {
        let hash = PlainPassword::new("pw123secret".to_string())
            .unwrap()
            .hash()
            .unwrap();
        User::new(
            UserName::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
            hash,
        )
    }

    #[test]
    fn test_new_user_timestamps() {
        let user = sample_user();
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_set_password_hash_touches_updated_at() {
        let mut user = sample_user();
        let before = user.updated_at;
        let new_hash = PlainPassword::new("newpw456".to_string())
            .unwrap()
            .hash()
            .unwrap();
        user.set_password_hash(new_hash);
        assert!(user.updated_at >= before);
    }
}
