//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use platform::password::PasswordHash;

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
///
/// The store is assumed atomic at the record level; email uniqueness is
/// enforced by the store itself, and a concurrent duplicate insert must
/// surface as [`crate::error::AuthError::EmailTaken`].
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user record
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if a record with this email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Replace the stored password hash for a user
    async fn update_password(&self, user_id: &UserId, hash: &PasswordHash) -> AuthResult<()>;
}
