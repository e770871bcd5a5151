//! Password Hashing and Verification
//!
//! Salted one-way password hashing built on bcrypt:
//! - Fixed work factor (cost 10)
//! - Zeroization of clear text material on drop
//! - Verification mismatch is a normal `false`, never an error
//!
//! ## Security Features
//! - Per-hash random salt generated by bcrypt itself
//! - Zeroization prevents memory inspection attacks
//! - Debug output of clear text values is redacted

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Fixed bcrypt work factor
pub const BCRYPT_COST: u32 = 10;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is missing or contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,
}

/// Password hashing errors
///
/// These indicate a failure of the cryptographic primitive itself and are
/// unexpected; they are not part of normal control flow.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is not a valid bcrypt hash
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// This type ensures that password data is securely erased from memory
/// when the value is dropped.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Create a new clear text password
    ///
    /// Rejects empty or whitespace-only input. Anything else is accepted;
    /// required-field validation happens at the operation boundary.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }
        Ok(Self(raw))
    }

    /// Get the password as a string slice for hashing
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash the password with bcrypt at the fixed work factor
    ///
    /// ## Returns
    /// A salted bcrypt hash wrapped in [`PasswordHash`]
    pub fn hash(&self) -> Result<PasswordHash, PasswordHashError> {
        let hash = bcrypt::hash(&self.0, BCRYPT_COST)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        Ok(PasswordHash(hash))
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Salted bcrypt password hash
///
/// The stored string embeds algorithm version, cost, and salt, so
/// verification needs no additional parameters. Never serialized to
/// clients.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Create from a stored hash string (e.g., from the database)
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // bcrypt hashes are "$2<x>$<cost>$<salt+digest>", 59-60 chars
        if !hash.starts_with("$2") {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self(hash))
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify a clear text password against this hash
    ///
    /// Mismatch and malformed-hash cases both come back as `false`;
    /// verification never fails with an error.
    pub fn verify(&self, password: &PlainPassword) -> bool {
        bcrypt::verify(password.as_str(), &self.0).unwrap_or(false)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordHash").field(&"[HASH]").finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_empty() {
        let result = PlainPassword::new("".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = PlainPassword::new("        ".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = PlainPassword::new("correct horse battery".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        // Correct password should verify
        assert!(hashed.verify(&password));

        // Wrong password should not verify
        let wrong = PlainPassword::new("wrong horse battery".to_string()).unwrap();
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let password = PlainPassword::new("pw123secret".to_string()).unwrap();
        let hashed = password.hash().unwrap();
        assert_ne!(hashed.as_str(), "pw123secret");
    }

    #[test]
    fn test_hash_is_salted() {
        let password = PlainPassword::new("same password".to_string()).unwrap();
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();
        // Random salt makes each hash distinct, yet both verify
        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(&password));
        assert!(second.verify(&password));
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = PlainPassword::new("roundtrip pass".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        let restored = PasswordHash::from_stored(hashed.as_str().to_string()).unwrap();
        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_stored_hash() {
        assert!(PasswordHash::from_stored("not_a_bcrypt_hash").is_err());
    }

    #[test]
    fn test_verify_against_garbage_hash_is_false() {
        // A syntactically plausible but invalid hash must not panic or error
        let hash = PasswordHash("$2b$10$invalidinvalidinvalidinvalid".to_string());
        let password = PlainPassword::new("whatever".to_string()).unwrap();
        assert!(!hash.verify(&password));
    }

    #[test]
    fn test_debug_redaction() {
        let password = PlainPassword::new("secretvalue".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secretvalue"));
    }
}
