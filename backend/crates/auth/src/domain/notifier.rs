//! Notifier Trait
//!
//! Interface for delivering the password-reset link. Implementation is in
//! the infrastructure layer; tests substitute a recording double.

use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Outbound reset-mail notifier
#[trait_variant::make(ResetNotifier: Send)]
pub trait LocalResetNotifier {
    /// Deliver the password-reset link to the user's address
    ///
    /// `link` embeds the user id and the reset challenge token; it must
    /// not be logged by implementations.
    async fn send_password_reset(&self, recipient: &Email, link: &str) -> AuthResult<()>;
}
