//! SMTP Notifier Implementation
//!
//! Delivers the password-reset link over SMTP with lettre.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::notifier::ResetNotifier;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Outbound mail configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,
    /// SMTP username
    pub username: String,
    /// SMTP password
    pub password: String,
    /// From address for reset mail
    pub from: String,
}

/// SMTP-backed reset notifier
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(config: SmtpConfig) -> AuthResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| AuthError::Internal(format!("SMTP relay setup failed: {e}")))?
            .credentials(Credentials::new(config.username, config.password))
            .build();

        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| AuthError::Internal(format!("Invalid from address: {e}")))?;

        Ok(Self { transport, from })
    }
}

impl ResetNotifier for SmtpNotifier {
    async fn send_password_reset(&self, recipient: &Email, link: &str) -> AuthResult<()> {
        let to = recipient
            .as_str()
            .parse::<Mailbox>()
            .map_err(|e| AuthError::Mail(format!("Invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Password Reset Request")
            .body(format!(
                "We received a request to reset your password.\n\n\
                 Open the link below to choose a new one. The link expires \
                 in 10 minutes.\n\n{link}\n\n\
                 If you did not request a reset, you can ignore this email."
            ))
            .map_err(|e| AuthError::Mail(format!("Failed to build reset mail: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AuthError::Mail(format!("SMTP send failed: {e}")))?;

        // Recipient only; the link carries the challenge token
        tracing::debug!(recipient = %recipient, "Reset mail accepted by relay");

        Ok(())
    }
}
