//! Application Layer
//!
//! Use cases and application services.

pub mod authorize;
pub mod change_password;
pub mod config;
pub mod confirm_password_reset;
pub mod request_password_reset;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use authorize::{AuthorizeUseCase, Principal};
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use confirm_password_reset::{ConfirmPasswordResetInput, ConfirmPasswordResetUseCase};
pub use request_password_reset::RequestPasswordResetUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
