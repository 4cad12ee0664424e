//! Error types for Ghumfir

use thiserror::Error;

/// The rule a registration attempt violated.
///
/// Rules are checked in a fixed order and the first failure wins, so a
/// caller always sees the highest-priority violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationRule {
    /// Username must be lowercase ASCII letters only
    UsernameNotLowercase,
    /// Username must be at most 15 characters
    UsernameTooLong,
    /// Password must be at least 6 characters
    PasswordTooShort,
    /// Password must contain at least one digit
    PasswordNeedsDigit,
    /// Password and confirmation must match
    ConfirmationMismatch,
    /// Username is already registered
    UsernameTaken,
}

impl RegistrationRule {
    /// Human-readable description of the violated rule
    pub fn message(&self) -> &'static str {
        match self {
            RegistrationRule::UsernameNotLowercase => {
                "username must contain only lowercase letters"
            }
            RegistrationRule::UsernameTooLong => "username must be at most 15 characters",
            RegistrationRule::PasswordTooShort => "password must be at least 6 characters",
            RegistrationRule::PasswordNeedsDigit => "password must contain at least one digit",
            RegistrationRule::ConfirmationMismatch => "password confirmation does not match",
            RegistrationRule::UsernameTaken => "username is already registered",
        }
    }
}

#[derive(Debug, Error)]
pub enum GhumfirError {
    // Login errors
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Registration rejected: {}", .rule.message())]
    RegistrationRejected { rule: RegistrationRule },

    #[error("Login state token mismatch on provider callback")]
    StateMismatch,

    #[error("External sign-in failed: {reason}")]
    ExternalAuthFailed { reason: String },

    #[error("Login method not enabled: {method}")]
    MethodDisabled { method: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, GhumfirError>;
