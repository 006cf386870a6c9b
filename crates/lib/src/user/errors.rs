//! Error types for the user system
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("Username already exists: {username}")]
    UsernameAlreadyExists { username: String },

    #[error("Email already registered: {email}")]
    EmailAlreadyRegistered { email: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(
        "Multiple users detected with email '{email}' ({count} found). Manual intervention required."
    )]
    DuplicateEmailsDetected { email: String, count: usize },

    #[error("Password hashing failed: {reason}")]
    PasswordHashing { reason: String },
}

impl UserError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::UserNotFound { .. })
    }

    /// Check if this error indicates the account already exists.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            UserError::UsernameAlreadyExists { .. } | UserError::EmailAlreadyRegistered { .. }
        )
    }

    /// Check if this error is a rejected login.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, UserError::InvalidCredentials)
    }

    /// Check if this error is caused by bad input.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, UserError::MissingField { .. })
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
