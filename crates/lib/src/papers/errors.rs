//! Error types for paper and post operations.

use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PaperError {
    #[error("Paper not found: {id}")]
    PaperNotFound { id: String },

    #[error("Post not found: {id}")]
    PostNotFound { id: String },

    /// A submitted form field was rejected
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("User '{username}' does not own paper {paper}")]
    NotOwner { username: String, paper: String },

    #[error("User '{username}' did not write post {post}")]
    NotAuthor { username: String, post: String },
}

impl PaperError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PaperError::PaperNotFound { .. } | PaperError::PostNotFound { .. }
        )
    }

    /// Check if this error was caused by bad form input.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, PaperError::Validation { .. })
    }

    /// Check if the acting user may not touch this record.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            PaperError::NotOwner { .. } | PaperError::NotAuthor { .. }
        )
    }

    /// The offending field, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PaperError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<PaperError> for crate::Error {
    fn from(err: PaperError) -> Self {
        crate::Error::Paper(err)
    }
}
