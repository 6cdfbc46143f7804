//! Sign lookup failures.
//!
//! These stay distinct inside the crate. The HTTP layer collapses
//! `InvalidName`, `Forbidden` and sign-level `NotFound` into one response.

use super::name::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum SignError {
    /// Malformed or traversal-attempting identifier.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Identifier passed validation but nothing exists at the resolved path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Private sign requested without a valid session.
    #[error("sign {0} is private")]
    Forbidden(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for SignError {
    fn from(e: ValidationError) -> Self {
        SignError::InvalidName(e.to_string())
    }
}

impl SignError {
    /// Short tag for logs. Never sent to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "INVALID_NAME",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Io(_) => "IO",
        }
    }
}
