use thiserror::Error;

/// Error type for token issue/verify operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token signature could not be verified")]
    Unverifiable,

    #[error("Token claims are malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,
}
