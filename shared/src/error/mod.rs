use thiserror::Error;

use crate::models::ShareScope;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Failures raised while decoding a share token.
///
/// Any of these means the token is unusable; there is no partial result.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is not valid base64url: {0}")]
    InvalidEncoding(String),

    #[error("Token payload is not valid JSON: {0}")]
    InvalidPayload(String),

    #[error("Invalid {expected} token (scope was {found})")]
    ScopeMismatch { expected: ShareScope, found: String },

    #[error("Missing eventId")]
    MissingEventId,
}
