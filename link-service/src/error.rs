use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use eventlink_shared::error::{ServiceError, TokenError};
use eventlink_shared::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable payload: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

// A token that fails to decode is unusable; report the codec's reason to the caller
impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            ServiceError::ValidationError(msg) => AppError::Unprocessable(msg),
            ServiceError::InternalError(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized error: {}", msg);
                (StatusCode::UNAUTHORIZED, msg)
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request error: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Unprocessable(msg) => {
                tracing::debug!("Unprocessable payload: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
