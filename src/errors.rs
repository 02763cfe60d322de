use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Book not found";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("book not found")]
    NotFound,
    #[error("invalid request: {message}")]
    InvalidRequest { status: StatusCode, message: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::NotFound => {
                tracing::debug!("book lookup missed");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            Self::InvalidRequest { status, message } => {
                tracing::debug!(error = %message, "request rejected");
                (status, message)
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
