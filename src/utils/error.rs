use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid JSON payload";
pub const NOT_FOUND_MESSAGE: &str = "User not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Corpo JSON de todas as respostas de erro: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse { error: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Body is not decodable JSON for the expected shape
    InvalidPayload(String),
    /// A field is out of bounds; the message names the field
    Validation(String),
    /// Absent or malformed identifier
    NotFound,
    Internal(String),
}

impl AppError {
    /// Message sent to the client. Internal and decoding details stay in the logs.
    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidPayload(_) => INVALID_PAYLOAD_MESSAGE,
            AppError::Validation(msg) => msg.as_str(),
            AppError::NotFound => NOT_FOUND_MESSAGE,
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidPayload(detail) => write!(f, "Invalid payload: {}", detail),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound => write!(f, "Not found: {}", NOT_FOUND_MESSAGE),
            AppError::Internal(detail) => write!(f, "Internal error: {}", detail),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Internal(detail) => log::error!("❌ {}", detail),
            AppError::InvalidPayload(detail) => log::debug!("⚠️  Rejected payload: {}", detail),
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}
