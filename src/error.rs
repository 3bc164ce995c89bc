use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum ErrorMessage {
    InvalidWalletType,
    InvalidWalletId,
    InvalidUserId,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorMessage::InvalidWalletType => "Invalid wallet type",
            ErrorMessage::InvalidWalletId => "Invalid wallet id",
            ErrorMessage::InvalidUserId => "Invalid user id",
        };
        f.write_str(message)
    }
}

/// Failures surfaced by a wallet store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("wallet not found")]
    NotFound(i32),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

impl ErrorKind {
    // A missing wallet is reported like any other storage failure.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::Database(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn from_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        HttpError::new(message, kind.status())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError::from_kind(ErrorKind::Validation, message)
    }

    pub fn into_http_response(self) -> Response {
        let json_response = Json(ErrorResponse {
            message: self.message,
        });

        (self.status, json_response).into_response()
    }
}

impl From<StoreError> for HttpError {
    fn from(error: StoreError) -> Self {
        HttpError::from_kind(error.kind(), error.to_string())
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HttpError: message: {}, status: {}", self.message, self.status)
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
