//! Error handling module for the gate-pass backend.
//!
//! Provides the tagged error type, its single mapping to HTTP status codes,
//! and the `{success:false, message}` response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid required input
    Validation(String),
    /// Unknown gate-pass id
    NotFound(String),
    /// Operation precondition violated
    InvalidState(String),
    /// Storage document could not be read or parsed
    StorageRead(String),
    /// Storage document could not be written
    StorageWrite(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidState(_) => StatusCode::BAD_REQUEST,
            AppError::StorageRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StorageWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidState(msg)
            | AppError::StorageRead(msg)
            | AppError::StorageWrite(msg) => msg,
        }
    }

    /// Storage failures are internal; their detail never reaches the caller.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::StorageRead(_) | AppError::StorageWrite(_))
    }

    /// Attach the message reported for internal failures of one operation.
    pub fn during(self, failure_message: &'static str) -> OperationError {
        OperationError {
            error: self,
            failure_message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// An error raised while serving one operation, with that operation's
/// generic failure message.
#[derive(Debug)]
pub struct OperationError {
    pub error: AppError,
    pub failure_message: &'static str,
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let message = if self.error.is_internal() {
            tracing::error!("{}: {}", self.failure_message, self.error);
            self.failure_message
        } else {
            self.error.message()
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_table() {
        let cases = [
            (AppError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidState("i".into()), StatusCode::BAD_REQUEST),
            (
                AppError::StorageRead("r".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::StorageWrite("w".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{:?}", error);
        }
    }

    #[test]
    fn test_only_storage_errors_are_internal() {
        assert!(AppError::StorageRead("r".into()).is_internal());
        assert!(AppError::StorageWrite("w".into()).is_internal());
        assert!(!AppError::Validation("v".into()).is_internal());
        assert!(!AppError::NotFound("n".into()).is_internal());
        assert!(!AppError::InvalidState("i".into()).is_internal());
    }

    #[test]
    fn test_error_response_envelope() {
        let body = serde_json::to_value(ErrorResponse::new("Request not found")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "Request not found" })
        );
    }

    async fn response_json(response: Response) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_operation_error_hides_storage_detail() {
        let response = AppError::StorageWrite("disk full at /var/data".into())
            .during("Error creating request")
            .into_response();

        let (status, body) = response_json(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error creating request");
    }

    #[tokio::test]
    async fn test_operation_error_keeps_client_messages() {
        let response = AppError::InvalidState("Gate pass is not approved".into())
            .during("Error scanning gate pass")
            .into_response();

        let (status, body) = response_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "Gate pass is not approved" })
        );
    }
}
