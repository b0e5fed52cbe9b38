//! REST API module.
//!
//! Handlers for the gate-pass endpoints and the shared response envelope.

mod requests;
mod scan;

pub use requests::*;
pub use scan::*;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::{AppError, OperationError};

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, OperationError>;

/// JSON body extractor.
///
/// An empty body, or any JSON value that is not an object, reads as
/// `T::default()`, so absent fields surface as validation errors.
/// Unparseable bodies are rejected as validation errors in the standard
/// error envelope.
#[derive(Debug, Clone, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiJson(T::default()));
        }

        let invalid =
            |e: serde_json::Error| AppError::Validation(format!("Invalid request body: {}", e));

        match serde_json::from_slice::<Value>(&bytes).map_err(invalid)? {
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(ApiJson)
                .map_err(invalid),
            _ => Ok(ApiJson(T::default())),
        }
    }
}
