// src/server/error.rs

//! Mapping from application errors to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub message: String,
    pub developer_message: String,
}

/// An application error tied to the request that produced it.
#[derive(Debug)]
pub struct ApiError {
    request_id: String,
    message: &'static str,
    source: AppError,
}

impl ApiError {
    pub fn new(request_id: impl Into<String>, message: &'static str, source: AppError) -> Self {
        Self {
            request_id: request_id.into(),
            message,
            source,
        }
    }

    fn status(&self) -> StatusCode {
        match self.source {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(
                request_id = %self.request_id,
                error = %self.source,
                "{}",
                self.message
            );
        } else {
            tracing::warn!(
                request_id = %self.request_id,
                error = %self.source,
                "{}",
                self.message
            );
        }

        let body = ErrorResponse {
            request_id: self.request_id,
            message: self.message.to_string(),
            developer_message: self.source.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;
