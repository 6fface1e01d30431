use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned to callers for failures whose cause must not leak.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// The caller's request is malformed. The message is returned verbatim.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A delegated upstream call failed. The message is already sanitised
    /// and is returned verbatim; the upstream detail is logged by the caller.
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamFailure(_)
            | AppError::InternalError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::UpstreamFailure(msg) => msg.clone(),
            AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            AppError::ConfigError(_) => "Configuration error".to_string(),
        }
    }
}

/// Failure half of the response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub is_success: bool,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected request");
            }
            AppError::UpstreamFailure(msg) => {
                tracing::warn!(error = %msg, "Upstream failure");
            }
            AppError::InternalError(err) => {
                tracing::error!(error = ?err, "Internal error");
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
            }
        }

        (
            status,
            Json(ErrorEnvelope {
                is_success: false,
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_keeps_message() {
        let err = AppError::BadRequest("Request must contain exactly one key".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Request must contain exactly one key");
    }

    #[test]
    fn internal_error_hides_cause() {
        let err = AppError::InternalError(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn upstream_failure_is_server_error() {
        let err = AppError::UpstreamFailure("Failed to get AI response".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Failed to get AI response");
    }

    #[test]
    fn envelope_serializes_without_data() {
        let body = serde_json::to_value(ErrorEnvelope {
            is_success: false,
            error: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"is_success": false, "error": "boom"}));
    }
}
