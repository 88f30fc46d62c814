//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod internal;

use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicBool, Ordering},
};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError},
};

/// Whether 500 responses carry the underlying error in `details`.
static DEVELOPMENT_MODE: AtomicBool = AtomicBool::new(false);

/// Enables or disables error details in 500 responses.
///
/// Called once during startup from the `APP_ENV` setting.
pub fn set_development_mode(enabled: bool) {
    DEVELOPMENT_MODE.store(enabled, Ordering::Relaxed);
}

fn development_mode() -> bool {
    DEVELOPMENT_MODE.load(Ordering::Relaxed)
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure failures use `#[from]` for
/// automatic conversion, while the message-carrying variants describe client errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error, typically while binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal state such as an unparseable stored enumeration.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data, such as a duplicate code or a delete
    /// blocked by dependent records.
    ///
    /// Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Request body failed validation.
    ///
    /// Results in 400 Bad Request with a per-field breakdown in `errors`.
    #[error("{message}")]
    Validation {
        message: String,
        errors: BTreeMap<String, String>,
    },

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),

    /// An optional feature was invoked without the setting it needs.
    ///
    /// Results in 500 Internal Server Error. Unlike other 500s the message names the
    /// missing setting and is returned to the client.
    #[error("{0}")]
    NotConfigured(String),
}

impl AppError {
    /// Builds a validation error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.clone());

        Self::Validation { message, errors }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Validation` variants
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For `NotConfigured` with its message, and for all other
///   error types (DbErr, ReqwestErr, etc.) with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response(),
            Self::Validation { message, errors } => {
                let mut body = ErrorDto::new(message);
                body.errors = Some(errors);

                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::NotConfigured(msg) => {
                tracing::error!("{}", msg);

                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto::new(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal Server Error" message. The
/// underlying error is only echoed back in `details` while running in development mode.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let mut body = ErrorDto::new("Internal Server Error");
        if development_mode() {
            body.details = Some(self.0.to_string());
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_client_errors_to_status_codes() {
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::field("code", "required").into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_setting_message_reaches_the_client() {
        set_development_mode(false);
        let response =
            AppError::NotConfigured("Gemini API key not configured".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Gemini API key not configured");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn internal_error_message_is_masked() {
        set_development_mode(false);
        let response = AppError::InternalError("row vanished".into()).into_response();

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal Server Error");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn maps_infrastructure_errors_to_500() {
        let err = AppError::DbErr(sea_orm::DbErr::Custom("boom".into()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
