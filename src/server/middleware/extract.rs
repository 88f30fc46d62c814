//! Request extractors returning `AppError` rejections.
//!
//! `ValidatedJson` deserializes the body and then runs the payload's `Validate` rules.
//! `Path` and `Query` wrap axum's extractors so malformed parameters produce the same
//! error envelope as every other client error.

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Request,
    },
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Rules a request payload must satisfy after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// Collects per-field messages while checking a payload.
#[derive(Debug, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`; the first message per field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, format!("{} is required", field));
        }
    }

    /// Like `require_text` but only when the value is present.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.require_text(field, value);
        }
    }

    pub fn require_positive(&mut self, field: &str, value: Option<f64>) {
        if let Some(value) = value {
            if value <= 0.0 {
                self.add(field, format!("{} must be positive", field));
            }
        }
    }

    pub fn into_result(self) -> Result<(), AppError> {
        self.into_result_with("Validation failed")
    }

    /// Like `into_result` with a custom top-level message.
    pub fn into_result_with(self, message: impl Into<String>) -> Result<(), AppError> {
        if self.0.is_empty() {
            return Ok(());
        }

        Err(AppError::Validation {
            message: message.into(),
            errors: self.0,
        })
    }
}

/// JSON body extractor that runs `Validate` on the deserialized payload.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        payload.validate()?;

        Ok(Self(payload))
    }
}

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        let field = missing_field(&detail).unwrap_or_else(|| "body".to_string());
        let mut errors = BTreeMap::new();
        errors.insert(field, detail);

        AppError::Validation {
            message: "Invalid request body".to_string(),
            errors,
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Pulls `x` out of serde's "missing field `x`" message.
fn missing_field(detail: &str) -> Option<String> {
    let rest = detail.split("missing field `").nth(1)?;
    let field = rest.split('`').next()?;

    Some(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_missing_field_name() {
        let detail = "Failed to deserialize the JSON body into the target type: missing field `code` at line 1 column 2";
        assert_eq!(missing_field(detail), Some("code".to_string()));
        assert_eq!(missing_field("expected value"), None);
    }

    #[test]
    fn field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.require_text("name", " ");
        errors.add("name", "second");
        errors.require_positive("height", Some(-1.0));

        match errors.into_result() {
            Err(AppError::Validation { errors, .. }) => {
                assert_eq!(errors.get("name").map(String::as_str), Some("name is required"));
                assert!(errors.contains_key("height"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn empty_field_errors_pass() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
