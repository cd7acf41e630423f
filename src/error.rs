use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;

/// A single error message or a list of validation messages.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// The inner `error` object of the envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    message: ErrorMessage,
    status: u16,
}

/// The error envelope returned by every failing route.
///
/// The message is mirrored at the top level, matching the generic error
/// handler the API clients were written against.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    error: ApiErrorBody,
    message: ErrorMessage,
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = error.message();
        let status = error.status_code().as_u16();

        ApiErrorResponse {
            error: ApiErrorBody {
                message: message.clone(),
                status,
            },
            message,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status_code = StatusCode::from_u16(self.error.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status_code, Json(self)).into_response()
    }
}

#[derive(Debug, From)]
/// API error
pub enum ApiError {
    /// Not found error
    ///
    /// This error is returned when the requested book or route is not found.
    NotFound(NotFoundError),
    /// Validation error
    ///
    /// This error is returned when the payload fails schema validation.
    Validation(ValidationError),
    /// Body error
    ///
    /// This error is returned when the body is not as expected.
    Body(BodyError),
    /// Path error
    ///
    /// This error is returned when the path is not as expected.
    Path(PathError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs.
    InternalServerError(InternalServerError),
}

impl ApiError {
    fn message(&self) -> ErrorMessage {
        match self {
            ApiError::NotFound(err) => ErrorMessage::One(err.message.clone()),
            ApiError::Validation(err) => ErrorMessage::Many(err.violations.clone()),
            ApiError::Body(err) => ErrorMessage::One(err.reason.clone()),
            ApiError::Path(err) => ErrorMessage::One(err.reason.clone()),
            ApiError::MethodNotAllowed(_) => ErrorMessage::One("Method not allowed".to_string()),
            ApiError::InternalServerError(_) => {
                ErrorMessage::One("An internal server error has occurred".to_string())
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Body(_) => StatusCode::BAD_REQUEST,
            ApiError::Path(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalServerError(InternalServerError::from_generic_error(err))
    }
}

#[derive(Debug)]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    /// No book row matches the requested isbn.
    pub fn book(isbn: &str) -> Self {
        NotFoundError {
            message: format!("There is no book with an isbn '{isbn}'"),
        }
    }

    /// No route matches the requested path.
    pub fn route() -> Self {
        NotFoundError {
            message: "Not Found".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct ValidationError {
    violations: Vec<String>,
}

impl ValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        ValidationError { violations }
    }
}

#[derive(Debug)]
pub struct BodyError {
    reason: String,
}

impl BodyError {
    pub fn new(reason: String) -> Self {
        BodyError { reason }
    }
}

#[derive(Debug)]
pub struct PathError {
    reason: String,
}

impl PathError {
    pub fn new(reason: String) -> Self {
        PathError { reason }
    }
}

#[derive(Debug)]
pub struct MethodNotAllowedError;

impl MethodNotAllowedError {
    pub fn new() -> Self {
        MethodNotAllowedError
    }
}

#[derive(Debug)]
pub struct InternalServerError;

impl InternalServerError {
    /// Logs the underlying error and degrades it to a generic 500.
    pub fn from_generic_error<E: Into<anyhow::Error>>(err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        InternalServerError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_envelope_mirrors_message() {
        let response =
            ApiErrorResponse::from(ApiError::from(NotFoundError::book("0000000001")));

        let json = serde_json::to_value(&response).expect("Envelope is serializable");
        let expected = "There is no book with an isbn '0000000001'";

        assert_eq!(json["error"]["message"], expected);
        assert_eq!(json["error"]["status"], 404);
        assert_eq!(json["message"], expected);
    }

    #[test]
    fn validation_envelope_carries_message_list() {
        let violations = vec![
            r#"instance requires property "year""#.to_string(),
            "instance.pages is not of a type(s) integer".to_string(),
        ];
        let response =
            ApiErrorResponse::from(ApiError::from(ValidationError::new(violations.clone())));

        let json = serde_json::to_value(&response).expect("Envelope is serializable");

        assert_eq!(json["error"]["status"], 400);
        assert_eq!(json["message"], serde_json::json!(violations));
    }
}
