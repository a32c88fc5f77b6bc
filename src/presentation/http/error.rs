use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned when a lookup by id finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotFoundResponseDto {
    #[schema(example = "user 99 not found")]
    pub message: String,
}

impl NotFoundResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Default error body for every failure that is not translated.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum HttpError {
    /// Domain not-found translated into a client-facing 404.
    NotFound(NotFoundResponseDto),
    /// Request rejected before reaching a use-case.
    BadRequest(String),
    /// Any failure left to the default mapping (500).
    Unhandled(ApplicationError),
}

impl HttpError {
    /// Default mapping: the error is carried untouched and rendered as a 500.
    pub fn from_error(err: ApplicationError) -> Self {
        Self::Unhandled(err)
    }

    /// Translate a not-found failure into a 404 carrying its original message;
    /// anything else falls through to the default mapping.
    pub fn translate_not_found(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(message) => {
                Self::NotFound(NotFoundResponseDto::new(message))
            }
            other => Self::Unhandled(other),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound(body) => (status, Json(body)).into_response(),
            Self::BadRequest(message) => error_body(status, message),
            Self::Unhandled(_) => error_body(status, INTERNAL_ERROR_MESSAGE.to_string()),
        }
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    let payload = ErrorResponse {
        error: status.canonical_reason().unwrap_or("error").to_string(),
        message,
    };
    (status, Json(payload)).into_response()
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
