// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::{errors::DomainError, upload::UploadError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: Option<String>,
    errors: Option<BTreeMap<String, String>>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidFields(fields) => {
                Self::fields(StatusCode::BAD_REQUEST, fields.into_inner())
            }
            ApplicationError::Upload(UploadError::Missing) => {
                Self::new(StatusCode::BAD_REQUEST, UploadError::Missing.to_string())
            }
            ApplicationError::Upload(upload_err) => {
                let mut errors = BTreeMap::new();
                errors.insert("image".to_string(), upload_err.to_string());
                Self::fields(StatusCode::BAD_REQUEST, errors)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            ApplicationError::Storage(cause) => {
                tracing::error!(error = %cause, "file storage failure");
                Self::internal()
            }
            ApplicationError::Infrastructure(cause) => {
                tracing::error!(error = %cause, "infrastructure failure");
                Self::internal()
            }
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                DomainError::Persistence(cause) => {
                    tracing::error!(error = %cause, "persistence failure");
                    Self::internal()
                }
            },
        }
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            errors: None,
        }
    }

    fn fields(status: StatusCode, errors: BTreeMap<String, String>) -> Self {
        Self {
            status,
            message: None,
            errors: Some(errors),
        }
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            status: self.status.as_u16(),
            message: self.message,
            errors: self.errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Error envelope: either a single `message` or a field-keyed `errors` map.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
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
