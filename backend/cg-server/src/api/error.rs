//! REST API error types
//!
//! Every error renders as `{ "error": { "code", "message", ... } }` with a
//! matching HTTP status.

use cg_auth::AuthError;
use cg_core::{CoreError, FieldViolation, ValidationErrors};
use cg_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable, e.g. "NOT_FOUND"
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

impl ApiErrorBody {
    fn new(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            field: None,
            violations: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400, one entry per failing field
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Internal { .. }) {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody::new("NOT_FOUND", message),
            ),
            ApiError::Validation {
                message,
                violations,
                ..
            } => {
                let field = match violations.as_slice() {
                    [only] => Some(only.field.clone()),
                    _ => None,
                };
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorBody {
                        field,
                        violations: Some(violations),
                        ..ApiErrorBody::new("VALIDATION_ERROR", message)
                    },
                )
            }
            ApiError::BadRequest { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    field,
                    ..ApiErrorBody::new("BAD_REQUEST", message)
                },
            ),
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody::new("UNAUTHORIZED", message),
            ),
            ApiError::Forbidden { message, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody::new("FORBIDDEN", message),
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody::new("INTERNAL_ERROR", message),
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    #[track_caller]
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            message: errors.to_string(),
            violations: errors.into_violations(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Database details are logged, never returned
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Rejected query values; the message leaves out source locations
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let (field, message) = match e {
            CoreError::InvalidIssueType { value, .. } => {
                ("type", format!("Invalid issue type: {}", value))
            }
            CoreError::InvalidRsin { value, .. } => {
                ("bronOrganisatie", format!("Invalid RSIN: {}", value))
            }
            CoreError::InvalidLanguageCode { value, .. } => {
                ("taal", format!("Invalid language code: {}", value))
            }
            CoreError::InvalidOrderField { value, .. } => {
                ("order", format!("Cannot order by: {}", value))
            }
            CoreError::InvalidSortDirection { value, .. } => (
                "order",
                format!("Invalid sort direction: {} (expected asc or desc)", value),
            ),
        };
        ApiError::BadRequest {
            message,
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidHeader { .. } => ApiError::BadRequest {
                message: e.client_message(),
                field: e.field(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Unauthorized {
                message: e.client_message(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<cg_config::ConfigError> for ApiError {
    #[track_caller]
    fn from(e: cg_config::ConfigError) -> Self {
        log::error!("Configuration error: {}", e);
        ApiError::Internal {
            message: "Server misconfigured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
