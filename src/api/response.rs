//! Response types for the salary engine API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP statuses, and the summary body returned by the
//! bulk attendance endpoints.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;

/// A handler result carrying the structured error response on failure.
pub type ApiResult<T> = Result<T, ApiErrorResponse>;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("VALIDATION_ERROR", error.to_string()),
            },
            EngineError::UnknownAttendanceCode { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_ATTENDANCE_CODE",
                    error.to_string(),
                    "Valid codes are NONE, P, A, H, and PP",
                ),
            },
            EngineError::InvalidDay { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DAY", error.to_string()),
            },
            EngineError::InvalidPeriod { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_PERIOD", error.to_string()),
            },
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", error.to_string()),
            },
            EngineError::DesignationNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("DESIGNATION_NOT_FOUND", error.to_string()),
            },
            EngineError::SheetNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SHEET_NOT_FOUND", error.to_string()),
            },
            // The backend message stays in the log, not the response body
            EngineError::Persistence { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("PERSISTENCE_ERROR", "Storage backend failure"),
            },
            EngineError::Calculation { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::Io { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("IO_ERROR", "I/O failure", message),
            },
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                // The body text carries the detailed serde error
                let body_text = err.body_text();
                warn!(error = %body_text, "JSON data error");
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(error = %err, "JSON syntax error");
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => ApiError::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            ),
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection.body_text(), "query string rejected");
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new("VALIDATION_ERROR", rejection.body_text()),
        }
    }
}

/// Aggregate body returned by the bulk attendance endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSummary {
    /// What the operation did.
    pub message: String,
    /// Number of records written.
    pub count: usize,
}
