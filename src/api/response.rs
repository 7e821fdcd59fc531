//! Response types for the Stay Allowance Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the rule description returned by `/rule`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{MAX_STAY_DAYS, WINDOW_DAYS};
use crate::config::RuleMetadata;
use crate::error::EngineError;

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
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
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidTripOrder { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TRIP_ORDER",
                    message,
                    "Each trip's entry_date must be on or before its exit_date",
                ),
            },
            EngineError::TooManyTrips { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("TOO_MANY_TRIPS", message),
            },
            EngineError::TripTooLong { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("TRIP_TOO_LONG", message),
            },
            EngineError::SpanTooWide { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("SPAN_TOO_WIDE", message),
            },
            EngineError::LookupGap { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("LOOKUP_GAP", "Internal consistency failure", message),
            },
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

/// Body returned by `GET /rule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResponse {
    /// Descriptive metadata from configuration.
    pub rule: RuleMetadata,
    /// Width of the rolling window in days.
    pub window_days: u64,
    /// Allowance within any window.
    pub max_stay_days: u32,
    /// Maximum trips per request.
    pub max_trips: usize,
}

impl RuleResponse {
    /// Builds the response from the loaded metadata and limits.
    pub fn new(rule: RuleMetadata, max_trips: usize) -> Self {
        Self {
            rule,
            window_days: WINDOW_DAYS,
            max_stay_days: MAX_STAY_DAYS,
            max_trips,
        }
    }
}
