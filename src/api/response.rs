//! Response types for the PAYE engine API.
//!
//! This module defines the success bodies for each endpoint and the error
//! response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{BatchEntry, BatchSummary, ReconciliationSummary};
use crate::error::EngineError;
use crate::models::{ReconciliationResult, ValidationResult};

/// Response body for `/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this batch.
    pub batch_id: Uuid,
    /// When the batch was processed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The statutory registry used, e.g. "ZIMRA 2025".
    pub registry_version: String,
    /// One entry per input record, in input order.
    pub results: Vec<BatchEntry>,
    /// Per-currency totals.
    pub summary: BatchSummary,
}

/// Response body for `/reconcile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationResponse {
    /// Unique identifier for this run.
    pub batch_id: Uuid,
    /// The statutory registry used.
    pub registry_version: String,
    /// One result per input record, in input order.
    pub results: Vec<ReconciliationResult>,
    /// Status counts and net variance per currency.
    pub summary: ReconciliationSummary,
}

/// Response body for `/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Number of records that passed.
    pub valid_records: usize,
    /// One result per input record, in input order.
    pub results: Vec<ValidationResult>,
}

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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTaxTable { currency, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid {} tax table", currency),
                    message,
                ),
            },
            EngineError::InvalidConfiguration { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_CONFIGURATION",
                    format!("Invalid configuration field '{}': {}", field, message),
                    "The tax configuration override contains an out-of-range value",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_configuration_maps_to_bad_request() {
        let engine_error = EngineError::InvalidConfiguration {
            field: "pension_rate".to_string(),
            message: "rate 2 must be between 0 and 1".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_CONFIGURATION");
        assert!(api_error.error.message.contains("pension_rate"));
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/config/registry.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_error_response_carries_status_and_json_body() {
        let api_error = ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error("bad record"),
        };
        let response = api_error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
