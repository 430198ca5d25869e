//! HTTP request handlers for the PAYE engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_batch, reconcile_year_end, summarize_batch, summarize_reconciliation,
    validate_record,
};
use crate::models::ValidationResult;

use super::request::{CalculationRequest, RecordsRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ReconciliationResponse, ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/reconcile", post(reconcile_handler))
        .route("/validate", post(validate_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body extraction failure onto a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message lives in the body text, not the Display impl
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate.
///
/// Validates the optional configuration override, then validates and
/// calculates every record. Records that fail validation are still
/// calculated and carry their errors alongside the result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Some(config) = &request.configuration {
        if let Err(err) = config.validate() {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Configuration rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    }

    let start_time = Instant::now();
    let registry = state.registry();
    let results = calculate_batch(&request.records, request.configuration.as_ref(), registry);
    let summary = summarize_batch(&results);

    info!(
        correlation_id = %correlation_id,
        records = summary.records,
        invalid_records = summary.invalid_records,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse {
            batch_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            registry_version: registry.version_label(),
            results,
            summary,
        },
    )
}

/// Handler for POST /reconcile.
///
/// Each record's salary and allowances are read as annual totals and
/// its tax paid as the tax actually withheld across the year.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconciliation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let registry = state.registry();
    let results = reconcile_year_end(&request.records, registry);
    let summary = summarize_reconciliation(&results);

    info!(
        correlation_id = %correlation_id,
        records = results.len(),
        underpaid = summary.underpaid,
        overpaid = summary.overpaid,
        "Reconciliation completed successfully"
    );

    json_response(
        StatusCode::OK,
        ReconciliationResponse {
            batch_id: correlation_id,
            registry_version: registry.version_label(),
            results,
            summary,
        },
    )
}

/// Handler for POST /validate.
async fn validate_handler(payload: Result<Json<RecordsRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let results: Vec<ValidationResult> = request.records.iter().map(validate_record).collect();
    let valid_records = results.iter().filter(|r| r.valid).count();

    info!(
        correlation_id = %correlation_id,
        records = results.len(),
        valid_records,
        "Validation completed"
    );

    json_response(
        StatusCode::OK,
        ValidationResponse {
            valid_records,
            results,
        },
    )
}
