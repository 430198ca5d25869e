//! HTTP API module for the PAYE engine.
//!
//! This module provides the REST endpoints for batch PAYE calculation,
//! year-end reconciliation and record validation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RecordsRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, ReconciliationResponse, ValidationResponse,
};
pub use state::AppState;
