//! Request types for the PAYE engine API.

use serde::{Deserialize, Serialize};

use crate::models::{PayrollInputRecord, TaxConfiguration};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Organization overrides. Omitted means registry defaults throughout.
    #[serde(default)]
    pub configuration: Option<TaxConfiguration>,
    /// Records for the period being processed.
    pub records: Vec<PayrollInputRecord>,
}

/// Request body for the `/reconcile` and `/validate` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsRequest {
    /// Records to process. For `/reconcile` these carry annual figures.
    pub records: Vec<PayrollInputRecord>,
}
