//! Core data models for the PAYE engine.
//!
//! This module contains the input record, configuration override and output
//! types shared by the calculator, reconciler and validator.

mod payroll_record;
mod reconciliation;
mod tax_configuration;
mod tax_result;
mod validation;

pub use payroll_record::{Currency, MAX_AMOUNT, PayrollInputRecord, RecordCurrency};
pub use reconciliation::{ReconciliationResult, ReconciliationStatus};
pub use tax_configuration::TaxConfiguration;
pub use tax_result::{TaxMethod, TaxResult};
pub use validation::ValidationResult;
