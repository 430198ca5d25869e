//! Calculation logic for the PAYE engine.
//!
//! This module contains the progressive bracket function, method selection,
//! resolution of configuration overrides, the per-record deduction pipeline
//! with its cumulative (FDS) branch, year-end reconciliation, record
//! validation and batch helpers. Every function here is pure.

mod batch;
mod calculator;
mod cumulative_tax;
mod effective_rates;
mod method_selection;
mod progressive_tax;
mod reconciler;
mod validator;

pub use batch::{BatchEntry, BatchSummary, CurrencyTotals, calculate_batch, summarize_batch};
pub use calculator::calculate_tax;
pub use cumulative_tax::{CumulativeInputs, CumulativeTaxResult, calculate_cumulative_tax};
pub use effective_rates::EffectiveRates;
pub use method_selection::select_method;
pub use progressive_tax::calculate_progressive_tax;
pub use reconciler::{
    ReconciliationSummary, reconcile_record, reconcile_year_end, summarize_reconciliation,
};
pub use validator::validate_record;
