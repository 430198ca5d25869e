//! Batch processing of payroll records.
//!
//! Each record is validated and calculated independently. Invalid records are
//! still calculated and flagged, so a caller can show every row at once.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::TaxTableRegistry;
use crate::models::{PayrollInputRecord, TaxConfiguration, TaxResult, ValidationResult};

use super::{calculate_tax, validate_record};

/// One processed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// Validation outcome for the input record.
    pub validation: ValidationResult,
    /// The deduction breakdown.
    pub result: TaxResult,
}

/// Totals for one currency across a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTotals {
    /// Number of records paid in this currency.
    pub records: usize,
    /// Sum of gross income.
    pub gross_income: Decimal,
    /// Sum of pension contributions.
    pub pension_contribution: Decimal,
    /// Sum of council levies.
    pub council_levy: Decimal,
    /// Sum of income tax.
    pub income_tax: Decimal,
    /// Sum of solidarity levies.
    pub solidarity_levy: Decimal,
    /// Sum of total employee deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
    /// Sum of employer standards-fund costs.
    pub employer_standards_fund_cost: Decimal,
}

/// Summary of a processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of records processed.
    pub records: usize,
    /// Number of records that failed validation.
    pub invalid_records: usize,
    /// Totals keyed by currency code.
    pub totals: BTreeMap<String, CurrencyTotals>,
}

/// Validates and calculates every record, preserving input order.
pub fn calculate_batch(
    records: &[PayrollInputRecord],
    config: Option<&TaxConfiguration>,
    registry: &TaxTableRegistry,
) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = records
        .iter()
        .map(|record| BatchEntry {
            employee_id: record.employee_id.clone(),
            name: record.name.clone(),
            validation: validate_record(record),
            result: calculate_tax(record, config, registry),
        })
        .collect();

    info!(
        records = entries.len(),
        invalid = entries.iter().filter(|e| !e.validation.valid).count(),
        "Batch calculated"
    );

    entries
}

/// Aggregates per-currency totals over a batch.
pub fn summarize_batch(entries: &[BatchEntry]) -> BatchSummary {
    let mut summary = BatchSummary {
        records: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        if !entry.validation.valid {
            summary.invalid_records += 1;
        }
        let r = &entry.result;
        let totals = summary
            .totals
            .entry(r.currency.code().to_string())
            .or_default();
        totals.records += 1;
        totals.gross_income += r.gross_income;
        totals.pension_contribution += r.pension_contribution;
        totals.council_levy += r.council_levy;
        totals.income_tax += r.income_tax;
        totals.solidarity_levy += r.solidarity_levy;
        totals.total_deductions += r.total_deductions;
        totals.net_pay += r.net_pay;
        totals.employer_standards_fund_cost += r.employer_standards_fund_cost;
    }

    summary
}
