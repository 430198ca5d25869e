//! Year-end reconciliation.
//!
//! Records passed here carry annual figures: `basic_salary` and `allowances`
//! are full-year amounts and `year_to_date_tax_paid` is the tax paid across
//! the year. Council levy is not deducted on this path, unlike the monthly
//! calculator.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{MONTHS_PER_YEAR, TaxTableRegistry};
use crate::models::{PayrollInputRecord, ReconciliationResult, ReconciliationStatus};

use super::calculate_progressive_tax;

/// Recomputes one employee's annual liability and compares it with tax paid.
pub fn reconcile_record(
    record: &PayrollInputRecord,
    registry: &TaxTableRegistry,
) -> ReconciliationResult {
    let currency = record.tax_currency();
    let rates = registry.rates();

    let annual_gross = record.gross_income();
    let annual_ceiling = registry.pension_ceiling(currency) * Decimal::from(MONTHS_PER_YEAR);
    let annual_pension = annual_gross.min(annual_ceiling) * rates.pension.rate;
    let annual_taxable_income = annual_gross - annual_pension;

    let recomputed_annual_tax =
        calculate_progressive_tax(annual_taxable_income, registry.annual_table(currency));
    let recomputed_solidarity_levy = recomputed_annual_tax * rates.solidarity_levy_rate;

    let tax_paid_year_to_date = record.tax_paid_or_zero();
    let variance = recomputed_annual_tax + recomputed_solidarity_levy - tax_paid_year_to_date;
    let status = ReconciliationStatus::from_variance(variance);

    if status != ReconciliationStatus::Balanced {
        warn!(
            employee_id = %record.employee_id,
            currency = %currency,
            variance = %variance,
            status = ?status,
            "Year-end variance outside tolerance"
        );
    }

    ReconciliationResult {
        employee_id: record.employee_id.clone(),
        name: record.name.clone(),
        currency,
        annual_gross,
        annual_taxable_income,
        recomputed_annual_tax,
        recomputed_solidarity_levy,
        tax_paid_year_to_date,
        variance,
        status,
    }
}

/// Reconciles every record, preserving input order.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::reconcile_year_end;
/// use paye_engine::config::TaxTableRegistry;
/// use paye_engine::models::{Currency, PayrollInputRecord, ReconciliationStatus};
/// use rust_decimal::Decimal;
///
/// let registry = TaxTableRegistry::zimra_2025();
/// let mut record = PayrollInputRecord::new("REC01", "Steady Earner", Decimal::from(6000), Currency::Usd);
/// record.year_to_date_tax_paid = Some(Decimal::from(800));
///
/// let results = reconcile_year_end(&[record], &registry);
/// assert_eq!(results[0].status, ReconciliationStatus::Underpaid);
/// ```
pub fn reconcile_year_end(
    records: &[PayrollInputRecord],
    registry: &TaxTableRegistry,
) -> Vec<ReconciliationResult> {
    let results: Vec<ReconciliationResult> = records
        .iter()
        .map(|record| reconcile_record(record, registry))
        .collect();

    let summary = summarize_reconciliation(&results);
    info!(
        records = results.len(),
        balanced = summary.balanced,
        underpaid = summary.underpaid,
        overpaid = summary.overpaid,
        "Year-end reconciliation completed"
    );

    results
}

/// Counts and variance totals across a reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Employees within tolerance.
    pub balanced: usize,
    /// Employees owing tax.
    pub underpaid: usize,
    /// Employees due a refund.
    pub overpaid: usize,
    /// Net variance per currency.
    pub net_variance: BTreeMap<String, Decimal>,
}

/// Summarizes reconciliation results.
pub fn summarize_reconciliation(results: &[ReconciliationResult]) -> ReconciliationSummary {
    let mut summary = ReconciliationSummary::default();
    for result in results {
        match result.status {
            ReconciliationStatus::Balanced => summary.balanced += 1,
            ReconciliationStatus::Underpaid => summary.underpaid += 1,
            ReconciliationStatus::Overpaid => summary.overpaid += 1,
        }
        *summary
            .net_variance
            .entry(result.currency.code().to_string())
            .or_insert(Decimal::ZERO) += result.variance;
    }
    summary
}
