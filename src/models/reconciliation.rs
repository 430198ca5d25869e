//! Year-end reconciliation output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// Outcome of comparing recomputed liability with tax already paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReconciliationStatus {
    /// Variance within one currency unit of zero.
    Balanced,
    /// The employee owes tax.
    Underpaid,
    /// The employee is due a refund.
    Overpaid,
}

impl ReconciliationStatus {
    /// Absolute tolerance band around zero, in currency units.
    pub const TOLERANCE: Decimal = Decimal::ONE;

    /// Classifies a variance (recomputed liability minus tax paid).
    ///
    /// # Examples
    ///
    /// ```
    /// use paye_engine::models::ReconciliationStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(ReconciliationStatus::from_variance(Decimal::new(5, 1)), ReconciliationStatus::Balanced);
    /// assert_eq!(ReconciliationStatus::from_variance(Decimal::new(2, 0)), ReconciliationStatus::Underpaid);
    /// assert_eq!(ReconciliationStatus::from_variance(Decimal::new(-2, 0)), ReconciliationStatus::Overpaid);
    /// ```
    pub fn from_variance(variance: Decimal) -> Self {
        if variance > Self::TOLERANCE {
            ReconciliationStatus::Underpaid
        } else if variance < -Self::TOLERANCE {
            ReconciliationStatus::Overpaid
        } else {
            ReconciliationStatus::Balanced
        }
    }
}

/// One employee's year-end reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// The currency of every amount below.
    pub currency: Currency,
    /// Full-year gross income.
    pub annual_gross: Decimal,
    /// Annual gross less annual pension.
    pub annual_taxable_income: Decimal,
    /// Income tax recomputed over the annualized table.
    pub recomputed_annual_tax: Decimal,
    /// Solidarity levy on the recomputed tax.
    pub recomputed_solidarity_levy: Decimal,
    /// Total tax reported as paid during the year.
    pub tax_paid_year_to_date: Decimal,
    /// Recomputed liability minus tax paid. Positive means tax is owed.
    pub variance: Decimal,
    /// Classification of the variance.
    pub status: ReconciliationStatus,
}
