//! Per-record calculation output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;

/// How income tax was computed for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMethod {
    /// Flat-rate withholding for casual workers.
    Flat,
    /// Progressive monthly brackets.
    Standard,
    /// Year-to-date annualized brackets (final deduction system).
    Cumulative,
}

/// The full deduction breakdown for one payroll record.
///
/// `total_deductions` is always the sum of pension, council levy, income tax
/// and solidarity levy, and `net_pay` is gross minus that total. The
/// standards-fund cost is borne by the employer and is not part of either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Basic salary plus allowances.
    pub gross_income: Decimal,
    /// Employee pension contribution.
    pub pension_contribution: Decimal,
    /// Employment-council levy.
    pub council_levy: Decimal,
    /// Income subject to PAYE, never negative.
    pub taxable_income: Decimal,
    /// PAYE for the period. Negative under the cumulative method means a refund.
    pub income_tax: Decimal,
    /// Solidarity levy on income tax.
    pub solidarity_levy: Decimal,
    /// Sum of all employee deductions.
    pub total_deductions: Decimal,
    /// Gross income less total deductions.
    pub net_pay: Decimal,
    /// Employer-side standards-fund cost.
    pub employer_standards_fund_cost: Decimal,
    /// The currency of every amount above.
    pub currency: Currency,
    /// The income tax method applied.
    pub method_used: TaxMethod,
}
