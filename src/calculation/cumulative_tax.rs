//! Cumulative (final deduction system) tax.
//!
//! The year-to-date taxable base of prior periods is not supplied, so it is
//! estimated from year-to-date gross using this period's deduction ratio. This
//! is an approximation, not the exact statutory FDS formula.

use rust_decimal::Decimal;

use crate::config::{MONTHS_PER_YEAR, TaxTable};

use super::calculate_progressive_tax;

/// Inputs to the cumulative calculation for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CumulativeInputs {
    /// This period's gross income.
    pub gross_income: Decimal,
    /// This period's taxable income.
    pub taxable_income: Decimal,
    /// Gross paid in prior periods of the tax year.
    pub year_to_date_gross: Decimal,
    /// Tax withheld in prior periods of the tax year.
    pub year_to_date_tax_paid: Decimal,
    /// Month of the tax year being processed. Must be positive.
    pub processing_month: u32,
}

/// Every intermediate figure of a cumulative calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeTaxResult {
    /// Taxable share of gross for this period.
    pub deduction_ratio: Decimal,
    /// Estimated taxable income for the year so far, this period included.
    pub cumulative_taxable: Decimal,
    /// Cumulative taxable projected over a full year.
    pub projected_annual_taxable: Decimal,
    /// Tax on the projected annual taxable.
    pub annual_tax: Decimal,
    /// Share of annual tax attributable to the months processed.
    pub liability_to_date: Decimal,
    /// Tax to withhold this period. Negative means a refund.
    pub period_tax: Decimal,
}

/// Computes this period's tax under the cumulative method.
///
/// `annual_table` must be the annualized table for the record's currency.
/// The result is not floored: over-withholding in earlier months produces a
/// negative `period_tax`. The deduction ratio is kept within `[0, 1]`.
pub fn calculate_cumulative_tax(
    inputs: &CumulativeInputs,
    annual_table: &TaxTable,
) -> CumulativeTaxResult {
    let months = Decimal::from(MONTHS_PER_YEAR);
    let month = Decimal::from(inputs.processing_month.max(1));

    // Zero gross, or a quotient too large to represent, reads as fully taxable.
    let deduction_ratio = inputs
        .taxable_income
        .checked_div(inputs.gross_income)
        .map_or(Decimal::ONE, |ratio| ratio.clamp(Decimal::ZERO, Decimal::ONE));

    let cumulative_taxable = inputs.year_to_date_gross * deduction_ratio + inputs.taxable_income;
    let projected_annual_taxable = cumulative_taxable / month * months;
    let annual_tax = calculate_progressive_tax(projected_annual_taxable, annual_table);
    let liability_to_date = annual_tax / months * month;
    let period_tax = liability_to_date - inputs.year_to_date_tax_paid;

    CumulativeTaxResult {
        deduction_ratio,
        cumulative_taxable,
        projected_annual_taxable,
        annual_tax,
        liability_to_date,
        period_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::zimra_2025_monthly_table;
    use crate::models::Currency;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn annual_usd() -> TaxTable {
        zimra_2025_monthly_table(Currency::Usd).annualized()
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        let diff = (actual - expected).abs();
        assert!(
            diff < dec("0.000001"),
            "expected {}, got {} (diff {})",
            expected,
            actual,
            diff
        );
    }

    #[test]
    fn test_steady_earner_matches_standard_method() {
        // Month 3 of a steady $500 earner who paid the standard amount in months 1-2.
        let inputs = CumulativeInputs {
            gross_income: dec("500"),
            taxable_income: dec("477.5"),
            year_to_date_gross: dec("1000"),
            year_to_date_tax_paid: dec("168.75"),
            processing_month: 3,
        };

        let result = calculate_cumulative_tax(&inputs, &annual_usd());

        assert_eq!(result.deduction_ratio, dec("0.955"));
        assert_close(result.cumulative_taxable, dec("1432.5"));
        assert_close(result.projected_annual_taxable, dec("5730"));
        assert_close(result.annual_tax, dec("1012.5"));
        assert_close(result.liability_to_date, dec("253.125"));
        assert_close(result.period_tax, dec("84.375"));
    }

    #[test]
    fn test_overpayment_produces_refund() {
        let inputs = CumulativeInputs {
            gross_income: dec("500"),
            taxable_income: dec("477.5"),
            year_to_date_gross: dec("1000"),
            year_to_date_tax_paid: dec("400"),
            processing_month: 3,
        };

        let result = calculate_cumulative_tax(&inputs, &annual_usd());
        assert!(result.period_tax < Decimal::ZERO);
        assert_close(result.period_tax, dec("-146.875"));
    }

    #[test]
    fn test_zero_gross_uses_ratio_of_one() {
        let inputs = CumulativeInputs {
            gross_income: Decimal::ZERO,
            taxable_income: Decimal::ZERO,
            year_to_date_gross: dec("2400"),
            year_to_date_tax_paid: Decimal::ZERO,
            processing_month: 6,
        };

        let result = calculate_cumulative_tax(&inputs, &annual_usd());
        assert_eq!(result.deduction_ratio, Decimal::ONE);
        assert_eq!(result.cumulative_taxable, dec("2400"));
        // 2400 / 6 × 12 = 4800 annual: 2400 × 0.20 + 1200 × 0.25 = 780
        assert_close(result.annual_tax, dec("780"));
        assert_close(result.period_tax, dec("390"));
    }

    #[test]
    fn test_first_month_without_history() {
        let inputs = CumulativeInputs {
            gross_income: dec("500"),
            taxable_income: dec("477.5"),
            year_to_date_gross: Decimal::ZERO,
            year_to_date_tax_paid: Decimal::ZERO,
            processing_month: 1,
        };

        let result = calculate_cumulative_tax(&inputs, &annual_usd());
        assert_close(result.projected_annual_taxable, dec("5730"));
        assert_close(result.period_tax, dec("84.375"));
    }

    #[test]
    fn test_deduction_ratio_is_bounded() {
        let mut inputs = CumulativeInputs {
            gross_income: Decimal::new(1, 28),
            taxable_income: dec("1000000000000000"),
            year_to_date_gross: dec("1000000000000000"),
            year_to_date_tax_paid: Decimal::ZERO,
            processing_month: 1,
        };

        let result = calculate_cumulative_tax(&inputs, &annual_usd());
        assert_eq!(result.deduction_ratio, Decimal::ONE);

        inputs.gross_income = dec("500");
        inputs.taxable_income = dec("600");
        let result = calculate_cumulative_tax(&inputs, &annual_usd());
        assert_eq!(result.deduction_ratio, Decimal::ONE);
    }
}
