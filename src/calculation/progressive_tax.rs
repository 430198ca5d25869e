//! Progressive bracket tax.

use rust_decimal::Decimal;

use crate::config::TaxTable;

/// Computes progressive tax on `income` over `table`.
///
/// Each bracket whose lower bound is below the income contributes
/// `rate × (min(income, upper) − lower)`. Iteration stops at the first bracket
/// starting at or above the income. Zero or negative income yields zero.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_progressive_tax;
/// use paye_engine::config::zimra_2025_monthly_table;
/// use paye_engine::models::Currency;
/// use rust_decimal::Decimal;
///
/// let table = zimra_2025_monthly_table(Currency::Usd);
/// // 200 × 20% + 177.50 × 25%
/// let tax = calculate_progressive_tax(Decimal::new(47750, 2), &table);
/// assert_eq!(tax, Decimal::new(84375, 3));
/// ```
pub fn calculate_progressive_tax(income: Decimal, table: &TaxTable) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    for bracket in &table.brackets {
        if income <= bracket.lower_bound {
            break;
        }
        let top = match bracket.upper_bound {
            Some(upper) => income.min(upper),
            None => income,
        };
        tax += (top - bracket.lower_bound) * bracket.rate;
    }
    tax
}
