//! Per-record deduction pipeline.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxTableRegistry;
use crate::models::{PayrollInputRecord, TaxConfiguration, TaxMethod, TaxResult};

use super::{
    CumulativeInputs, EffectiveRates, calculate_cumulative_tax, calculate_progressive_tax,
    select_method,
};

/// Computes the full deduction breakdown for one payroll record.
///
/// The record is assumed to have passed validation; the calculator never
/// fails. A `None` configuration means every setting takes its registry
/// default, and any unset field of a supplied configuration does the same.
///
/// Steps:
/// 1. Gross is basic salary plus allowances.
/// 2. The method is selected (flat for casuals, cumulative when year-to-date
///    gross and a processing month are present, otherwise standard).
/// 3. Pension is `min(gross, ceiling) × rate`; council levy is `gross × rate`.
///    Both are skipped for casuals.
/// 4. Taxable income is gross less pension, council levy and exempt
///    allowances, floored at zero.
/// 5. Income tax is computed by the selected method and the solidarity levy
///    is applied on top. Under the cumulative method both may be negative.
/// 6. The standards-fund cost is reported but not deducted.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_tax;
/// use paye_engine::config::TaxTableRegistry;
/// use paye_engine::models::{Currency, PayrollInputRecord, TaxMethod};
/// use rust_decimal::Decimal;
///
/// let registry = TaxTableRegistry::zimra_2025();
/// let record = PayrollInputRecord::new("emp_001", "Tendai Moyo", Decimal::from(500), Currency::Usd);
///
/// let result = calculate_tax(&record, None, &registry);
/// assert_eq!(result.pension_contribution, Decimal::new(2250, 2));
/// assert_eq!(result.income_tax, Decimal::new(84375, 3));
/// assert_eq!(result.method_used, TaxMethod::Standard);
/// ```
pub fn calculate_tax(
    record: &PayrollInputRecord,
    config: Option<&TaxConfiguration>,
    registry: &TaxTableRegistry,
) -> TaxResult {
    let default_config = TaxConfiguration::default();
    let config = config.unwrap_or(&default_config);
    let currency = record.tax_currency();

    let gross_income = record.gross_income();
    let method = select_method(record, config);
    let rates = EffectiveRates::resolve(config, registry, currency, method);

    let pension_contribution = rates
        .pension
        .map(|(rate, ceiling)| gross_income.min(ceiling) * rate)
        .unwrap_or(Decimal::ZERO);

    let council_levy = rates
        .council_levy
        .map(|rate| gross_income * rate)
        .unwrap_or(Decimal::ZERO);

    let taxable_income = (gross_income
        - pension_contribution
        - council_levy
        - record.exempt_allowances_or_zero())
    .max(Decimal::ZERO);

    let income_tax = match method {
        TaxMethod::Flat => taxable_income * rates.casual_flat_rate,
        TaxMethod::Standard => {
            calculate_progressive_tax(taxable_income, registry.monthly_table(currency))
        }
        TaxMethod::Cumulative => {
            let inputs = CumulativeInputs {
                gross_income,
                taxable_income,
                year_to_date_gross: record.year_to_date_gross_or_zero(),
                year_to_date_tax_paid: record.tax_paid_or_zero(),
                processing_month: config.processing_month.unwrap_or(1),
            };
            let cumulative = calculate_cumulative_tax(&inputs, registry.annual_table(currency));
            debug!(
                employee_id = %record.employee_id,
                projected_annual_taxable = %cumulative.projected_annual_taxable,
                annual_tax = %cumulative.annual_tax,
                liability_to_date = %cumulative.liability_to_date,
                "Cumulative tax computed"
            );
            cumulative.period_tax
        }
    };

    let solidarity_levy = income_tax * rates.solidarity_levy_rate;
    let total_deductions = pension_contribution + council_levy + income_tax + solidarity_levy;
    let net_pay = gross_income - total_deductions;

    let employer_standards_fund_cost = rates
        .standards_fund
        .map(|rate| gross_income * rate)
        .unwrap_or(Decimal::ZERO);

    debug!(
        employee_id = %record.employee_id,
        currency = %currency,
        method = ?method,
        gross = %gross_income,
        income_tax = %income_tax,
        net_pay = %net_pay,
        "Tax calculated"
    );

    TaxResult {
        gross_income,
        pension_contribution,
        council_levy,
        taxable_income,
        income_tax,
        solidarity_levy,
        total_deductions,
        net_pay,
        employer_standards_fund_cost,
        currency,
        method_used: method,
    }
}
