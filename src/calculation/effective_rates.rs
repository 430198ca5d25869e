//! Resolution of configuration overrides against registry defaults.

use rust_decimal::Decimal;

use crate::config::TaxTableRegistry;
use crate::models::{Currency, MAX_AMOUNT, TaxConfiguration, TaxMethod};

fn unit_rate(rate: Decimal) -> Decimal {
    rate.clamp(Decimal::ZERO, Decimal::ONE)
}

/// The rates that actually apply to one record.
///
/// Every field is either the caller's override or the registry default. A
/// disabled charge carries `None`. Rates are clamped to `[0, 1]` and ceilings
/// to `[0, MAX_AMOUNT]`, so an unchecked override cannot push a calculation
/// out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRates {
    /// Pension `(rate, monthly ceiling)`, or `None` when not deducted.
    pub pension: Option<(Decimal, Decimal)>,
    /// Council levy rate, or `None` when not deducted.
    pub council_levy: Option<Decimal>,
    /// Standards-fund rate, or `None` when not computed.
    pub standards_fund: Option<Decimal>,
    /// Casual flat withholding rate.
    pub casual_flat_rate: Decimal,
    /// Solidarity levy rate. Always the registry value.
    pub solidarity_levy_rate: Decimal,
}

impl EffectiveRates {
    /// Resolves the rates for a record paid in `currency` under `method`.
    ///
    /// Casual workers on the flat method are exempt from pension and council
    /// levy whatever the configuration says.
    pub fn resolve(
        config: &TaxConfiguration,
        registry: &TaxTableRegistry,
        currency: Currency,
        method: TaxMethod,
    ) -> Self {
        let defaults = registry.rates();
        let casual = method == TaxMethod::Flat;

        let pension_enabled = !casual && config.pension_enabled.unwrap_or(true);
        let pension = pension_enabled.then(|| {
            let rate = config.pension_rate.unwrap_or(defaults.pension.rate);
            let ceiling = match currency {
                Currency::Usd => config.pension_ceiling_usd,
                Currency::Zig => config.pension_ceiling_zig,
            }
            .unwrap_or_else(|| registry.pension_ceiling(currency));
            (unit_rate(rate), ceiling.clamp(Decimal::ZERO, MAX_AMOUNT))
        });

        let council_enabled =
            !casual && config.council_levy_enabled.unwrap_or(defaults.council_levy.enabled);
        let council_levy = council_enabled
            .then(|| unit_rate(config.council_levy_rate.unwrap_or(defaults.council_levy.rate)));

        let standards_fund = config
            .standards_fund_enabled
            .unwrap_or(defaults.standards_fund.enabled)
            .then(|| {
                unit_rate(
                    config
                        .standards_fund_rate
                        .unwrap_or(defaults.standards_fund.rate),
                )
            });

        Self {
            pension,
            council_levy,
            standards_fund,
            casual_flat_rate: unit_rate(
                config
                    .casual_flat_rate
                    .unwrap_or(defaults.casual_flat_rate),
            ),
            solidarity_levy_rate: defaults.solidarity_levy_rate,
        }
    }
}
