//! Organization-level tax configuration overrides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Organization-level statutory settings.
///
/// Every field is optional. An unset field falls back to the registry default
/// for that currency or category, so `TaxConfiguration::default()` means "use
/// the statutory registry as-is".
///
/// # Example
///
/// ```
/// use paye_engine::models::TaxConfiguration;
///
/// let config = TaxConfiguration {
///     pension_enabled: Some(false),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfiguration {
    /// Whether the pension contribution is deducted.
    pub pension_enabled: Option<bool>,
    /// Pension contribution rate.
    pub pension_rate: Option<Decimal>,
    /// Monthly insurable earnings ceiling for USD earners.
    pub pension_ceiling_usd: Option<Decimal>,
    /// Monthly insurable earnings ceiling for ZiG earners.
    pub pension_ceiling_zig: Option<Decimal>,
    /// Whether the employment-council levy is deducted.
    pub council_levy_enabled: Option<bool>,
    /// Employment-council levy rate.
    pub council_levy_rate: Option<Decimal>,
    /// Whether the employer standards-fund cost is computed.
    pub standards_fund_enabled: Option<bool>,
    /// Standards-fund rate.
    pub standards_fund_rate: Option<Decimal>,
    /// Flat withholding rate for casual workers.
    pub casual_flat_rate: Option<Decimal>,
    /// Month of the tax year being processed (1-12). Enables the cumulative method.
    pub processing_month: Option<u32>,
}

impl TaxConfiguration {
    /// Checks that every supplied value is within its statutory range.
    ///
    /// Rates must lie in `[0, 1]`, ceilings must be non-negative and the
    /// processing month must be within `1..=12`. The first violation found is
    /// returned.
    pub fn validate(&self) -> EngineResult<()> {
        let rates = [
            ("pension_rate", self.pension_rate),
            ("council_levy_rate", self.council_levy_rate),
            ("standards_fund_rate", self.standards_fund_rate),
            ("casual_flat_rate", self.casual_flat_rate),
        ];
        for (field, rate) in rates {
            if let Some(rate) = rate {
                if rate < Decimal::ZERO || rate > Decimal::ONE {
                    return Err(EngineError::InvalidConfiguration {
                        field: field.to_string(),
                        message: format!("rate {} must be between 0 and 1", rate),
                    });
                }
            }
        }

        let ceilings = [
            ("pension_ceiling_usd", self.pension_ceiling_usd),
            ("pension_ceiling_zig", self.pension_ceiling_zig),
        ];
        for (field, ceiling) in ceilings {
            if let Some(ceiling) = ceiling {
                if ceiling < Decimal::ZERO {
                    return Err(EngineError::InvalidConfiguration {
                        field: field.to_string(),
                        message: format!("ceiling {} cannot be negative", ceiling),
                    });
                }
            }
        }

        if let Some(month) = self.processing_month {
            if !(1..=12).contains(&month) {
                return Err(EngineError::InvalidConfiguration {
                    field: "processing_month".to_string(),
                    message: format!("month {} must be between 1 and 12", month),
                });
            }
        }

        Ok(())
    }
}
