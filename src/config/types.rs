//! Statutory registry types.
//!
//! This module contains the bracket tables and statutory rates that drive
//! every calculation. They are deserialized from YAML registry files or built
//! in code by [`TaxTableRegistry::zimra_2025`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Currency, MAX_AMOUNT};

/// Number of monthly periods in a tax year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// One band of a progressive tax table.
///
/// The band covers `(lower_bound, upper_bound]` from the perspective of the
/// income it taxes. The last band of a table has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income at which this band starts.
    pub lower_bound: Decimal,
    /// Income at which this band ends, or `None` for the top band.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to income inside the band.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket.
    pub fn new(lower_bound: Decimal, upper_bound: Option<Decimal>, rate: Decimal) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
        }
    }
}

/// An ordered, non-overlapping sequence of brackets covering `[0, inf)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    /// Brackets in ascending order.
    pub brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Creates a table from brackets. Call [`TaxTable::validate`] before use on
    /// untrusted data.
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    /// Returns the table with every bound multiplied by twelve. Rates are unchanged.
    pub fn annualized(&self) -> Self {
        let factor = Decimal::from(MONTHS_PER_YEAR);
        Self {
            brackets: self
                .brackets
                .iter()
                .map(|b| TaxBracket {
                    lower_bound: b.lower_bound * factor,
                    upper_bound: b.upper_bound.map(|u| u * factor),
                    rate: b.rate,
                })
                .collect(),
        }
    }

    /// Checks the table starts at zero, is contiguous and ascending, ends with
    /// an unbounded bracket, and has every rate within `[0, 1]`. Bounds may
    /// not exceed [`MAX_AMOUNT`].
    pub fn validate(&self, currency: Currency) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidTaxTable { currency, message };

        let first = self
            .brackets
            .first()
            .ok_or_else(|| invalid("table is empty".to_string()))?;
        if !first.lower_bound.is_zero() {
            return Err(invalid(format!(
                "first bracket starts at {} instead of 0",
                first.lower_bound
            )));
        }

        let last_index = self.brackets.len() - 1;
        for (i, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "bracket {} has rate {} outside [0, 1]",
                    i, bracket.rate
                )));
            }

            match (bracket.upper_bound, i == last_index) {
                (None, true) => {}
                (Some(_), true) => {
                    return Err(invalid("last bracket must be unbounded".to_string()));
                }
                (None, false) => {
                    return Err(invalid(format!("bracket {} is unbounded but not last", i)));
                }
                (Some(upper), false) => {
                    if upper > MAX_AMOUNT {
                        return Err(invalid(format!(
                            "bracket {} upper bound {} exceeds {}",
                            i, upper, MAX_AMOUNT
                        )));
                    }
                    if upper <= bracket.lower_bound {
                        return Err(invalid(format!(
                            "bracket {} upper bound {} is not above lower bound {}",
                            i, upper, bracket.lower_bound
                        )));
                    }
                    let next = &self.brackets[i + 1];
                    if next.lower_bound != upper {
                        return Err(invalid(format!(
                            "bracket {} ends at {} but bracket {} starts at {}",
                            i,
                            upper,
                            i + 1,
                            next.lower_bound
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

/// A pair of values, one per supported currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerCurrency<T> {
    /// Value for USD earners.
    pub usd: T,
    /// Value for ZiG earners.
    pub zig: T,
}

impl<T> PerCurrency<T> {
    /// Returns the value for `currency`.
    pub fn get(&self, currency: Currency) -> &T {
        match currency {
            Currency::Usd => &self.usd,
            Currency::Zig => &self.zig,
        }
    }
}

/// Identifies the statutory period a registry was published for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryMetadata {
    /// Revenue authority the tables come from.
    pub jurisdiction: String,
    /// Tax year label (e.g., "2025").
    pub tax_year: String,
    /// First day the tables apply.
    pub effective_date: NaiveDate,
    /// Where the figures were published.
    pub source: String,
}

/// Pension scheme settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionSettings {
    /// Contribution rate on insurable earnings.
    pub rate: Decimal,
    /// Monthly insurable earnings ceiling per currency.
    pub ceiling: PerCurrency<Decimal>,
}

/// An optional percentage-of-gross charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevySettings {
    /// Whether the charge applies when not overridden.
    pub enabled: bool,
    /// Rate on gross income.
    pub rate: Decimal,
}

/// All statutory rates other than the bracket tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Pension contribution.
    pub pension: PensionSettings,
    /// Employment-council levy.
    pub council_levy: LevySettings,
    /// Employer standards-fund cost.
    pub standards_fund: LevySettings,
    /// Solidarity levy as a fraction of income tax.
    pub solidarity_levy_rate: Decimal,
    /// Flat withholding rate for casual workers.
    pub casual_flat_rate: Decimal,
}

impl StatutoryRates {
    /// Checks every rate is within `[0, 1]` and both pension ceilings are
    /// within `[0, MAX_AMOUNT]`.
    pub fn validate(&self) -> EngineResult<()> {
        let rates = [
            ("pension.rate", self.pension.rate),
            ("council_levy.rate", self.council_levy.rate),
            ("standards_fund.rate", self.standards_fund.rate),
            ("solidarity_levy_rate", self.solidarity_levy_rate),
            ("casual_flat_rate", self.casual_flat_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidConfiguration {
                    field: field.to_string(),
                    message: format!("rate {} must be between 0 and 1", rate),
                });
            }
        }

        let ceilings = [
            ("pension.ceiling.usd", self.pension.ceiling.usd),
            ("pension.ceiling.zig", self.pension.ceiling.zig),
        ];
        for (field, ceiling) in ceilings {
            if ceiling < Decimal::ZERO {
                return Err(EngineError::InvalidConfiguration {
                    field: field.to_string(),
                    message: format!("ceiling {} cannot be negative", ceiling),
                });
            }
            if ceiling > MAX_AMOUNT {
                return Err(EngineError::InvalidConfiguration {
                    field: field.to_string(),
                    message: format!("ceiling {} cannot exceed {}", ceiling, MAX_AMOUNT),
                });
            }
        }

        Ok(())
    }
}

/// Contents of a `registry.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryDocument {
    /// Statutory period metadata.
    pub metadata: RegistryMetadata,
    /// Statutory rates.
    pub rates: StatutoryRates,
}

/// Contents of a `brackets/<currency>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketDocument {
    /// Monthly brackets in ascending order.
    pub brackets: Vec<TaxBracket>,
}

/// The complete statutory registry for one tax period.
///
/// Constructed once at startup and passed by reference into every
/// calculation. The annualized tables are derived at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTableRegistry {
    metadata: RegistryMetadata,
    rates: StatutoryRates,
    monthly: PerCurrency<TaxTable>,
    annual: PerCurrency<TaxTable>,
}

impl TaxTableRegistry {
    /// Creates a registry, validating the statutory rates and both monthly
    /// tables.
    pub fn new(
        metadata: RegistryMetadata,
        rates: StatutoryRates,
        usd: TaxTable,
        zig: TaxTable,
    ) -> EngineResult<Self> {
        rates.validate()?;
        usd.validate(Currency::Usd)?;
        zig.validate(Currency::Zig)?;
        Ok(Self::assemble(metadata, rates, PerCurrency { usd, zig }))
    }

    pub(crate) fn assemble(
        metadata: RegistryMetadata,
        rates: StatutoryRates,
        monthly: PerCurrency<TaxTable>,
    ) -> Self {
        let annual = PerCurrency {
            usd: monthly.usd.annualized(),
            zig: monthly.zig.annualized(),
        };
        Self {
            metadata,
            rates,
            monthly,
            annual,
        }
    }

    /// Returns the registry metadata.
    pub fn metadata(&self) -> &RegistryMetadata {
        &self.metadata
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Returns the monthly table for `currency`.
    pub fn monthly_table(&self, currency: Currency) -> &TaxTable {
        self.monthly.get(currency)
    }

    /// Returns the annualized table for `currency`.
    pub fn annual_table(&self, currency: Currency) -> &TaxTable {
        self.annual.get(currency)
    }

    /// Returns the monthly pension ceiling for `currency`.
    pub fn pension_ceiling(&self, currency: Currency) -> Decimal {
        *self.rates.pension.ceiling.get(currency)
    }

    /// A short label identifying the registry version, e.g. "ZIMRA 2025".
    pub fn version_label(&self) -> String {
        format!("{} {}", self.metadata.jurisdiction, self.metadata.tax_year)
    }
}
