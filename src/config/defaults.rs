//! Built-in ZIMRA 2025 statutory registry.
//!
//! USD tables are unchanged from 2024. ZiG tables mirror USD at roughly 28x.
//! The same figures ship as YAML under `config/zimra_2025`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::Currency;

use super::types::{
    LevySettings, PensionSettings, PerCurrency, RegistryMetadata, StatutoryRates, TaxBracket,
    TaxTable, TaxTableRegistry,
};

/// (lower, upper, rate in percent) for each monthly USD band.
const USD_MONTHLY_BANDS: [(i64, Option<i64>, i64); 6] = [
    (0, Some(100), 0),
    (100, Some(300), 20),
    (300, Some(1_000), 25),
    (1_000, Some(2_000), 30),
    (2_000, Some(3_000), 35),
    (3_000, None, 40),
];

const ZIG_MONTHLY_BANDS: [(i64, Option<i64>, i64); 6] = [
    (0, Some(2_800), 0),
    (2_800, Some(8_400), 20),
    (8_400, Some(28_000), 25),
    (28_000, Some(56_000), 30),
    (56_000, Some(84_000), 35),
    (84_000, None, 40),
];

fn table_from_bands(bands: &[(i64, Option<i64>, i64)]) -> TaxTable {
    TaxTable::new(
        bands
            .iter()
            .map(|&(lower, upper, percent)| {
                TaxBracket::new(
                    Decimal::from(lower),
                    upper.map(Decimal::from),
                    Decimal::new(percent, 2),
                )
            })
            .collect(),
    )
}

/// Returns the built-in monthly table for `currency`.
pub fn zimra_2025_monthly_table(currency: Currency) -> TaxTable {
    match currency {
        Currency::Usd => table_from_bands(&USD_MONTHLY_BANDS),
        Currency::Zig => table_from_bands(&ZIG_MONTHLY_BANDS),
    }
}

/// Returns the built-in statutory rates.
pub fn zimra_2025_rates() -> StatutoryRates {
    StatutoryRates {
        pension: PensionSettings {
            rate: Decimal::new(45, 3),
            ceiling: PerCurrency {
                usd: Decimal::from(700),
                zig: Decimal::from(19_600),
            },
        },
        // Sector-specific; off unless an organization configures it.
        council_levy: LevySettings {
            enabled: false,
            rate: Decimal::ZERO,
        },
        standards_fund: LevySettings {
            enabled: true,
            rate: Decimal::new(1, 2),
        },
        solidarity_levy_rate: Decimal::new(3, 2),
        casual_flat_rate: Decimal::new(20, 2),
    }
}

impl TaxTableRegistry {
    /// The ZIMRA 2025/2026 registry.
    ///
    /// # Example
    ///
    /// ```
    /// use paye_engine::config::TaxTableRegistry;
    /// use paye_engine::models::Currency;
    /// use rust_decimal::Decimal;
    ///
    /// let registry = TaxTableRegistry::zimra_2025();
    /// assert_eq!(registry.pension_ceiling(Currency::Usd), Decimal::from(700));
    /// ```
    pub fn zimra_2025() -> Self {
        let metadata = RegistryMetadata {
            jurisdiction: "ZIMRA".to_string(),
            tax_year: "2025".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            source: "ZIMRA 2025 PAYE tax tables".to_string(),
        };
        let monthly = PerCurrency {
            usd: zimra_2025_monthly_table(Currency::Usd),
            zig: zimra_2025_monthly_table(Currency::Zig),
        };
        Self::assemble(metadata, zimra_2025_rates(), monthly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        for currency in Currency::ALL {
            assert!(zimra_2025_monthly_table(currency).validate(currency).is_ok());
        }
    }

    #[test]
    fn test_usd_table_matches_gazette() {
        let table = zimra_2025_monthly_table(Currency::Usd);
        assert_eq!(table.brackets.len(), 6);
        assert_eq!(table.brackets[1].lower_bound, Decimal::from(100));
        assert_eq!(table.brackets[1].rate, Decimal::new(20, 2));
        assert_eq!(table.brackets[5].lower_bound, Decimal::from(3_000));
        assert_eq!(table.brackets[5].rate, Decimal::new(40, 2));
        assert!(table.brackets[5].upper_bound.is_none());
    }

    #[test]
    fn test_zig_table_mirrors_usd_rates() {
        let usd = zimra_2025_monthly_table(Currency::Usd);
        let zig = zimra_2025_monthly_table(Currency::Zig);
        for (u, z) in usd.brackets.iter().zip(zig.brackets.iter()) {
            assert_eq!(u.rate, z.rate);
            assert_eq!(u.lower_bound * Decimal::from(28), z.lower_bound);
        }
    }

    #[test]
    fn test_statutory_rates() {
        let rates = zimra_2025_rates();
        assert_eq!(rates.pension.rate, Decimal::new(45, 3));
        assert_eq!(rates.pension.ceiling.zig, Decimal::from(19_600));
        assert!(!rates.council_levy.enabled);
        assert!(rates.standards_fund.enabled);
        assert_eq!(rates.standards_fund.rate, Decimal::new(1, 2));
        assert_eq!(rates.solidarity_levy_rate, Decimal::new(3, 2));
        assert_eq!(rates.casual_flat_rate, Decimal::new(20, 2));
    }
}
