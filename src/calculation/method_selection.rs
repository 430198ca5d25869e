//! Income tax method selection.

use crate::models::{PayrollInputRecord, TaxConfiguration, TaxMethod};

/// Picks the income tax method for a record.
///
/// Priority order:
/// 1. Non-permanent records use the flat method.
/// 2. Records with year-to-date gross, processed with a positive
///    `processing_month`, use the cumulative method.
/// 3. Everything else uses the standard monthly brackets.
pub fn select_method(record: &PayrollInputRecord, config: &TaxConfiguration) -> TaxMethod {
    if !record.is_permanent {
        return TaxMethod::Flat;
    }

    let has_month = config.processing_month.is_some_and(|m| m > 0);
    if record.year_to_date_gross.is_some() && has_month {
        TaxMethod::Cumulative
    } else {
        TaxMethod::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use rust_decimal::Decimal;

    fn record() -> PayrollInputRecord {
        PayrollInputRecord::new("emp_001", "Tendai Moyo", Decimal::from(500), Currency::Usd)
    }

    fn with_month(month: u32) -> TaxConfiguration {
        TaxConfiguration {
            processing_month: Some(month),
            ..Default::default()
        }
    }

    #[test]
    fn test_permanent_without_ytd_is_standard() {
        assert_eq!(
            select_method(&record(), &TaxConfiguration::default()),
            TaxMethod::Standard
        );
    }

    #[test]
    fn test_casual_is_flat_even_with_ytd_and_month() {
        let mut casual = record();
        casual.is_permanent = false;
        casual.year_to_date_gross = Some(Decimal::from(1000));
        assert_eq!(select_method(&casual, &with_month(3)), TaxMethod::Flat);
    }

    #[test]
    fn test_ytd_gross_and_month_is_cumulative() {
        let mut permanent = record();
        permanent.year_to_date_gross = Some(Decimal::from(1000));
        assert_eq!(select_method(&permanent, &with_month(3)), TaxMethod::Cumulative);
    }

    #[test]
    fn test_ytd_gross_without_month_is_standard() {
        let mut permanent = record();
        permanent.year_to_date_gross = Some(Decimal::from(1000));
        assert_eq!(
            select_method(&permanent, &TaxConfiguration::default()),
            TaxMethod::Standard
        );
    }

    #[test]
    fn test_zero_month_is_standard() {
        let mut permanent = record();
        permanent.year_to_date_gross = Some(Decimal::from(1000));
        assert_eq!(select_method(&permanent, &with_month(0)), TaxMethod::Standard);
    }

    #[test]
    fn test_month_without_ytd_gross_is_standard() {
        assert_eq!(select_method(&record(), &with_month(6)), TaxMethod::Standard);
    }
}
