//! Structural validation of payroll records.
//!
//! Every check runs independently so one pass reports every problem with a
//! record. Numeric types are guaranteed by the typed record, while an
//! unrecognized currency code is carried through and reported here.

use rust_decimal::Decimal;

use crate::models::{MAX_AMOUNT, PayrollInputRecord, RecordCurrency, ValidationResult};

const MIN_NAME_LENGTH: usize = 2;
const TAX_IDENTIFIER_DIGITS: std::ops::RangeInclusive<usize> = 6..=10;

/// Validates one payroll record, collecting every violation.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::validate_record;
/// use paye_engine::models::{Currency, PayrollInputRecord};
/// use rust_decimal::Decimal;
///
/// let mut record = PayrollInputRecord::new("", "A", Decimal::from(-1), Currency::Usd);
/// record.tax_identifier = Some("12-34".to_string());
///
/// let result = validate_record(&record);
/// assert!(!result.valid);
/// assert_eq!(result.errors.len(), 4);
/// ```
pub fn validate_record(record: &PayrollInputRecord) -> ValidationResult {
    let mut errors = Vec::new();

    if record.employee_id.trim().is_empty() {
        errors.push("Employee ID is required".to_string());
    }

    if record.name.trim().chars().count() < MIN_NAME_LENGTH {
        errors.push("Name is required and must be at least 2 characters".to_string());
    }

    let amounts = [
        (
            "Basic Salary",
            Some(record.basic_salary),
            "Basic Salary cannot be negative",
        ),
        (
            "Allowances",
            record.allowances,
            "Allowances cannot be negative",
        ),
        (
            "Exempt Allowances",
            record.exempt_allowances,
            "Exempt Allowances cannot be negative",
        ),
        (
            "YTD Gross",
            record.year_to_date_gross,
            "YTD Gross must be a non-negative number",
        ),
        (
            "YTD Tax Paid",
            record.year_to_date_tax_paid,
            "YTD Tax Paid must be a non-negative number",
        ),
    ];
    for (label, amount, negative_message) in amounts {
        match amount {
            Some(a) if a < Decimal::ZERO => errors.push(negative_message.to_string()),
            Some(a) if a > MAX_AMOUNT => {
                errors.push(format!("{} cannot exceed {}", label, MAX_AMOUNT));
            }
            _ => {}
        }
    }

    if let RecordCurrency::Unrecognized(code) = &record.currency {
        errors.push(format!("Invalid Currency: {}. Must be 'USD' or 'ZiG'.", code));
    }

    if let Some(tin) = record.tax_identifier.as_deref() {
        let cleaned: String = tin
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if !cleaned.is_empty() && !is_valid_tax_identifier(&cleaned) {
            errors.push(format!("Invalid TIN format: {}. Must be 6-10 digits.", tin));
        }
    }

    ValidationResult::from_errors(errors)
}

fn is_valid_tax_identifier(cleaned: &str) -> bool {
    TAX_IDENTIFIER_DIGITS.contains(&cleaned.len()) && cleaned.chars().all(|c| c.is_ascii_digit())
}
