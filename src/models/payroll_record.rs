//! Payroll input record and currency models.
//!
//! A [`PayrollInputRecord`] is one employee's raw pay data for a period, as
//! produced by the upstream spreadsheet parser.
//!
//! Amount accessors clamp to [`MAX_AMOUNT`] in magnitude, which keeps every
//! downstream product and sum inside `Decimal` range.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest amount, in either currency, the engine computes with.
///
/// Equal to 10^15. The validator rejects larger amounts.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

fn bounded(amount: Decimal) -> Decimal {
    amount.clamp(-MAX_AMOUNT, MAX_AMOUNT)
}

/// The currency an employee is paid in.
///
/// Serialized as `"USD"` and `"ZiG"`. The ISO code `"ZWG"` is accepted as an
/// alias for ZiG on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// United States dollar.
    #[serde(rename = "USD")]
    Usd,
    /// Zimbabwe Gold.
    #[serde(rename = "ZiG", alias = "ZWG")]
    Zig,
}

impl Currency {
    /// Both supported currencies, in display order.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Zig];

    /// Returns the code used on the wire and in reports.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Zig => "ZiG",
        }
    }

    /// Parses a wire code. Matching is exact; `"ZWG"` is read as ZiG.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::Usd),
            "ZiG" | "ZWG" => Some(Currency::Zig),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The currency exactly as supplied on a record.
///
/// An unrecognized code is kept rather than rejected at parse time, so one
/// bad row never hides the problems of the others. The validator reports it
/// and the calculator prices the row on the USD tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordCurrency {
    /// One of the supported currencies.
    Known(Currency),
    /// Any other code, verbatim.
    Unrecognized(String),
}

impl RecordCurrency {
    /// Returns the supported currency, if the code was recognized.
    pub fn known(&self) -> Option<Currency> {
        match self {
            RecordCurrency::Known(currency) => Some(*currency),
            RecordCurrency::Unrecognized(_) => None,
        }
    }
}

impl From<Currency> for RecordCurrency {
    fn from(currency: Currency) -> Self {
        RecordCurrency::Known(currency)
    }
}

impl From<String> for RecordCurrency {
    fn from(code: String) -> Self {
        match Currency::from_code(&code) {
            Some(currency) => RecordCurrency::Known(currency),
            None => RecordCurrency::Unrecognized(code),
        }
    }
}

impl From<RecordCurrency> for String {
    fn from(currency: RecordCurrency) -> Self {
        match currency {
            RecordCurrency::Known(currency) => currency.code().to_string(),
            RecordCurrency::Unrecognized(code) => code,
        }
    }
}

impl PartialEq<Currency> for RecordCurrency {
    fn eq(&self, other: &Currency) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for RecordCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordCurrency::Known(currency) => f.write_str(currency.code()),
            RecordCurrency::Unrecognized(code) => f.write_str(code),
        }
    }
}

fn default_permanent() -> bool {
    true
}

/// One employee's pay data for a period.
///
/// Optional amounts are treated as zero by the calculator. The record is never
/// mutated by the engine. Read amounts through the accessors, which bound
/// them to [`MAX_AMOUNT`].
///
/// # Example
///
/// ```
/// use paye_engine::models::{Currency, PayrollInputRecord};
/// use rust_decimal::Decimal;
///
/// let record = PayrollInputRecord::new("emp_001", "Tendai Moyo", Decimal::new(500, 0), Currency::Usd);
/// assert!(record.is_permanent);
/// assert_eq!(record.gross_income(), Decimal::new(500, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInputRecord {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's full name.
    pub name: String,
    /// Statutory taxpayer identification number.
    #[serde(default, alias = "tin")]
    pub tax_identifier: Option<String>,
    /// Basic salary for the period.
    pub basic_salary: Decimal,
    /// Taxable allowances added to gross income.
    #[serde(default)]
    pub allowances: Option<Decimal>,
    /// Allowances exempt from tax. Reduces taxable income only, never gross.
    #[serde(default)]
    pub exempt_allowances: Option<Decimal>,
    /// Gross paid in prior periods of the current tax year.
    #[serde(default)]
    pub year_to_date_gross: Option<Decimal>,
    /// Tax withheld in prior periods of the current tax year.
    #[serde(default)]
    pub year_to_date_tax_paid: Option<Decimal>,
    /// The currency the employee is paid in.
    pub currency: RecordCurrency,
    /// Permanent staff are taxed progressively; casuals at the flat rate.
    #[serde(default = "default_permanent")]
    pub is_permanent: bool,
}

impl PayrollInputRecord {
    /// Creates a permanent-employee record with no optional amounts.
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        basic_salary: Decimal,
        currency: Currency,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            tax_identifier: None,
            basic_salary,
            allowances: None,
            exempt_allowances: None,
            year_to_date_gross: None,
            year_to_date_tax_paid: None,
            currency: currency.into(),
            is_permanent: true,
        }
    }

    /// The currency whose tables price this record. Unrecognized codes fall
    /// back to USD.
    pub fn tax_currency(&self) -> Currency {
        self.currency.known().unwrap_or(Currency::Usd)
    }

    /// Basic salary plus allowances.
    pub fn gross_income(&self) -> Decimal {
        bounded(self.basic_salary) + bounded(self.allowances.unwrap_or(Decimal::ZERO))
    }

    /// Exempt allowances, or zero when absent.
    pub fn exempt_allowances_or_zero(&self) -> Decimal {
        bounded(self.exempt_allowances.unwrap_or(Decimal::ZERO))
    }

    /// Year-to-date gross, or zero when absent.
    pub fn year_to_date_gross_or_zero(&self) -> Decimal {
        bounded(self.year_to_date_gross.unwrap_or(Decimal::ZERO))
    }

    /// Year-to-date tax paid, or zero when absent.
    pub fn tax_paid_or_zero(&self) -> Decimal {
        bounded(self.year_to_date_tax_paid.unwrap_or(Decimal::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record_defaults_to_permanent() {
        let json = r#"{
            "employee_id": "emp_001",
            "name": "Tendai Moyo",
            "basic_salary": "500",
            "currency": "USD"
        }"#;

        let record: PayrollInputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.basic_salary, Decimal::new(500, 0));
        assert_eq!(record.currency, Currency::Usd);
        assert!(record.is_permanent);
        assert!(record.allowances.is_none());
        assert!(record.tax_identifier.is_none());
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "employee_id": "emp_002",
            "name": "Rudo Chikore",
            "tin": "1234567",
            "basic_salary": 10000,
            "allowances": "1500.50",
            "exempt_allowances": "200",
            "year_to_date_gross": "30000",
            "year_to_date_tax_paid": "4000",
            "currency": "ZiG",
            "is_permanent": false
        }"#;

        let record: PayrollInputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tax_identifier.as_deref(), Some("1234567"));
        assert_eq!(record.allowances, Some(Decimal::new(150050, 2)));
        assert_eq!(record.currency, Currency::Zig);
        assert!(!record.is_permanent);
    }

    #[test]
    fn test_zwg_is_accepted_as_zig() {
        let currency: Currency = serde_json::from_str("\"ZWG\"").unwrap();
        assert_eq!(currency, Currency::Zig);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let result: Result<Currency, _> = serde_json::from_str("\"EUR\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_keeps_unrecognized_currency() {
        let json = r#"{
            "employee_id": "emp_003",
            "name": "Tendai Moyo",
            "basic_salary": "500",
            "currency": "EUR"
        }"#;

        let record: PayrollInputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.currency, RecordCurrency::Unrecognized("EUR".to_string()));
        assert_eq!(record.currency.known(), None);
        assert_eq!(record.tax_currency(), Currency::Usd);
        assert!(serde_json::to_string(&record).unwrap().contains("\"currency\":\"EUR\""));
    }

    #[test]
    fn test_record_currency_matching_is_exact() {
        assert_eq!(RecordCurrency::from("ZWG".to_string()), Currency::Zig);
        assert_eq!(
            RecordCurrency::from("usd".to_string()),
            RecordCurrency::Unrecognized("usd".to_string())
        );
        assert_eq!(String::from(RecordCurrency::from(Currency::Zig)), "ZiG");
    }

    #[test]
    fn test_currency_serialization() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(serde_json::to_string(&Currency::Zig).unwrap(), "\"ZiG\"");
        assert_eq!(Currency::Zig.to_string(), "ZiG");
    }

    #[test]
    fn test_gross_income_includes_allowances() {
        let mut record =
            PayrollInputRecord::new("emp_001", "Tendai Moyo", Decimal::new(500, 0), Currency::Usd);
        record.allowances = Some(Decimal::new(125, 0));
        record.exempt_allowances = Some(Decimal::new(50, 0));

        // Exempt allowances never change gross.
        assert_eq!(record.gross_income(), Decimal::new(625, 0));
        assert_eq!(record.exempt_allowances_or_zero(), Decimal::new(50, 0));
    }

    #[test]
    fn test_amounts_are_bounded() {
        let mut record =
            PayrollInputRecord::new("emp_001", "Tendai Moyo", Decimal::MAX, Currency::Usd);
        record.allowances = Some(Decimal::ONE);
        record.year_to_date_gross = Some(Decimal::MIN);

        assert_eq!(record.gross_income(), MAX_AMOUNT + Decimal::ONE);
        assert_eq!(record.year_to_date_gross_or_zero(), -MAX_AMOUNT);
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000i64));
    }

    #[test]
    fn test_missing_optionals_read_as_zero() {
        let record =
            PayrollInputRecord::new("emp_001", "Tendai Moyo", Decimal::new(500, 0), Currency::Usd);
        assert_eq!(record.exempt_allowances_or_zero(), Decimal::ZERO);
        assert_eq!(record.tax_paid_or_zero(), Decimal::ZERO);
    }
}
