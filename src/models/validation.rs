//! Record validation output.

use serde::{Deserialize, Serialize};

/// The outcome of validating one payroll record.
///
/// `errors` lists every violation found, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were found.
    pub valid: bool,
    /// Human-readable descriptions of each violation.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from the collected errors.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_errors_is_valid() {
        let result = ValidationResult::from_errors(vec![]);
        assert!(result.valid);
    }

    #[test]
    fn test_any_error_is_invalid() {
        let result = ValidationResult::from_errors(vec!["Employee ID is required".to_string()]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }
}
