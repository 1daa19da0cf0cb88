//! Error types for the payroll preview engine.
//!
//! The preview calculation itself never fails: unparsable input is coerced to
//! zero before it reaches the calculator. These errors cover everything around
//! it, such as loading rule tables, presenting amounts and service settings.

use thiserror::Error;

/// The main error type for the payroll preview engine.
///
/// # Example
///
/// ```
/// use payroll_preview::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tax.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tax.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule table was loaded but is not usable.
    #[error("Invalid rule table '{table}': {message}")]
    InvalidRules {
        /// The table that failed validation (e.g. "sss", "tax").
        table: String,
        /// What is wrong with it.
        message: String,
    },

    /// An amount cannot be represented at the presentation boundary.
    #[error("Amount out of range for '{field}': {value}")]
    AmountOutOfRange {
        /// The output field holding the amount.
        field: String,
        /// The offending value.
        value: f64,
    },

    /// A payslip number could not be generated.
    #[error("Invalid payslip for employee {employee_id}: {message}")]
    InvalidPayslip {
        /// The employee the payslip was requested for.
        employee_id: u32,
        /// Why it could not be generated.
        message: String,
    },

    /// A service setting read from the environment is invalid.
    #[error("Invalid setting '{name}': {message}")]
    InvalidSetting {
        /// The environment variable name.
        name: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rules_displays_table_and_message() {
        let error = EngineError::InvalidRules {
            table: "sss".to_string(),
            message: "table is empty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid rule table 'sss': table is empty");
    }

    #[test]
    fn test_amount_out_of_range_displays_field_and_value() {
        let error = EngineError::AmountOutOfRange {
            field: "gross_pay".to_string(),
            value: f64::INFINITY,
        };
        assert_eq!(error.to_string(), "Amount out of range for 'gross_pay': inf");
    }

    #[test]
    fn test_invalid_payslip_displays_employee() {
        let error = EngineError::InvalidPayslip {
            employee_id: 12345,
            message: "employee id exceeds four digits".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payslip for employee 12345: employee id exceeds four digits"
        );
    }

    #[test]
    fn test_invalid_setting_displays_name() {
        let error = EngineError::InvalidSetting {
            name: "SERVER_ADDR".to_string(),
            message: "not a socket address".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid setting 'SERVER_ADDR': not a socket address"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
