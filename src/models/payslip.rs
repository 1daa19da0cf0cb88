//! Payslip numbering.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Highest employee id that fits the four-digit payslip suffix.
const MAX_EMPLOYEE_ID: u32 = 9999;

/// A payslip number of the form `PS{year}{month:02}{employee:04}`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_preview::models::PayslipNumber;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let number = PayslipNumber::generate(42, start).unwrap();
/// assert_eq!(number.as_str(), "PS2024030042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayslipNumber(String);

impl PayslipNumber {
    /// Generates the payslip number for an employee and pay-period start.
    ///
    /// Ids above 9999 are rejected with [`EngineError::InvalidPayslip`].
    /// This differs from the payroll screens and the payroll backend, which
    /// zero-pad to a minimum of four digits and let larger ids widen the
    /// number (id 12345 in March 2024 gives `PS20240312345`). Numbers issued
    /// here are always twelve characters.
    pub fn generate(employee_id: u32, period_start: NaiveDate) -> EngineResult<Self> {
        if employee_id > MAX_EMPLOYEE_ID {
            return Err(EngineError::InvalidPayslip {
                employee_id,
                message: format!("employee id exceeds {}", MAX_EMPLOYEE_ID),
            });
        }
        if !(0..=9999).contains(&period_start.year()) {
            return Err(EngineError::InvalidPayslip {
                employee_id,
                message: format!("period year {} is not four digits", period_start.year()),
            });
        }

        Ok(Self(format!(
            "PS{:04}{:02}{:04}",
            period_start.year(),
            period_start.month(),
            employee_id
        )))
    }

    /// Returns the payslip number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayslipNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
