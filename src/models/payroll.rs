//! Full payroll inputs and breakdowns.
//!
//! A payroll run extends the preview with holiday hours and night hours. With
//! both at zero a [`PayrollBreakdown`] carries exactly the preview's numbers.

use serde::{Deserialize, Serialize};

use super::{PayrollPreview, PreviewInput, coerce_amount};

/// The hours and salary a payroll run is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Monthly basic salary.
    pub basic_salary: f64,
    /// Hours worked beyond the schedule.
    #[serde(default)]
    pub overtime_hours: f64,
    /// Hours worked on holidays.
    #[serde(default)]
    pub holiday_hours: f64,
    /// Hours worked during the night shift window.
    #[serde(default)]
    pub night_hours: f64,
}

impl PayrollInput {
    /// Returns a copy with every field passed through [`coerce_amount`].
    pub fn coerced(&self) -> Self {
        Self {
            basic_salary: coerce_amount(self.basic_salary),
            overtime_hours: coerce_amount(self.overtime_hours),
            holiday_hours: coerce_amount(self.holiday_hours),
            night_hours: coerce_amount(self.night_hours),
        }
    }
}

impl From<PreviewInput> for PayrollInput {
    fn from(input: PreviewInput) -> Self {
        Self {
            basic_salary: input.basic_salary,
            overtime_hours: input.overtime_hours,
            holiday_hours: 0.0,
            night_hours: 0.0,
        }
    }
}

/// Earnings and deductions of a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Basic salary the run was computed from.
    pub basic_salary: f64,
    /// Basic salary divided over the scheduled hours of a month.
    pub hourly_rate: f64,
    /// Overtime hours paid at the overtime premium.
    pub overtime_pay: f64,
    /// Holiday hours paid at the holiday multiplier.
    pub holiday_pay: f64,
    /// Night hours paid at the night differential rate.
    pub night_differential: f64,
    /// Basic salary plus all premium pay.
    pub gross_pay: f64,
    /// SSS contribution.
    pub sss: f64,
    /// PhilHealth contribution.
    pub philhealth: f64,
    /// Pag-IBIG contribution.
    pub pagibig: f64,
    /// Withholding tax on gross pay.
    pub tax: f64,
    /// Sum of all deductions.
    pub total_deductions: f64,
    /// Gross pay minus total deductions.
    pub net_pay: f64,
}

impl PayrollBreakdown {
    /// Drops the premium pay lines the preview does not show.
    pub fn to_preview(&self) -> PayrollPreview {
        PayrollPreview {
            hourly_rate: self.hourly_rate,
            overtime_pay: self.overtime_pay,
            gross_pay: self.gross_pay,
            sss: self.sss,
            philhealth: self.philhealth,
            pagibig: self.pagibig,
            tax: self.tax,
            total_deductions: self.total_deductions,
            net_pay: self.net_pay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_input_from_preview_has_no_premium_hours() {
        let input: PayrollInput = PreviewInput::new(20000.0, 10.0).into();
        assert_eq!(input.basic_salary, 20000.0);
        assert_eq!(input.overtime_hours, 10.0);
        assert_eq!(input.holiday_hours, 0.0);
        assert_eq!(input.night_hours, 0.0);
    }

    #[test]
    fn test_coerced_zeroes_non_finite_hours() {
        let input = PayrollInput {
            basic_salary: 17600.0,
            overtime_hours: f64::NAN,
            holiday_hours: f64::INFINITY,
            night_hours: 2.0,
        };
        assert_eq!(input.coerced(), PayrollInput {
            basic_salary: 17600.0,
            night_hours: 2.0,
            ..Default::default()
        });
    }

    #[test]
    fn test_payroll_input_hours_default_to_zero() {
        let input: PayrollInput = serde_json::from_str(r#"{"basic_salary": 15000}"#).unwrap();
        assert_eq!(input, PayrollInput {
            basic_salary: 15000.0,
            ..Default::default()
        });
    }
}
