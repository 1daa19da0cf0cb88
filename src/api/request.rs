//! Request types for the payroll preview API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PayrollInput, PreviewInput, coerce_amount, parse_amount};

/// A form value as posted by the payroll screens: either the raw field text
/// or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON number.
    Number(f64),
    /// Raw field text, parsed leniently.
    Text(String),
}

impl FieldValue {
    /// Reads the value as an amount; anything unusable reads as zero.
    pub fn to_amount(&self) -> f64 {
        match self {
            FieldValue::Number(value) => coerce_amount(*value),
            FieldValue::Text(text) => parse_amount(text),
        }
    }
}

fn amount_of(value: &Option<FieldValue>) -> f64 {
    value.as_ref().map_or(0.0, FieldValue::to_amount)
}

/// Request body for the `/preview` endpoint.
///
/// Both fields may be absent, null, blank or garbage; each reads as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// Monthly basic salary field.
    #[serde(default)]
    pub basic_salary: Option<FieldValue>,
    /// Overtime hours field.
    #[serde(default)]
    pub overtime_hours: Option<FieldValue>,
}

impl From<&PreviewRequest> for PreviewInput {
    fn from(req: &PreviewRequest) -> Self {
        PreviewInput::new(amount_of(&req.basic_salary), amount_of(&req.overtime_hours))
    }
}

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Employee id used in the payslip number.
    pub employee_id: u32,
    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Monthly basic salary field.
    #[serde(default)]
    pub basic_salary: Option<FieldValue>,
    /// Overtime hours field.
    #[serde(default)]
    pub overtime_hours: Option<FieldValue>,
    /// Holiday hours field.
    #[serde(default)]
    pub holiday_hours: Option<FieldValue>,
    /// Night hours field.
    #[serde(default)]
    pub night_hours: Option<FieldValue>,
}

impl From<&PayrollRequest> for PayrollInput {
    fn from(req: &PayrollRequest) -> Self {
        PayrollInput {
            basic_salary: amount_of(&req.basic_salary),
            overtime_hours: amount_of(&req.overtime_hours),
            holiday_hours: amount_of(&req.holiday_hours),
            night_hours: amount_of(&req.night_hours),
        }
    }
}

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The payroll inputs to compute and total.
    pub entries: Vec<PayrollInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_request_accepts_text_and_numbers() {
        let req: PreviewRequest =
            serde_json::from_str(r#"{"basic_salary": "20000", "overtime_hours": 10}"#).unwrap();
        let input: PreviewInput = (&req).into();
        assert_eq!(input, PreviewInput::new(20000.0, 10.0));
    }

    #[test]
    fn test_preview_request_missing_and_null_fields_read_as_zero() {
        let req: PreviewRequest = serde_json::from_str(r#"{"overtime_hours": null}"#).unwrap();
        let input: PreviewInput = (&req).into();
        assert_eq!(input, PreviewInput::new(0.0, 0.0));
    }

    #[test]
    fn test_preview_request_garbage_text_reads_as_zero() {
        let req: PreviewRequest =
            serde_json::from_str(r#"{"basic_salary": "n/a", "overtime_hours": "2.5h"}"#).unwrap();
        let input: PreviewInput = (&req).into();
        assert_eq!(input, PreviewInput::new(0.0, 2.5));
    }

    #[test]
    fn test_negative_zero_number_reads_as_zero() {
        let value = FieldValue::Number(-0.0);
        assert!(value.to_amount().is_sign_positive());
    }

    #[test]
    fn test_non_finite_number_reads_as_zero() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(FieldValue::Number(value).to_amount(), 0.0);
        }
        assert_eq!(FieldValue::Number(-250.5).to_amount(), -250.5);
    }

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "employee_id": 42,
            "period_start": "2025-03-01",
            "basic_salary": "17600",
            "holiday_hours": 8
        }"#;
        let req: PayrollRequest = serde_json::from_str(json).unwrap();
        let input: PayrollInput = (&req).into();

        assert_eq!(req.employee_id, 42);
        assert_eq!(req.period_start, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(input.basic_salary, 17600.0);
        assert_eq!(input.holiday_hours, 8.0);
        assert_eq!(input.overtime_hours, 0.0);
    }

    #[test]
    fn test_payroll_request_requires_employee_id() {
        let result: Result<PayrollRequest, _> =
            serde_json::from_str(r#"{"period_start": "2025-03-01"}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field `employee_id`"), "{}", message);
    }
}
