//! Preview input and output models.
//!
//! This module contains [`PreviewInput`], the two form values a preview is
//! computed from, and [`PayrollPreview`], the breakdown produced from them.

use serde::{Deserialize, Serialize};

/// Replaces an amount that cannot be computed with by zero.
///
/// NaN, infinities and negative zero all become `0.0`; every other value is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use payroll_preview::models::coerce_amount;
///
/// assert_eq!(coerce_amount(1500.5), 1500.5);
/// assert_eq!(coerce_amount(f64::NAN), 0.0);
/// assert_eq!(coerce_amount(f64::NEG_INFINITY), 0.0);
/// ```
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses a form value, reading the longest decimal prefix like `parseFloat`.
///
/// Leading whitespace is skipped and the longest decimal prefix is used, so
/// `"1500.50 PHP"` reads as `1500.5`. Anything without a numeric prefix reads
/// as zero. Unlike a browser, the words `Infinity` and `NaN` are not numbers
/// here, and a prefix that overflows `f64` also reads as zero, so a parsed
/// amount is always finite. Negative zero is normalised to zero.
///
/// # Examples
///
/// ```
/// use payroll_preview::models::parse_amount;
///
/// assert_eq!(parse_amount("  25000"), 25000.0);
/// assert_eq!(parse_amount("12abc"), 12.0);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];

    prefix.parse::<f64>().map_or(0.0, coerce_amount)
}

/// Length in bytes of the longest `[sign] digits [. digits] [exponent]` prefix.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    end
}

/// The inputs of a payroll preview.
///
/// # Example
///
/// ```
/// use payroll_preview::models::PreviewInput;
///
/// let input = PreviewInput::from_fields("20000", "10");
/// assert_eq!(input.basic_salary, 20000.0);
/// assert_eq!(input.overtime_hours, 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewInput {
    /// Monthly basic salary.
    pub basic_salary: f64,
    /// Hours worked beyond the schedule.
    pub overtime_hours: f64,
}

impl PreviewInput {
    /// Creates an input from already-parsed values, coercing non-finite
    /// values to zero.
    pub fn new(basic_salary: f64, overtime_hours: f64) -> Self {
        Self {
            basic_salary: coerce_amount(basic_salary),
            overtime_hours: coerce_amount(overtime_hours),
        }
    }

    /// Returns a copy with every field passed through [`coerce_amount`].
    pub fn coerced(&self) -> Self {
        Self::new(self.basic_salary, self.overtime_hours)
    }

    /// Creates an input from raw form text, treating blanks and garbage as zero.
    pub fn from_fields(basic_salary: &str, overtime_hours: &str) -> Self {
        Self::new(parse_amount(basic_salary), parse_amount(overtime_hours))
    }
}

/// The breakdown shown while a payroll form is being filled in.
///
/// All amounts carry full floating-point precision; rounding to cents only
/// happens when they are presented (see [`crate::format`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollPreview {
    /// Basic salary divided over the scheduled hours of a month.
    pub hourly_rate: f64,
    /// Overtime hours paid at the overtime premium.
    pub overtime_pay: f64,
    /// Basic salary plus overtime pay.
    pub gross_pay: f64,
    /// SSS contribution from the bracket table.
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
