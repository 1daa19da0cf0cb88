//! Presentation of preview amounts.
//!
//! Amounts are computed in full double precision and only rounded here, at
//! the presentation boundary. Rounding follows the payroll screens' fixed
//! two-decimal fields: the exact binary value is rounded to two places with
//! ties away from zero, so `1.005` (stored just below) shows as `1.00`.
//!
//! Two outputs differ from a browser:
//!
//! - A small negative amount that rounds to zero shows as `0.00`, never as
//!   the `-0.00` a browser's `toFixed` prints.
//! - [`format_peso`] groups digits of the already-rounded cents. A browser's
//!   currency formatter rounds the shortest decimal form instead, so binary
//!   near-ties such as `1.005` or `2.675` come out one cent higher there
//!   (`₱1.01`, `₱2.68`) than here (`₱1.00`, `₱2.67`). Every presented amount
//!   therefore agrees with its fixed two-decimal field.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollPreview;

/// The peso sign used in every presented amount.
pub const PESO_SIGN: char = '₱';

/// Rounds an amount to cents.
///
/// `field` names the amount in the error if it cannot be represented
/// (non-finite, or beyond `Decimal`'s range). A result of zero is always
/// positive zero.
///
/// # Examples
///
/// ```
/// use payroll_preview::format::round_to_cents;
/// use rust_decimal::Decimal;
///
/// let cents = round_to_cents("net_pay", 19920.454545454544).unwrap();
/// assert_eq!(cents, Decimal::new(1992045, 2));
/// ```
pub fn round_to_cents(field: &str, value: f64) -> EngineResult<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|exact| {
            let mut cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            if cents.is_zero() {
                cents.set_sign_positive(true);
            }
            cents
        })
        .ok_or_else(|| EngineError::AmountOutOfRange {
            field: field.to_string(),
            value,
        })
}

/// Formats a cent amount with exactly two decimals, e.g. `"19920.45"`.
pub fn format_fixed(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Formats a cent amount in Philippine-peso currency style.
///
/// # Examples
///
/// ```
/// use payroll_preview::format::format_peso;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_peso(Decimal::new(123456789, 2)), "₱1,234,567.89");
/// assert_eq!(format_peso(Decimal::new(-5000, 2)), "-₱50.00");
/// ```
pub fn format_peso(amount: Decimal) -> String {
    let fixed = format_fixed(amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", sign, PESO_SIGN, grouped, cents)
}

/// The two display fields updated on every input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDisplay {
    /// Gross pay with two decimals.
    pub gross_pay: String,
    /// Net pay with two decimals.
    pub net_pay: String,
}

impl PreviewDisplay {
    /// Builds the display values for a preview.
    pub fn from_preview(preview: &PayrollPreview) -> EngineResult<Self> {
        Ok(Self {
            gross_pay: format_fixed(round_to_cents("gross_pay", preview.gross_pay)?),
            net_pay: format_fixed(round_to_cents("net_pay", preview.net_pay)?),
        })
    }
}

/// One labelled amount of a breakdown panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLine {
    /// Row label, e.g. "Gross Pay".
    pub label: String,
    /// Amount as shown, e.g. "₱21420.45".
    pub amount: String,
    /// Whether the row is a total shown in bold.
    pub emphasis: bool,
}

/// The earnings and deductions panel shown next to a payroll form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownPanel {
    /// Basic salary, overtime and gross pay.
    pub earnings: Vec<PanelLine>,
    /// Contributions, tax, totals and net pay.
    pub deductions: Vec<PanelLine>,
}

impl BreakdownPanel {
    /// Renders the panel for a preview computed from `basic_salary`.
    ///
    /// Amounts are shown as the peso sign followed by two fixed decimals,
    /// without digit grouping.
    pub fn render(basic_salary: f64, preview: &PayrollPreview) -> EngineResult<Self> {
        let line = |label: &str, field: &str, value: f64, emphasis: bool| {
            round_to_cents(field, value).map(|cents| PanelLine {
                label: label.to_string(),
                amount: format!("{}{}", PESO_SIGN, format_fixed(cents)),
                emphasis,
            })
        };

        Ok(Self {
            earnings: vec![
                line("Basic Salary", "basic_salary", basic_salary, false)?,
                line("Overtime Pay", "overtime_pay", preview.overtime_pay, false)?,
                line("Gross Pay", "gross_pay", preview.gross_pay, true)?,
            ],
            deductions: vec![
                line("SSS", "sss", preview.sss, false)?,
                line("PhilHealth", "philhealth", preview.philhealth, false)?,
                line("Pag-IBIG", "pagibig", preview.pagibig, false)?,
                line("Tax", "tax", preview.tax, false)?,
                line("Total Deductions", "total_deductions", preview.total_deductions, true)?,
                line("Net Pay", "net_pay", preview.net_pay, true)?,
            ],
        })
    }
}

impl fmt::Display for BreakdownPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (heading, lines) in [("Earnings", &self.earnings), ("Deductions", &self.deductions)] {
            writeln!(f, "{}", heading)?;
            for line in lines {
                if line.emphasis {
                    writeln!(f, "  **{}: {}**", line.label, line.amount)?;
                } else {
                    writeln!(f, "  {}: {}", line.label, line.amount)?;
                }
            }
        }
        Ok(())
    }
}
