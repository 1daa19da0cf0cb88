//! Pay for hours paid above the plain hourly rate.
//!
//! Overtime, holiday and night hours are all priced off the same hourly rate:
//!
//! - overtime: `hours * hourly_rate * overtime_premium` (1.25)
//! - holiday: `hours * hourly_rate * holiday_multiplier` (2.0)
//! - night differential: `hours * hourly_rate * night_differential_rate` (0.10)
//!
//! Multiplication runs left to right so results match the payroll screens
//! to the last bit.

use crate::config::WorkSchedule;
use crate::models::AuditStep;

/// The kind of premium hours being paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumKind {
    /// Hours beyond the schedule.
    Overtime,
    /// Hours worked on a holiday.
    Holiday,
    /// Hours inside the night shift window.
    NightDifferential,
}

impl PremiumKind {
    fn multiplier(self, schedule: &WorkSchedule) -> f64 {
        match self {
            PremiumKind::Overtime => schedule.overtime_premium,
            PremiumKind::Holiday => schedule.holiday_multiplier,
            PremiumKind::NightDifferential => schedule.night_differential_rate,
        }
    }

    fn rule_id(self) -> &'static str {
        match self {
            PremiumKind::Overtime => "overtime_pay",
            PremiumKind::Holiday => "holiday_pay",
            PremiumKind::NightDifferential => "night_differential",
        }
    }

    fn rule_name(self) -> &'static str {
        match self {
            PremiumKind::Overtime => "Overtime Pay",
            PremiumKind::Holiday => "Holiday Pay",
            PremiumKind::NightDifferential => "Night Differential",
        }
    }
}

/// Prices `hours` of the given kind at `hourly_rate`.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::{PremiumKind, premium_pay};
/// use payroll_preview::config::PreviewRules;
///
/// let rules = PreviewRules::reference();
/// assert_eq!(premium_pay(PremiumKind::Overtime, 4.0, 100.0, rules.schedule()), 500.0);
/// assert_eq!(premium_pay(PremiumKind::Holiday, 8.0, 100.0, rules.schedule()), 1600.0);
/// ```
pub fn premium_pay(kind: PremiumKind, hours: f64, hourly_rate: f64, schedule: &WorkSchedule) -> f64 {
    hours * hourly_rate * kind.multiplier(schedule)
}

/// The result of pricing premium hours, including the audit step.
#[derive(Debug, Clone)]
pub struct PremiumPayResult {
    /// The amount payable for the hours.
    pub amount: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices premium hours and records the multiplier used.
pub fn calculate_premium_pay(
    kind: PremiumKind,
    hours: f64,
    hourly_rate: f64,
    schedule: &WorkSchedule,
    step_number: u32,
) -> PremiumPayResult {
    let multiplier = kind.multiplier(schedule);
    let amount = premium_pay(kind, hours, hourly_rate, schedule);

    PremiumPayResult {
        amount,
        audit_step: AuditStep {
            step_number,
            rule_id: kind.rule_id().to_string(),
            rule_name: kind.rule_name().to_string(),
            input: serde_json::json!({
                "hours": hours,
                "hourly_rate": hourly_rate,
                "multiplier": multiplier
            }),
            output: serde_json::json!({ "amount": amount }),
            reasoning: format!("{}h x {} x {} = {}", hours, hourly_rate, multiplier, amount),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewRules;

    #[test]
    fn test_overtime_matches_reference_formula_bit_for_bit() {
        let rules = PreviewRules::reference();
        let rate = 20000.0_f64 / 8.0 / 22.0;
        let pay = premium_pay(PremiumKind::Overtime, 10.0, rate, rules.schedule());
        assert_eq!(pay.to_bits(), (10.0 * rate * 1.25).to_bits());
        assert!((pay - 1420.4545454545455).abs() < 1e-9);
    }

    #[test]
    fn test_night_differential_is_ten_percent_of_rate() {
        let rules = PreviewRules::reference();
        let pay = premium_pay(PremiumKind::NightDifferential, 8.0, 100.0, rules.schedule());
        assert!((pay - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_hours_pay_nothing() {
        let rules = PreviewRules::reference();
        for kind in [
            PremiumKind::Overtime,
            PremiumKind::Holiday,
            PremiumKind::NightDifferential,
        ] {
            assert_eq!(premium_pay(kind, 0.0, 113.5, rules.schedule()), 0.0);
        }
    }

    #[test]
    fn test_audit_step_names_the_kind() {
        let rules = PreviewRules::reference();
        let result = calculate_premium_pay(PremiumKind::Holiday, 8.0, 100.0, rules.schedule(), 3);

        assert_eq!(result.amount, 1600.0);
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "holiday_pay");
        assert_eq!(result.audit_step.input["multiplier"], 2.0);
        assert_eq!(result.audit_step.reasoning, "8h x 100 x 2 = 1600");
    }
}
