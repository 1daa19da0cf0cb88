//! Hourly rate derivation.
//!
//! The hourly rate is the monthly basic salary spread over the scheduled
//! hours of a month: `basic_salary / hours_per_day / days_per_month`, divided
//! in that order.

use crate::config::WorkSchedule;
use crate::models::AuditStep;

/// Derives the hourly rate from a monthly basic salary.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::hourly_rate;
/// use payroll_preview::config::PreviewRules;
///
/// let rules = PreviewRules::reference();
/// assert_eq!(hourly_rate(17600.0, rules.schedule()), 100.0);
/// ```
pub fn hourly_rate(basic_salary: f64, schedule: &WorkSchedule) -> f64 {
    basic_salary / schedule.hours_per_day / schedule.days_per_month
}

/// The result of deriving an hourly rate, including the audit step.
#[derive(Debug, Clone)]
pub struct HourlyRateResult {
    /// The derived hourly rate.
    pub hourly_rate: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the hourly rate and records how it was obtained.
pub fn calculate_hourly_rate(
    basic_salary: f64,
    schedule: &WorkSchedule,
    step_number: u32,
) -> HourlyRateResult {
    let rate = hourly_rate(basic_salary, schedule);

    HourlyRateResult {
        hourly_rate: rate,
        audit_step: AuditStep {
            step_number,
            rule_id: "hourly_rate".to_string(),
            rule_name: "Hourly Rate".to_string(),
            input: serde_json::json!({
                "basic_salary": basic_salary,
                "hours_per_day": schedule.hours_per_day,
                "days_per_month": schedule.days_per_month
            }),
            output: serde_json::json!({ "hourly_rate": rate }),
            reasoning: format!(
                "{} / {} hours / {} days = {}",
                basic_salary, schedule.hours_per_day, schedule.days_per_month, rate
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewRules;

    #[test]
    fn test_divides_by_hours_then_days() {
        let rules = PreviewRules::reference();
        let rate = hourly_rate(20000.0, rules.schedule());
        assert_eq!(rate.to_bits(), (20000.0_f64 / 8.0 / 22.0).to_bits());
    }

    #[test]
    fn test_zero_salary_gives_zero_rate() {
        let rules = PreviewRules::reference();
        assert_eq!(hourly_rate(0.0, rules.schedule()), 0.0);
    }

    #[test]
    fn test_audit_step_records_schedule() {
        let rules = PreviewRules::reference();
        let result = calculate_hourly_rate(17600.0, rules.schedule(), 1);

        assert_eq!(result.hourly_rate, 100.0);
        assert_eq!(result.audit_step.step_number, 1);
        assert_eq!(result.audit_step.rule_id, "hourly_rate");
        assert_eq!(result.audit_step.input["hours_per_day"], 8.0);
        assert_eq!(result.audit_step.input["days_per_month"], 22.0);
        assert_eq!(result.audit_step.reasoning, "17600 / 8 hours / 22 days = 100");
    }
}
