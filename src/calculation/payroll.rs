//! Full payroll run for one employee.
//!
//! Extends the preview with holiday pay and night differential. Gross pay is
//! `basic + overtime + holiday + night` and tax is charged on that gross; the
//! remaining deductions are the preview's.

use std::time::Instant;

use crate::config::PreviewRules;
use crate::models::{AuditTrace, PayrollBreakdown, PayrollInput};

use super::contributions::{FlatContribution, calculate_flat_contribution, flat_contribution};
use super::hourly_rate::{calculate_hourly_rate, hourly_rate};
use super::premium_pay::{PremiumKind, calculate_premium_pay, premium_pay};
use super::preview::net_pay_step;
use super::sss::{calculate_sss, sss_contribution};
use super::withholding_tax::{calculate_withholding_tax, progressive_tax};

/// Computes a payroll breakdown.
///
/// Non-finite salary or hours are coerced to zero first, as in the preview.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::compute_payroll;
/// use payroll_preview::config::PreviewRules;
/// use payroll_preview::models::PayrollInput;
///
/// let input = PayrollInput { basic_salary: 17600.0, holiday_hours: 8.0, ..Default::default() };
/// let breakdown = compute_payroll(&input, &PreviewRules::reference());
/// assert_eq!(breakdown.holiday_pay, 1600.0);
/// assert_eq!(breakdown.gross_pay, 19200.0);
/// ```
pub fn compute_payroll(input: &PayrollInput, rules: &PreviewRules) -> PayrollBreakdown {
    let schedule = rules.schedule();
    let input = input.coerced();
    let basic_salary = input.basic_salary;

    let hourly_rate = hourly_rate(basic_salary, schedule);
    let overtime_pay = premium_pay(PremiumKind::Overtime, input.overtime_hours, hourly_rate, schedule);
    let holiday_pay = premium_pay(PremiumKind::Holiday, input.holiday_hours, hourly_rate, schedule);
    let night_differential = premium_pay(
        PremiumKind::NightDifferential,
        input.night_hours,
        hourly_rate,
        schedule,
    );
    let gross_pay = basic_salary + overtime_pay + holiday_pay + night_differential;

    let sss = sss_contribution(basic_salary, rules.sss_table());
    let philhealth =
        flat_contribution(FlatContribution::PhilHealth, basic_salary, rules.contributions());
    let pagibig = flat_contribution(FlatContribution::PagIbig, basic_salary, rules.contributions());
    let tax = progressive_tax(gross_pay, rules.tax_brackets());
    let total_deductions = sss + philhealth + pagibig + tax;

    PayrollBreakdown {
        basic_salary,
        hourly_rate,
        overtime_pay,
        holiday_pay,
        night_differential,
        gross_pay,
        sss,
        philhealth,
        pagibig,
        tax,
        total_deductions,
        net_pay: gross_pay - total_deductions,
    }
}

/// A payroll breakdown together with the audit trace explaining it.
#[derive(Debug, Clone)]
pub struct PayrollCalculation {
    /// The computed breakdown.
    pub breakdown: PayrollBreakdown,
    /// One step per rule applied, in order.
    pub audit_trace: AuditTrace,
}

/// Computes a payroll breakdown and records every rule applied.
pub fn calculate_payroll(input: &PayrollInput, rules: &PreviewRules) -> PayrollCalculation {
    let started = Instant::now();
    let schedule = rules.schedule();
    let input = input.coerced();
    let basic_salary = input.basic_salary;
    let mut steps = Vec::with_capacity(9);
    let mut step_number: u32 = 1;
    let mut next_step = || {
        let current = step_number;
        step_number += 1;
        current
    };

    let rate = calculate_hourly_rate(basic_salary, schedule, next_step());
    steps.push(rate.audit_step);

    let mut premium = |kind: PremiumKind, hours: f64, step: u32| {
        let result = calculate_premium_pay(kind, hours, rate.hourly_rate, schedule, step);
        steps.push(result.audit_step);
        result.amount
    };
    let overtime_pay = premium(PremiumKind::Overtime, input.overtime_hours, next_step());
    let holiday_pay = premium(PremiumKind::Holiday, input.holiday_hours, next_step());
    let night_differential = premium(
        PremiumKind::NightDifferential,
        input.night_hours,
        next_step(),
    );
    let gross_pay = basic_salary + overtime_pay + holiday_pay + night_differential;

    let sss = calculate_sss(basic_salary, rules.sss_table(), next_step());
    steps.push(sss.audit_step);

    let philhealth = calculate_flat_contribution(
        FlatContribution::PhilHealth,
        basic_salary,
        rules.contributions(),
        next_step(),
    );
    steps.push(philhealth.audit_step);

    let pagibig = calculate_flat_contribution(
        FlatContribution::PagIbig,
        basic_salary,
        rules.contributions(),
        next_step(),
    );
    steps.push(pagibig.audit_step);

    let tax = calculate_withholding_tax(gross_pay, rules.tax_brackets(), next_step());
    steps.push(tax.audit_step);

    let total_deductions = sss.contribution + philhealth.contribution + pagibig.contribution + tax.tax;
    let net_pay = gross_pay - total_deductions;
    steps.push(net_pay_step(next_step(), gross_pay, total_deductions, net_pay));

    PayrollCalculation {
        breakdown: PayrollBreakdown {
            basic_salary,
            hourly_rate: rate.hourly_rate,
            overtime_pay,
            holiday_pay,
            night_differential,
            gross_pay,
            sss: sss.contribution,
            philhealth: philhealth.contribution,
            pagibig: pagibig.contribution,
            tax: tax.tax,
            total_deductions,
            net_pay,
        },
        audit_trace: AuditTrace {
            steps,
            duration_us: started.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_preview_with;
    use crate::models::PreviewInput;

    #[test]
    fn test_without_premium_hours_equals_preview() {
        let rules = PreviewRules::reference();
        for (basic, hours) in [(0.0, 0.0), (10000.0, 0.0), (20000.0, 10.0), (3_000_000.0, 80.0)] {
            let preview_input = PreviewInput::new(basic, hours);
            let breakdown = compute_payroll(&preview_input.into(), &rules);
            let preview = compute_preview_with(&preview_input, &rules);
            assert_eq!(breakdown.to_preview(), preview, "at basic {} hours {}", basic, hours);
        }
    }

    #[test]
    fn test_non_finite_hours_are_paid_as_zero() {
        let rules = PreviewRules::reference();
        let input = PayrollInput {
            basic_salary: 17600.0,
            overtime_hours: f64::NAN,
            holiday_hours: f64::INFINITY,
            night_hours: f64::NEG_INFINITY,
        };
        let expected = compute_payroll(&PayrollInput {
            basic_salary: 17600.0,
            ..Default::default()
        }, &rules);

        assert_eq!(compute_payroll(&input, &rules), expected);
        assert_eq!(calculate_payroll(&input, &rules).breakdown, expected);
    }

    #[test]
    fn test_holiday_and_night_hours_add_to_gross() {
        let rules = PreviewRules::reference();
        let input = PayrollInput {
            basic_salary: 17600.0,
            overtime_hours: 2.0,
            holiday_hours: 8.0,
            night_hours: 5.0,
        };
        let breakdown = compute_payroll(&input, &rules);

        assert_eq!(breakdown.hourly_rate, 100.0);
        assert_eq!(breakdown.overtime_pay, 250.0);
        assert_eq!(breakdown.holiday_pay, 1600.0);
        assert!((breakdown.night_differential - 50.0).abs() < 1e-9);
        assert!((breakdown.gross_pay - 19500.0).abs() < 1e-9);
    }

    #[test]
    fn test_tax_is_charged_on_gross_including_premiums() {
        let rules = PreviewRules::reference();
        // 176,000 basic gives 1,000/hour; 80 holiday hours add 160,000
        let input = PayrollInput {
            basic_salary: 176_000.0,
            holiday_hours: 80.0,
            ..Default::default()
        };
        let breakdown = compute_payroll(&input, &rules);

        assert_eq!(breakdown.gross_pay, 336_000.0);
        assert!((breakdown.tax - 17_200.0).abs() < 1e-6);
    }

    #[test]
    fn test_traced_and_untraced_breakdowns_are_identical() {
        let rules = PreviewRules::reference();
        let input = PayrollInput {
            basic_salary: 45_678.9,
            overtime_hours: 6.5,
            holiday_hours: 8.0,
            night_hours: 12.0,
        };
        let traced = calculate_payroll(&input, &rules);

        assert_eq!(traced.breakdown, compute_payroll(&input, &rules));
        let rule_ids: Vec<&str> = traced
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "hourly_rate",
                "overtime_pay",
                "holiday_pay",
                "night_differential",
                "sss",
                "philhealth",
                "pagibig",
                "withholding_tax",
                "net_pay"
            ]
        );
        let numbers: Vec<u32> = traced.audit_trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
    }
}
