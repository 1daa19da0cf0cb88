//! The payroll preview calculator.
//!
//! Given a basic salary and overtime hours this produces the same breakdown
//! the payroll screens show while a form is being filled in:
//!
//! 1. `hourly_rate = basic_salary / 8 / 22`
//! 2. `overtime_pay = overtime_hours * hourly_rate * 1.25`
//! 3. `gross_pay = basic_salary + overtime_pay`
//! 4. `sss` from the SSS table on basic salary
//! 5. `philhealth = basic_salary * 0.03`
//! 6. `pagibig = basic_salary * 0.02`
//! 7. `tax` from the progressive table on gross pay
//! 8. `total_deductions = sss + philhealth + pagibig + tax`
//! 9. `net_pay = gross_pay - total_deductions`
//!
//! Every step runs in double precision in exactly this order and nothing is
//! rounded in between, so outputs are bit-identical to the reference screens.
//! The result is a preview approximation, not an authoritative payroll run.

use std::time::Instant;

use crate::config::PreviewRules;
use crate::models::{AuditStep, AuditTrace, PayrollPreview, PreviewInput};

use super::contributions::{FlatContribution, calculate_flat_contribution, flat_contribution};
use super::hourly_rate::{calculate_hourly_rate, hourly_rate};
use super::premium_pay::{PremiumKind, calculate_premium_pay, premium_pay};
use super::sss::{calculate_sss, sss_contribution};
use super::withholding_tax::{calculate_withholding_tax, progressive_tax};

/// Computes a preview with the reference rules.
///
/// Never fails. Non-finite input (NaN or an infinity) is coerced to zero
/// before anything is computed (see [`crate::models::coerce_amount`]).
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::compute_preview;
///
/// let preview = compute_preview(10000.0, 0.0);
/// assert_eq!(preview.sss, 500.0);
/// assert_eq!(preview.tax, 0.0);
/// assert!((preview.net_pay - 9000.0).abs() < 1e-9);
/// ```
pub fn compute_preview(basic_salary: f64, overtime_hours: f64) -> PayrollPreview {
    compute_preview_with(
        &PreviewInput::new(basic_salary, overtime_hours),
        &PreviewRules::reference(),
    )
}

/// Computes a preview with the given rules.
///
/// Input fields are coerced to zero when they are not finite.
pub fn compute_preview_with(input: &PreviewInput, rules: &PreviewRules) -> PayrollPreview {
    let schedule = rules.schedule();
    let input = input.coerced();
    let basic_salary = input.basic_salary;

    let hourly_rate = hourly_rate(basic_salary, schedule);
    let overtime_pay = premium_pay(
        PremiumKind::Overtime,
        input.overtime_hours,
        hourly_rate,
        schedule,
    );
    let gross_pay = basic_salary + overtime_pay;

    let sss = sss_contribution(basic_salary, rules.sss_table());
    let philhealth =
        flat_contribution(FlatContribution::PhilHealth, basic_salary, rules.contributions());
    let pagibig = flat_contribution(FlatContribution::PagIbig, basic_salary, rules.contributions());
    let tax = progressive_tax(gross_pay, rules.tax_brackets());

    let total_deductions = sss + philhealth + pagibig + tax;

    PayrollPreview {
        hourly_rate,
        overtime_pay,
        gross_pay,
        sss,
        philhealth,
        pagibig,
        tax,
        total_deductions,
        net_pay: gross_pay - total_deductions,
    }
}

/// A preview together with the audit trace explaining it.
#[derive(Debug, Clone)]
pub struct PreviewCalculation {
    /// The computed preview.
    pub preview: PayrollPreview,
    /// One step per rule applied, in order.
    pub audit_trace: AuditTrace,
}

/// Computes a preview and records every rule applied.
///
/// The numbers are identical to [`compute_preview_with`]; the trace only
/// explains them.
pub fn calculate_preview(input: &PreviewInput, rules: &PreviewRules) -> PreviewCalculation {
    let started = Instant::now();
    let schedule = rules.schedule();
    let input = input.coerced();
    let basic_salary = input.basic_salary;
    let mut steps = Vec::with_capacity(7);

    let rate = calculate_hourly_rate(basic_salary, schedule, 1);
    steps.push(rate.audit_step);

    let overtime = calculate_premium_pay(
        PremiumKind::Overtime,
        input.overtime_hours,
        rate.hourly_rate,
        schedule,
        2,
    );
    steps.push(overtime.audit_step);
    let gross_pay = basic_salary + overtime.amount;

    let sss = calculate_sss(basic_salary, rules.sss_table(), 3);
    steps.push(sss.audit_step);

    let philhealth = calculate_flat_contribution(
        FlatContribution::PhilHealth,
        basic_salary,
        rules.contributions(),
        4,
    );
    steps.push(philhealth.audit_step);

    let pagibig = calculate_flat_contribution(
        FlatContribution::PagIbig,
        basic_salary,
        rules.contributions(),
        5,
    );
    steps.push(pagibig.audit_step);

    let tax = calculate_withholding_tax(gross_pay, rules.tax_brackets(), 6);
    steps.push(tax.audit_step);

    let total_deductions = sss.contribution + philhealth.contribution + pagibig.contribution + tax.tax;
    let net_pay = gross_pay - total_deductions;
    steps.push(net_pay_step(7, gross_pay, total_deductions, net_pay));

    PreviewCalculation {
        preview: PayrollPreview {
            hourly_rate: rate.hourly_rate,
            overtime_pay: overtime.amount,
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

/// Records the final gross-minus-deductions step.
pub(crate) fn net_pay_step(
    step_number: u32,
    gross_pay: f64,
    total_deductions: f64,
    net_pay: f64,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay,
            "total_deductions": total_deductions
        }),
        output: serde_json::json!({ "net_pay": net_pay }),
        reasoning: format!("{} - {} = {}", gross_pay, total_deductions, net_pay),
    }
}
