//! Aggregated payroll totals.

use serde::{Deserialize, Serialize};

use super::PayrollBreakdown;

/// Totals across a set of payroll breakdowns.
///
/// Amounts are summed in input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of breakdowns summarised.
    pub total_employees: usize,
    /// Sum of gross pay.
    pub total_gross_pay: f64,
    /// Sum of total deductions.
    pub total_deductions: f64,
    /// Sum of net pay.
    pub total_net_pay: f64,
    /// Sum of SSS contributions.
    pub total_sss: f64,
    /// Sum of PhilHealth contributions.
    pub total_philhealth: f64,
    /// Sum of Pag-IBIG contributions.
    pub total_pagibig: f64,
    /// Sum of withholding tax.
    pub total_tax: f64,
}

impl PayrollSummary {
    /// Summarises the given breakdowns.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_preview::calculation::compute_payroll;
    /// use payroll_preview::config::PreviewRules;
    /// use payroll_preview::models::{PayrollInput, PayrollSummary};
    ///
    /// let rules = PreviewRules::reference();
    /// let runs = [10000.0, 20000.0].map(|basic_salary| {
    ///     compute_payroll(&PayrollInput { basic_salary, ..Default::default() }, &rules)
    /// });
    ///
    /// let summary = PayrollSummary::from_breakdowns(&runs);
    /// assert_eq!(summary.total_employees, 2);
    /// assert_eq!(summary.total_sss, 1000.0);
    /// ```
    pub fn from_breakdowns<'a, I>(breakdowns: I) -> Self
    where
        I: IntoIterator<Item = &'a PayrollBreakdown>,
    {
        breakdowns
            .into_iter()
            .fold(Self::default(), |mut summary, b| {
                summary.total_employees += 1;
                summary.total_gross_pay += b.gross_pay;
                summary.total_deductions += b.total_deductions;
                summary.total_net_pay += b.net_pay;
                summary.total_sss += b.sss;
                summary.total_philhealth += b.philhealth;
                summary.total_pagibig += b.pagibig;
                summary.total_tax += b.tax;
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(gross_pay: f64, sss: f64, tax: f64) -> PayrollBreakdown {
        let philhealth = gross_pay * 0.03;
        let pagibig = gross_pay * 0.02;
        let total_deductions = sss + philhealth + pagibig + tax;
        PayrollBreakdown {
            basic_salary: gross_pay,
            hourly_rate: gross_pay / 8.0 / 22.0,
            overtime_pay: 0.0,
            holiday_pay: 0.0,
            night_differential: 0.0,
            gross_pay,
            sss,
            philhealth,
            pagibig,
            tax,
            total_deductions,
            net_pay: gross_pay - total_deductions,
        }
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = PayrollSummary::from_breakdowns(&Vec::<PayrollBreakdown>::new());
        assert_eq!(summary, PayrollSummary::default());
    }

    #[test]
    fn test_summary_adds_each_component() {
        let runs = vec![breakdown(10000.0, 500.0, 0.0), breakdown(300000.0, 500.0, 10000.0)];
        let summary = PayrollSummary::from_breakdowns(&runs);

        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_gross_pay, 310000.0);
        assert_eq!(summary.total_sss, 1000.0);
        assert_eq!(summary.total_tax, 10000.0);
        assert_eq!(
            summary.total_net_pay,
            runs[0].net_pay + runs[1].net_pay
        );
    }
}
