//! Flat-rate contributions on basic salary.
//!
//! PhilHealth (3%) and Pag-IBIG (2%) are approximated as flat shares of the
//! basic salary, without the statutory floors and ceilings.

use crate::config::ContributionsConfig;
use crate::models::AuditStep;

/// A contribution charged as a flat share of basic salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatContribution {
    /// Philippine Health Insurance Corporation.
    PhilHealth,
    /// Home Development Mutual Fund.
    PagIbig,
}

impl FlatContribution {
    /// The configured share of basic salary.
    pub fn rate(self, config: &ContributionsConfig) -> f64 {
        match self {
            FlatContribution::PhilHealth => config.philhealth_rate,
            FlatContribution::PagIbig => config.pagibig_rate,
        }
    }

    fn rule_id(self) -> &'static str {
        match self {
            FlatContribution::PhilHealth => "philhealth",
            FlatContribution::PagIbig => "pagibig",
        }
    }

    fn rule_name(self) -> &'static str {
        match self {
            FlatContribution::PhilHealth => "PhilHealth Contribution",
            FlatContribution::PagIbig => "Pag-IBIG Contribution",
        }
    }
}

/// Returns `basic_salary * rate` for the contribution.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::{FlatContribution, flat_contribution};
/// use payroll_preview::config::PreviewRules;
///
/// let rules = PreviewRules::reference();
/// let philhealth = flat_contribution(FlatContribution::PhilHealth, 20000.0, rules.contributions());
/// assert!((philhealth - 600.0).abs() < 1e-9);
/// ```
pub fn flat_contribution(
    kind: FlatContribution,
    basic_salary: f64,
    config: &ContributionsConfig,
) -> f64 {
    basic_salary * kind.rate(config)
}

/// The result of a flat contribution, including the audit step.
#[derive(Debug, Clone)]
pub struct FlatContributionResult {
    /// The contribution due.
    pub contribution: f64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes a flat contribution and records the rate used.
pub fn calculate_flat_contribution(
    kind: FlatContribution,
    basic_salary: f64,
    config: &ContributionsConfig,
    step_number: u32,
) -> FlatContributionResult {
    let rate = kind.rate(config);
    let contribution = flat_contribution(kind, basic_salary, config);

    FlatContributionResult {
        contribution,
        audit_step: AuditStep {
            step_number,
            rule_id: kind.rule_id().to_string(),
            rule_name: kind.rule_name().to_string(),
            input: serde_json::json!({ "basic_salary": basic_salary, "rate": rate }),
            output: serde_json::json!({ "contribution": contribution }),
            reasoning: format!("{} x {} = {}", basic_salary, rate, contribution),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewRules;

    #[test]
    fn test_philhealth_is_three_percent() {
        let rules = PreviewRules::reference();
        let value = flat_contribution(FlatContribution::PhilHealth, 10000.0, rules.contributions());
        assert_eq!(value.to_bits(), (10000.0_f64 * 0.03).to_bits());
        assert!((value - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_pagibig_is_two_percent() {
        let rules = PreviewRules::reference();
        let value = flat_contribution(FlatContribution::PagIbig, 10000.0, rules.contributions());
        assert_eq!(value.to_bits(), (10000.0_f64 * 0.02).to_bits());
        assert!((value - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_salary_contributes_nothing() {
        let rules = PreviewRules::reference();
        assert_eq!(flat_contribution(FlatContribution::PhilHealth, 0.0, rules.contributions()), 0.0);
        assert_eq!(flat_contribution(FlatContribution::PagIbig, 0.0, rules.contributions()), 0.0);
    }

    #[test]
    fn test_audit_step_records_rate() {
        let rules = PreviewRules::reference();
        let result = calculate_flat_contribution(FlatContribution::PagIbig, 500.0, rules.contributions(), 6);

        assert_eq!(result.audit_step.rule_id, "pagibig");
        assert_eq!(result.audit_step.rule_name, "Pag-IBIG Contribution");
        assert_eq!(result.audit_step.input["rate"], 0.02);
        assert_eq!(result.audit_step.step_number, 6);
    }
}
