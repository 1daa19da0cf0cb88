//! SSS contribution lookup.
//!
//! The contribution is a step function of basic salary read from the SSS
//! table. The reference table rises by 50 for every 1000 of salary, from 50
//! at or below 1000 to 500 at or below 10000, and stays at 500 above that.

use crate::config::SssBracket;
use crate::models::AuditStep;

use super::bracket::find_bracket;

/// Returns the SSS contribution for a basic salary.
///
/// A table without an open-ended row yields zero past its last bound; loaded
/// rule sets are validated so this never happens for them.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::sss_contribution;
/// use payroll_preview::config::PreviewRules;
///
/// let rules = PreviewRules::reference();
/// assert_eq!(sss_contribution(0.0, rules.sss_table()), 50.0);
/// assert_eq!(sss_contribution(1000.01, rules.sss_table()), 100.0);
/// assert_eq!(sss_contribution(50000.0, rules.sss_table()), 500.0);
/// ```
pub fn sss_contribution(basic_salary: f64, table: &[SssBracket]) -> f64 {
    find_bracket(table, basic_salary).map_or(0.0, |(_, row)| row.contribution)
}

/// The result of an SSS lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct SssContributionResult {
    /// The contribution due.
    pub contribution: f64,
    /// Index of the matching bracket, if any matched.
    pub bracket_index: Option<usize>,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Looks up the SSS contribution and records which bracket applied.
pub fn calculate_sss(
    basic_salary: f64,
    table: &[SssBracket],
    step_number: u32,
) -> SssContributionResult {
    let matched = find_bracket(table, basic_salary);
    let contribution = matched.map_or(0.0, |(_, row)| row.contribution);
    let bracket_index = matched.map(|(index, _)| index);

    let reasoning = match matched {
        Some((_, SssBracket { upper_bound: Some(bound), .. })) => {
            format!("Basic salary {} <= {}: contribution {}", basic_salary, bound, contribution)
        }
        Some((_, SssBracket { upper_bound: None, .. })) => {
            format!("Basic salary {} is in the top bracket: contribution {}", basic_salary, contribution)
        }
        None => format!("No SSS bracket admits basic salary {}", basic_salary),
    };

    SssContributionResult {
        contribution,
        bracket_index,
        audit_step: AuditStep {
            step_number,
            rule_id: "sss".to_string(),
            rule_name: "SSS Contribution".to_string(),
            input: serde_json::json!({ "basic_salary": basic_salary }),
            output: serde_json::json!({
                "contribution": contribution,
                "bracket_index": bracket_index
            }),
            reasoning,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewRules;

    fn sss(basic_salary: f64) -> f64 {
        sss_contribution(basic_salary, PreviewRules::reference().sss_table())
    }

    #[test]
    fn test_each_boundary_is_inclusive() {
        for step in 1..=10 {
            let bound = f64::from(step * 1000);
            assert_eq!(sss(bound), f64::from(step * 50), "at {}", bound);
        }
    }

    #[test]
    fn test_contribution_steps_up_just_past_each_boundary() {
        for step in 1..=9 {
            let bound = f64::from(step * 1000);
            assert_eq!(sss(bound + 0.01), f64::from((step + 1) * 50), "past {}", bound);
        }
    }

    #[test]
    fn test_contribution_is_capped_above_ten_thousand() {
        assert_eq!(sss(10_000.01), 500.0);
        assert_eq!(sss(1_000_000.0), 500.0);
    }

    #[test]
    fn test_zero_salary_is_in_lowest_bracket() {
        assert_eq!(sss(0.0), 50.0);
    }

    #[test]
    fn test_audit_step_records_bracket() {
        let rules = PreviewRules::reference();
        let result = calculate_sss(2500.0, rules.sss_table(), 4);

        assert_eq!(result.contribution, 150.0);
        assert_eq!(result.bracket_index, Some(2));
        assert_eq!(result.audit_step.output["bracket_index"], 2);
        assert_eq!(result.audit_step.reasoning, "Basic salary 2500 <= 3000: contribution 150");
    }

    #[test]
    fn test_audit_step_for_top_bracket() {
        let rules = PreviewRules::reference();
        let result = calculate_sss(25000.0, rules.sss_table(), 4);

        assert_eq!(result.bracket_index, Some(10));
        assert!(result.audit_step.reasoning.contains("top bracket"));
    }
}
