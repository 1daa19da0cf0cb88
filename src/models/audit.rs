//! Audit trace models.
//!
//! Every traced calculation records the rules it applied, in order, so a
//! preview can be explained line by line next to the numbers it produced.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// # Example
///
/// ```
/// use payroll_preview::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "philhealth".to_string(),
///     rule_name: "PhilHealth Contribution".to_string(),
///     input: serde_json::json!({ "basic_salary": 10000.0 }),
///     output: serde_json::json!({ "philhealth": 300.0 }),
///     reasoning: "10000 x 0.03 = 300".to_string(),
/// };
/// assert_eq!(step.rule_id, "philhealth");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the step recorded for a rule, if it was applied.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}
