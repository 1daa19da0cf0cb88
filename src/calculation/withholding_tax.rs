//! Progressive withholding tax.
//!
//! Gross pay up to 250,000 is exempt. Above that each bracket charges a fixed
//! base plus a marginal rate on the excess over the bracket floor:
//!
//! | Gross pay up to | Tax                                   |
//! |-----------------|---------------------------------------|
//! | 250,000         | 0                                     |
//! | 400,000         | (g - 250,000) x 20%                   |
//! | 800,000         | 30,000 + (g - 400,000) x 25%          |
//! | 2,000,000       | 130,000 + (g - 800,000) x 30%         |
//! | 8,000,000       | 490,000 + (g - 2,000,000) x 32%       |
//! | above           | 2,410,000 + (g - 8,000,000) x 35%     |

use crate::config::{TaxBracket, TaxRule};
use crate::models::AuditStep;

use super::bracket::find_bracket;

impl TaxRule {
    /// Applies the rule to a gross pay amount.
    pub fn apply(&self, gross_pay: f64) -> f64 {
        match *self {
            TaxRule::Exempt => 0.0,
            TaxRule::Progressive { base, floor, rate } => base + (gross_pay - floor) * rate,
        }
    }
}

/// Returns the withholding tax on a gross pay amount.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::progressive_tax;
/// use payroll_preview::config::PreviewRules;
///
/// let rules = PreviewRules::reference();
/// assert_eq!(progressive_tax(250_000.0, rules.tax_brackets()), 0.0);
/// assert_eq!(progressive_tax(800_000.0, rules.tax_brackets()), 130_000.0);
/// ```
pub fn progressive_tax(gross_pay: f64, brackets: &[TaxBracket]) -> f64 {
    find_bracket(brackets, gross_pay).map_or(0.0, |(_, row)| row.rule.apply(gross_pay))
}

/// The result of a tax lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct WithholdingTaxResult {
    /// The tax due.
    pub tax: f64,
    /// Index of the matching bracket, if any matched.
    pub bracket_index: Option<usize>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes withholding tax and records the bracket and formula applied.
pub fn calculate_withholding_tax(
    gross_pay: f64,
    brackets: &[TaxBracket],
    step_number: u32,
) -> WithholdingTaxResult {
    let matched = find_bracket(brackets, gross_pay);
    let tax = matched.map_or(0.0, |(_, row)| row.rule.apply(gross_pay));
    let bracket_index = matched.map(|(index, _)| index);

    let reasoning = match matched.map(|(_, row)| row.rule) {
        Some(TaxRule::Exempt) => format!("Gross pay {} is exempt", gross_pay),
        Some(TaxRule::Progressive { base, floor, rate }) => format!(
            "{} + ({} - {}) x {} = {}",
            base, gross_pay, floor, rate, tax
        ),
        None => format!("No tax bracket admits gross pay {}", gross_pay),
    };

    WithholdingTaxResult {
        tax,
        bracket_index,
        audit_step: AuditStep {
            step_number,
            rule_id: "withholding_tax".to_string(),
            rule_name: "Withholding Tax".to_string(),
            input: serde_json::json!({ "gross_pay": gross_pay }),
            output: serde_json::json!({
                "tax": tax,
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

    fn tax(gross_pay: f64) -> f64 {
        progressive_tax(gross_pay, PreviewRules::reference().tax_brackets())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_exempt_up_to_and_including_250k() {
        assert_eq!(tax(0.0), 0.0);
        assert_eq!(tax(21_420.45), 0.0);
        assert_eq!(tax(250_000.0), 0.0);
    }

    #[test]
    fn test_first_peso_above_exemption() {
        assert_eq!(tax(250_001.0), 0.20);
    }

    #[test]
    fn test_bracket_ceilings() {
        assert_close(tax(400_000.0), 30_000.0);
        assert_close(tax(800_000.0), 130_000.0);
        assert_close(tax(2_000_000.0), 490_000.0);
        assert_close(tax(8_000_000.0), 2_410_000.0);
    }

    #[test]
    fn test_top_bracket_marginal_rate() {
        assert_close(tax(9_000_000.0), 2_410_000.0 + 350_000.0);
    }

    #[test]
    fn test_tax_is_continuous_across_brackets() {
        for bound in [400_000.0, 800_000.0, 2_000_000.0, 8_000_000.0] {
            let below = tax(bound);
            let above = tax(bound + 0.01);
            assert!(above > below, "tax drops past {}", bound);
            assert!(above - below < 0.01, "tax jumps past {}", bound);
        }
    }

    #[test]
    fn test_matches_reference_formula_bit_for_bit() {
        let gross = 612_345.67_f64;
        assert_eq!(tax(gross).to_bits(), (30000.0 + (gross - 400000.0) * 0.25).to_bits());
    }

    #[test]
    fn test_audit_step_for_exempt_pay() {
        let rules = PreviewRules::reference();
        let result = calculate_withholding_tax(10_000.0, rules.tax_brackets(), 7);

        assert_eq!(result.tax, 0.0);
        assert_eq!(result.bracket_index, Some(0));
        assert_eq!(result.audit_step.reasoning, "Gross pay 10000 is exempt");
    }

    #[test]
    fn test_audit_step_for_progressive_bracket() {
        let rules = PreviewRules::reference();
        let result = calculate_withholding_tax(800_000.0, rules.tax_brackets(), 7);

        assert_eq!(result.bracket_index, Some(2));
        assert_eq!(
            result.audit_step.reasoning,
            "30000 + (800000 - 400000) x 0.25 = 130000"
        );
    }
}
