//! Configuration types for the payroll preview.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML configuration files, plus the built-in reference
//! rule set used when no configuration directory is supplied.

use serde::{Deserialize, Serialize};

use crate::calculation::{Bracket, validate_brackets};
use crate::error::{EngineError, EngineResult};

/// Metadata identifying a rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesMetadata {
    /// Short name of the rule set (e.g. "ph_preview").
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Work schedule and pay multipliers used to derive hourly pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Working hours in a day.
    pub hours_per_day: f64,
    /// Working days in a month.
    pub days_per_month: f64,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_premium: f64,
    /// Multiplier applied to the hourly rate for holiday hours.
    pub holiday_multiplier: f64,
    /// Fraction of the hourly rate paid on top for night hours.
    pub night_differential_rate: f64,
}

/// One row of the SSS contribution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SssBracket {
    /// Inclusive upper bound on basic salary; `None` for the top bracket.
    #[serde(default)]
    pub upper_bound: Option<f64>,
    /// Flat contribution for salaries in this bracket.
    pub contribution: f64,
}

impl Bracket for SssBracket {
    fn upper_bound(&self) -> Option<f64> {
        self.upper_bound
    }
}

/// Contribution configuration from contributions.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionsConfig {
    /// PhilHealth share of basic salary.
    pub philhealth_rate: f64,
    /// Pag-IBIG share of basic salary.
    pub pagibig_rate: f64,
    /// SSS brackets in ascending order.
    pub sss: Vec<SssBracket>,
}

/// How tax is computed inside a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaxRule {
    /// No tax is due.
    Exempt,
    /// `base + (gross - floor) * rate`.
    Progressive {
        /// Fixed amount due at the bracket floor.
        base: f64,
        /// Amount above which the marginal rate applies.
        floor: f64,
        /// Marginal rate on the excess over `floor`.
        rate: f64,
    },
}

/// One row of the withholding tax table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound on gross pay; `None` for the top bracket.
    #[serde(default)]
    pub upper_bound: Option<f64>,
    /// The rule applied to gross pay in this bracket.
    pub rule: TaxRule,
}

impl Bracket for TaxBracket {
    fn upper_bound(&self) -> Option<f64> {
        self.upper_bound
    }
}

/// Tax configuration from tax.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Tax brackets in ascending order.
    pub brackets: Vec<TaxBracket>,
}

/// The complete rule set driving a payroll preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRules {
    metadata: RulesMetadata,
    schedule: WorkSchedule,
    contributions: ContributionsConfig,
    tax: TaxConfig,
}

impl PreviewRules {
    /// Creates a rule set from its parts, rejecting unusable tables.
    pub fn new(
        metadata: RulesMetadata,
        schedule: WorkSchedule,
        contributions: ContributionsConfig,
        tax: TaxConfig,
    ) -> EngineResult<Self> {
        let rules = Self {
            metadata,
            schedule,
            contributions,
            tax,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// The simplified Philippine rule set the payroll screens preview with.
    ///
    /// An 8-hour day over 22 working days, a 25% overtime premium, a ten-step
    /// SSS table capped at 500, flat 3% PhilHealth and 2% Pag-IBIG, and a
    /// six-bracket progressive tax. This is an approximation, not the
    /// statutory tables.
    pub fn reference() -> Self {
        let sss = (1..=10)
            .map(|step| SssBracket {
                upper_bound: Some(f64::from(step * 1000)),
                contribution: f64::from(step * 50),
            })
            .chain(std::iter::once(SssBracket {
                upper_bound: None,
                contribution: 500.0,
            }))
            .collect();

        let progressive = |upper_bound: Option<f64>, base: f64, floor: f64, rate: f64| TaxBracket {
            upper_bound,
            rule: TaxRule::Progressive { base, floor, rate },
        };

        Self {
            metadata: RulesMetadata {
                name: "ph_preview".to_string(),
                version: "reference".to_string(),
                description: "Simplified preview approximation".to_string(),
            },
            schedule: WorkSchedule {
                hours_per_day: 8.0,
                days_per_month: 22.0,
                overtime_premium: 1.25,
                holiday_multiplier: 2.0,
                night_differential_rate: 0.10,
            },
            contributions: ContributionsConfig {
                philhealth_rate: 0.03,
                pagibig_rate: 0.02,
                sss,
            },
            tax: TaxConfig {
                brackets: vec![
                    TaxBracket {
                        upper_bound: Some(250_000.0),
                        rule: TaxRule::Exempt,
                    },
                    progressive(Some(400_000.0), 0.0, 250_000.0, 0.20),
                    progressive(Some(800_000.0), 30_000.0, 400_000.0, 0.25),
                    progressive(Some(2_000_000.0), 130_000.0, 800_000.0, 0.30),
                    progressive(Some(8_000_000.0), 490_000.0, 2_000_000.0, 0.32),
                    progressive(None, 2_410_000.0, 8_000_000.0, 0.35),
                ],
            },
        }
    }

    fn validate(&self) -> EngineResult<()> {
        let schedule = &self.schedule;
        for (name, value) in [
            ("hours_per_day", schedule.hours_per_day),
            ("days_per_month", schedule.days_per_month),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::InvalidRules {
                    table: "schedule".to_string(),
                    message: format!("{} must be a positive number, got {}", name, value),
                });
            }
        }

        validate_brackets("sss", &self.contributions.sss)?;
        validate_brackets("tax", &self.tax.brackets)
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RulesMetadata {
        &self.metadata
    }

    /// Returns the work schedule.
    pub fn schedule(&self) -> &WorkSchedule {
        &self.schedule
    }

    /// Returns the contribution configuration.
    pub fn contributions(&self) -> &ContributionsConfig {
        &self.contributions
    }

    /// Returns the SSS table.
    pub fn sss_table(&self) -> &[SssBracket] {
        &self.contributions.sss
    }

    /// Returns the tax brackets.
    pub fn tax_brackets(&self) -> &[TaxBracket] {
        &self.tax.brackets
    }
}

impl Default for PreviewRules {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sss_table_has_ten_steps_and_a_cap() {
        let rules = PreviewRules::reference();
        let table = rules.sss_table();

        assert_eq!(table.len(), 11);
        assert_eq!(table[0].upper_bound, Some(1000.0));
        assert_eq!(table[0].contribution, 50.0);
        assert_eq!(table[9].upper_bound, Some(10_000.0));
        assert_eq!(table[9].contribution, 500.0);
        assert_eq!(table[10].upper_bound, None);
        assert_eq!(table[10].contribution, 500.0);
    }

    #[test]
    fn test_reference_rules_pass_validation() {
        let reference = PreviewRules::reference();
        let rebuilt = PreviewRules::new(
            reference.metadata().clone(),
            reference.schedule().clone(),
            reference.contributions().clone(),
            TaxConfig {
                brackets: reference.tax_brackets().to_vec(),
            },
        );
        assert_eq!(rebuilt.unwrap(), reference);
    }

    #[test]
    fn test_zero_hours_per_day_is_rejected() {
        let reference = PreviewRules::reference();
        let mut schedule = reference.schedule().clone();
        schedule.hours_per_day = 0.0;

        let result = PreviewRules::new(
            reference.metadata().clone(),
            schedule,
            reference.contributions().clone(),
            TaxConfig {
                brackets: reference.tax_brackets().to_vec(),
            },
        );

        match result {
            Err(EngineError::InvalidRules { table, message }) => {
                assert_eq!(table, "schedule");
                assert!(message.contains("hours_per_day"));
            }
            other => panic!("Expected InvalidRules error, got {:?}", other),
        }
    }

    #[test]
    fn test_tax_rule_deserializes_from_tagged_yaml() {
        let yaml = r#"
upper_bound: 400000
rule:
  kind: progressive
  base: 0
  floor: 250000
  rate: 0.20
"#;
        let bracket: TaxBracket = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(bracket.upper_bound, Some(400_000.0));
        assert_eq!(
            bracket.rule,
            TaxRule::Progressive {
                base: 0.0,
                floor: 250_000.0,
                rate: 0.20
            }
        );
    }

    #[test]
    fn test_open_ended_bracket_omits_upper_bound() {
        let bracket: SssBracket = serde_yaml::from_str("contribution: 500").unwrap();
        assert_eq!(bracket.upper_bound, None);
    }
}
