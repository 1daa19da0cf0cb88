//! Calculation logic for the payroll preview engine.
//!
//! This module contains the preview calculator and the rules it is built
//! from: hourly rate derivation, premium pay (overtime, holiday, night
//! differential), SSS bracket lookup, flat PhilHealth and Pag-IBIG
//! contributions, and progressive withholding tax. Each rule has a plain
//! function returning the amount and a `calculate_*` variant that also
//! records an audit step.

mod bracket;
mod contributions;
mod hourly_rate;
mod payroll;
mod premium_pay;
mod preview;
mod sss;
mod withholding_tax;

pub use bracket::{Bracket, find_bracket, validate_brackets};
pub use contributions::{
    FlatContribution, FlatContributionResult, calculate_flat_contribution, flat_contribution,
};
pub use hourly_rate::{HourlyRateResult, calculate_hourly_rate, hourly_rate};
pub use payroll::{PayrollCalculation, calculate_payroll, compute_payroll};
pub use premium_pay::{PremiumKind, PremiumPayResult, calculate_premium_pay, premium_pay};
pub use preview::{PreviewCalculation, calculate_preview, compute_preview, compute_preview_with};
pub use sss::{SssContributionResult, calculate_sss, sss_contribution};
pub use withholding_tax::{WithholdingTaxResult, calculate_withholding_tax, progressive_tax};
