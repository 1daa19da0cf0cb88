//! Core data models for the payroll preview engine.

mod audit;
mod payroll;
mod payslip;
mod preview;
mod summary;

pub use audit::{AuditStep, AuditTrace};
pub use payroll::{PayrollBreakdown, PayrollInput};
pub use payslip::PayslipNumber;
pub use preview::{PayrollPreview, PreviewInput, coerce_amount, parse_amount};
pub use summary::PayrollSummary;
