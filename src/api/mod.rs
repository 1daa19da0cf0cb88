//! HTTP API module for the payroll preview engine.
//!
//! This module provides the REST endpoints for previewing pay, computing a
//! payroll breakdown with its payslip number, and totalling several runs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FieldValue, PayrollRequest, PreviewRequest, SummaryRequest};
pub use response::{
    ApiError, ApiErrorResponse, PayrollAmounts, PayrollResponse, PreviewAmounts, PreviewResponse,
    SummaryResponse,
};
pub use state::AppState;
