//! Response types for the payroll preview API.
//!
//! This module defines the success bodies, with every amount rounded to
//! cents, and the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::format::{BreakdownPanel, PreviewDisplay, format_peso, round_to_cents};
use crate::models::{
    AuditTrace, PayrollBreakdown, PayrollPreview, PayrollSummary, PayslipNumber, PreviewInput,
};

/// Preview amounts rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewAmounts {
    /// Hourly rate.
    pub hourly_rate: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Gross pay.
    pub gross_pay: Decimal,
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub tax: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Net pay.
    pub net_pay: Decimal,
}

impl PreviewAmounts {
    /// Rounds every amount of a preview.
    pub fn from_preview(p: &PayrollPreview) -> EngineResult<Self> {
        Ok(Self {
            hourly_rate: round_to_cents("hourly_rate", p.hourly_rate)?,
            overtime_pay: round_to_cents("overtime_pay", p.overtime_pay)?,
            gross_pay: round_to_cents("gross_pay", p.gross_pay)?,
            sss: round_to_cents("sss", p.sss)?,
            philhealth: round_to_cents("philhealth", p.philhealth)?,
            pagibig: round_to_cents("pagibig", p.pagibig)?,
            tax: round_to_cents("tax", p.tax)?,
            total_deductions: round_to_cents("total_deductions", p.total_deductions)?,
            net_pay: round_to_cents("net_pay", p.net_pay)?,
        })
    }
}

/// Response body for the `/preview` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Name and version of the rules applied.
    pub rules: String,
    /// The inputs after coercion.
    pub input: PreviewInput,
    /// The preview rounded to cents.
    pub amounts: PreviewAmounts,
    /// Values for the gross and net pay fields.
    pub display: PreviewDisplay,
    /// The earnings and deductions panel.
    pub panel: BreakdownPanel,
    /// Rules applied, in order.
    pub audit_trace: AuditTrace,
}

/// Payroll breakdown amounts rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollAmounts {
    /// Basic salary.
    pub basic_salary: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Holiday pay.
    pub holiday_pay: Decimal,
    /// Night differential.
    pub night_differential: Decimal,
    /// Gross pay.
    pub gross_pay: Decimal,
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub tax: Decimal,
    /// Total deductions.
    pub total_deductions: Decimal,
    /// Net pay.
    pub net_pay: Decimal,
}

impl PayrollAmounts {
    /// Rounds every amount of a breakdown.
    pub fn from_breakdown(b: &PayrollBreakdown) -> EngineResult<Self> {
        Ok(Self {
            basic_salary: round_to_cents("basic_salary", b.basic_salary)?,
            overtime_pay: round_to_cents("overtime_pay", b.overtime_pay)?,
            holiday_pay: round_to_cents("holiday_pay", b.holiday_pay)?,
            night_differential: round_to_cents("night_differential", b.night_differential)?,
            gross_pay: round_to_cents("gross_pay", b.gross_pay)?,
            sss: round_to_cents("sss", b.sss)?,
            philhealth: round_to_cents("philhealth", b.philhealth)?,
            pagibig: round_to_cents("pagibig", b.pagibig)?,
            tax: round_to_cents("tax", b.tax)?,
            total_deductions: round_to_cents("total_deductions", b.total_deductions)?,
            net_pay: round_to_cents("net_pay", b.net_pay)?,
        })
    }
}

/// Response body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The employee the payroll is for.
    pub employee_id: u32,
    /// The payslip number for the employee and period.
    pub payslip_number: PayslipNumber,
    /// The breakdown rounded to cents.
    pub amounts: PayrollAmounts,
    /// Rules applied, in order.
    pub audit_trace: AuditTrace,
}

/// Response body for the `/summary` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Number of entries summarised.
    pub total_employees: usize,
    /// Sum of gross pay.
    pub total_gross_pay: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net_pay: Decimal,
    /// Sum of SSS contributions.
    pub total_sss: Decimal,
    /// Sum of PhilHealth contributions.
    pub total_philhealth: Decimal,
    /// Sum of Pag-IBIG contributions.
    pub total_pagibig: Decimal,
    /// Sum of withholding tax.
    pub total_tax: Decimal,
    /// Net pay total in peso currency style.
    pub total_net_pay_display: String,
}

impl SummaryResponse {
    /// Rounds every total of a summary.
    pub fn from_summary(s: &PayrollSummary) -> EngineResult<Self> {
        let total_net_pay = round_to_cents("total_net_pay", s.total_net_pay)?;
        Ok(Self {
            total_employees: s.total_employees,
            total_gross_pay: round_to_cents("total_gross_pay", s.total_gross_pay)?,
            total_deductions: round_to_cents("total_deductions", s.total_deductions)?,
            total_net_pay,
            total_sss: round_to_cents("total_sss", s.total_sss)?,
            total_philhealth: round_to_cents("total_philhealth", s.total_philhealth)?,
            total_pagibig: round_to_cents("total_pagibig", s.total_pagibig)?,
            total_tax: round_to_cents("total_tax", s.total_tax)?,
            total_net_pay_display: format_peso(total_net_pay),
        })
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidRules { .. } | EngineError::InvalidSetting { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
                }
            }
            EngineError::AmountOutOfRange { field, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "AMOUNT_OUT_OF_RANGE",
                    message,
                    format!("The computed '{}' cannot be shown to the cent", field),
                ),
            },
            EngineError::InvalidPayslip { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PAYSLIP",
                    message,
                    "Employee ids must fit the four-digit payslip suffix",
                ),
            },
        }
    }
}
