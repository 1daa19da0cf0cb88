//! HTTP request handlers for the payroll preview API.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_payroll, calculate_preview, compute_payroll};
use crate::error::EngineResult;
use crate::format::{BreakdownPanel, PreviewDisplay};
use crate::models::{PayrollBreakdown, PayrollInput, PayrollSummary, PayslipNumber, PreviewInput};

use super::request::{PayrollRequest, PreviewRequest, SummaryRequest};
use super::response::{
    ApiError, ApiErrorResponse, PayrollAmounts, PayrollResponse, PreviewAmounts, PreviewResponse,
    SummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/preview", post(preview_handler))
        .route("/payroll", post(payroll_handler))
        .route("/summary", post(summary_handler))
        .with_state(state)
}

/// Builds a JSON response with an explicit content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a body rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Turns an engine error into its API response.
fn engine_error_response(err: crate::error::EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    rules: String,
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok",
            rules: state.rules_label(),
        },
    )
}

/// Handler for POST /preview.
///
/// Blank or unparsable fields are read as zero, so any well-formed JSON
/// object produces a preview.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let input = PreviewInput::from(&request);

    match build_preview_response(&state, input) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                basic_salary = input.basic_salary,
                overtime_hours = input.overtime_hours,
                net_pay = %response.amounts.net_pay,
                duration_us = response.audit_trace.duration_us,
                "Preview completed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn build_preview_response(state: &AppState, input: PreviewInput) -> EngineResult<PreviewResponse> {
    let calculation = calculate_preview(&input, state.rules());
    let preview = &calculation.preview;

    Ok(PreviewResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        rules: state.rules_label(),
        input,
        amounts: PreviewAmounts::from_preview(preview)?,
        display: PreviewDisplay::from_preview(preview)?,
        panel: BreakdownPanel::render(input.basic_salary, preview)?,
        audit_trace: calculation.audit_trace,
    })
}

/// Handler for POST /payroll.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match build_payroll_response(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = request.employee_id,
                payslip_number = %response.payslip_number,
                gross_pay = %response.amounts.gross_pay,
                duration_us = response.audit_trace.duration_us,
                "Payroll computed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn build_payroll_response(
    state: &AppState,
    request: &PayrollRequest,
) -> EngineResult<PayrollResponse> {
    let payslip_number = PayslipNumber::generate(request.employee_id, request.period_start)?;
    let calculation = calculate_payroll(&PayrollInput::from(request), state.rules());

    Ok(PayrollResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        employee_id: request.employee_id,
        payslip_number,
        amounts: PayrollAmounts::from_breakdown(&calculation.breakdown)?,
        audit_trace: calculation.audit_trace,
    })
}

/// Handler for POST /summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let breakdowns: Vec<PayrollBreakdown> = request
        .entries
        .iter()
        .map(|entry| compute_payroll(entry, state.rules()))
        .collect();
    let summary = PayrollSummary::from_breakdowns(&breakdowns);

    match SummaryResponse::from_summary(&summary) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employees = response.total_employees,
                total_net_pay = %response.total_net_pay,
                "Summary completed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}
