//! HTTP request handlers for the calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_car_loan, calculate_emi, calculate_epf, calculate_gratuity, calculate_gst,
    calculate_home_loan, calculate_home_loan_eligibility, calculate_hra, calculate_income_tax,
    calculate_lumpsum, calculate_nps, calculate_ppf, calculate_recurring_deposit,
    calculate_salary, calculate_sip, calculate_ssy, calculate_tds,
};
use crate::config::CalculatorConfig;
use crate::models::EligibilityProfile;

use super::request::CalculationRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationOutput, CalculationResponse, ENGINE_VERSION,
    HealthResponse, ProfileResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/profile/validate", post(validate_profile_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculator name with its input and returns the result in a
/// response envelope.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let calculator = request.calculator_name();
    info!(correlation_id = %correlation_id, calculator, "Processing calculation request");

    if let Err(err) = request.validate(state.config().limits()) {
        warn!(correlation_id = %correlation_id, calculator, error = %err, "Input rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    let result = perform_calculation(&request, state.config());
    let response = CalculationResponse::new(calculator, result);

    info!(
        correlation_id = %correlation_id,
        calculation_id = %response.calculation_id,
        calculator,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /profile/validate endpoint.
///
/// Validates an eligibility profile before it is submitted for scheme
/// matching.
async fn validate_profile_handler(
    payload: Result<Json<EligibilityProfile>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let profile = match payload {
        Ok(Json(profile)) => profile,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = profile.validate() {
        warn!(correlation_id = %correlation_id, error = %err, "Profile rejected");
        return ApiErrorResponse::from(err).into_response();
    }

    info!(correlation_id = %correlation_id, state = %profile.state, "Profile validated");
    let is_senior_citizen = profile.is_senior_citizen();
    (
        StatusCode::OK,
        Json(ProfileResponse {
            profile,
            is_senior_citizen,
        }),
    )
        .into_response()
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        engine_version: ENGINE_VERSION.to_string(),
    })
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else if is_unknown_calculator(&body_text) {
                ApiError::unknown_calculator(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

    ApiErrorResponse::bad_request(error).into_response()
}

/// Whether a data error came from the `calculator` tag itself rather than
/// from an enum inside `input`.
///
/// The rejection text carries the JSON path of the failing value ahead of the
/// serde message, e.g. `calculator: unknown variant ...`.
fn is_unknown_calculator(body_text: &str) -> bool {
    body_text.contains("calculator: unknown variant")
}

/// Runs the requested calculator against the loaded tables.
pub(crate) fn perform_calculation(
    request: &CalculationRequest,
    config: &CalculatorConfig,
) -> CalculationOutput {
    match request {
        CalculationRequest::IncomeTax(input) => {
            CalculationOutput::IncomeTax(calculate_income_tax(input, config.tax()))
        }
        CalculationRequest::Emi(input) => CalculationOutput::Emi(calculate_emi(input)),
        CalculationRequest::CarLoan(input) => CalculationOutput::CarLoan(calculate_car_loan(input)),
        CalculationRequest::HomeLoan(input) => {
            CalculationOutput::HomeLoan(calculate_home_loan(input))
        }
        CalculationRequest::HomeLoanEligibility(input) => CalculationOutput::HomeLoanEligibility(
            calculate_home_loan_eligibility(input, config.loan()),
        ),
        CalculationRequest::Sip(input) => CalculationOutput::Sip(calculate_sip(input)),
        CalculationRequest::RecurringDeposit(input) => {
            CalculationOutput::RecurringDeposit(calculate_recurring_deposit(input))
        }
        CalculationRequest::Epf(input) => {
            CalculationOutput::Epf(calculate_epf(input, config.schemes()))
        }
        CalculationRequest::Nps(input) => {
            CalculationOutput::Nps(calculate_nps(input, config.schemes()))
        }
        CalculationRequest::Ssy(input) => {
            CalculationOutput::SavingsScheme(calculate_ssy(input, config.schemes()))
        }
        CalculationRequest::Ppf(input) => {
            CalculationOutput::SavingsScheme(calculate_ppf(input, config.schemes()))
        }
        CalculationRequest::Lumpsum(input) => CalculationOutput::Lumpsum(calculate_lumpsum(input)),
        CalculationRequest::Hra(input) => CalculationOutput::Hra(calculate_hra(input)),
        CalculationRequest::Gratuity(input) => {
            CalculationOutput::Gratuity(calculate_gratuity(input))
        }
        CalculationRequest::Tds(input) => CalculationOutput::Tds(calculate_tds(input, config.tds())),
        CalculationRequest::Salary(input) => CalculationOutput::Salary(calculate_salary(
            input,
            config.salary(),
            config.tax(),
        )),
        CalculationRequest::Gst(input) => CalculationOutput::Gst(calculate_gst(input)),
    }
}
