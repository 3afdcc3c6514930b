//! Response types for the calculator API.
//!
//! This module defines the success envelope, the per-calculator result union
//! and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{
    CarLoanResult, EmiResult, EpfResult, GratuityResult, GstResult, HomeLoanResult, HraResult,
    IncomeTaxResult, LoanEligibilityResult, LumpsumResult, NpsResult, RecurringDepositResult,
    SalaryResult, SavingsSchemeResult, SipResult, TdsResult,
};
use crate::error::EngineError;
use crate::models::EligibilityProfile;

/// Version reported in every response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The result of any calculator, serialized without a wrapper.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CalculationOutput {
    /// Income-tax regime comparison.
    IncomeTax(IncomeTaxResult),
    /// EMI.
    Emi(EmiResult),
    /// Car-loan EMI.
    CarLoan(CarLoanResult),
    /// Home-loan EMI with amortization schedule.
    HomeLoan(HomeLoanResult),
    /// Home-loan eligibility.
    HomeLoanEligibility(LoanEligibilityResult),
    /// SIP projection.
    Sip(SipResult),
    /// Recurring deposit maturity.
    RecurringDeposit(RecurringDepositResult),
    /// EPF projection.
    Epf(EpfResult),
    /// NPS projection.
    Nps(NpsResult),
    /// PPF or SSY projection.
    SavingsScheme(SavingsSchemeResult),
    /// Lumpsum projection.
    Lumpsum(LumpsumResult),
    /// HRA exemption.
    Hra(HraResult),
    /// Gratuity.
    Gratuity(GratuityResult),
    /// TDS on a payment.
    Tds(TdsResult),
    /// CTC breakdown.
    Salary(SalaryResult),
    /// GST split.
    Gst(GstResult),
}

/// Success envelope for `POST /calculate`.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// Unique ID of this calculation.
    pub calculation_id: Uuid,
    /// Name of the calculator that ran.
    pub calculator: &'static str,
    /// When the calculation ran.
    pub calculated_at: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: &'static str,
    /// The calculator's result.
    pub result: CalculationOutput,
}

impl CalculationResponse {
    /// Wraps a calculator result in a fresh envelope.
    pub fn new(calculator: &'static str, result: CalculationOutput) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            calculator,
            calculated_at: Utc::now(),
            engine_version: ENGINE_VERSION,
            result,
        }
    }
}

/// Response body for `POST /profile/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The validated profile, echoed back.
    pub profile: EligibilityProfile,
    /// Whether the applicant counts as a senior citizen.
    pub is_senior_citizen: bool,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is serving.
    pub status: String,
    /// Engine version.
    pub engine_version: String,
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

    /// Creates an unknown-calculator error response from a serde message.
    pub fn unknown_calculator(message: impl Into<String>) -> Self {
        Self::with_details(
            "UNKNOWN_CALCULATOR",
            message,
            "The `calculator` field must name one of the supported calculators",
        )
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

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { table, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("Table '{}': {}", table, message),
                ),
            },
            EngineError::InvalidProfile { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PROFILE",
                    format!("Invalid profile field '{}': {}", field, message),
                    "The eligibility profile contains invalid information",
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}': {}", field, message),
                    "The calculator input is outside the accepted range",
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::GstResult;
    use rust_decimal_macros::dec;

    #[test]
    fn test_api_error_skips_empty_details() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_profile_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidProfile {
            field: "age".to_string(),
            message: "must be at most 120".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_PROFILE");
        assert!(api_error.error.message.contains("age"));
    }

    #[test]
    fn test_invalid_input_maps_to_validation_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidInput {
            field: "tenure_months".to_string(),
            message: "must be at most 1200".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("tenure_months"));
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            table: "new_regime".to_string(),
            message: "gap".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_output_serializes_without_variant_wrapper() {
        let response = CalculationResponse::new(
            "gst",
            CalculationOutput::Gst(GstResult {
                original_amount: dec!(100),
                gst_amount: dec!(18),
                cgst: dec!(9),
                sgst: dec!(9),
                total_amount: dec!(118),
            }),
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["calculator"], "gst");
        assert_eq!(json["result"]["total_amount"], "118");
        assert_eq!(json["engine_version"], ENGINE_VERSION);
        assert!(json["calculation_id"].is_string());
    }
}
