//! Integration tests for the calculator API.
//!
//! Every calculator is driven through `POST /calculate` with the tables
//! loaded from `config/fy2025-26`, covering:
//! - Income-tax regime comparison
//! - Loans (EMI, car loan, home loan schedule, eligibility)
//! - Periodic investments (SIP, RD, EPF, NPS, SSY, PPF) and lumpsum
//! - Salary-side calculators (HRA, gratuity, TDS, salary, GST)
//! - Profile validation, health and error cases

use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use yojana_engine::api::{AppState, create_router};
use yojana_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/fy2025-26").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router_for_test().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Posts a calculation and returns the `result` object of a 200 response.
async fn calculate(calculator: &str, input: Value) -> Value {
    let (status, json) = post("/calculate", json!({ "calculator": calculator, "input": input })).await;
    assert_eq!(status, StatusCode::OK, "unexpected response: {}", json);
    assert_eq!(json["calculator"], calculator);
    json["result"].clone()
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("expected a decimal string, got {}", value));
    assert_eq!(
        Decimal::from_str(actual).unwrap(),
        Decimal::from_str(expected).unwrap(),
        "amount mismatch"
    );
}

// =============================================================================
// Income Tax
// =============================================================================

#[tokio::test]
async fn test_income_tax_rebate_favours_new_regime() {
    let result = calculate(
        "income_tax",
        json!({ "income": 800000, "deductions_80c": 150000 }),
    )
    .await;

    assert_amount(&result["new_regime"]["total_tax"], "0");
    assert_amount(&result["old_regime"]["total_tax"], "33800");
    assert_eq!(result["recommendation"], "new");
    assert_amount(&result["savings"], "33800");
}

#[tokio::test]
async fn test_income_tax_above_rebate_limit() {
    let result = calculate("income_tax", json!({ "income": 1575000 })).await;

    assert_amount(&result["new_regime"]["taxable_income"], "1500000");
    assert_amount(&result["new_regime"]["total_tax"], "109200");
    assert_amount(&result["old_regime"]["total_tax"], "280800");
    assert_amount(&result["savings"], "171600");
}

// =============================================================================
// Loans
// =============================================================================

#[tokio::test]
async fn test_emi_scenario() {
    let result = calculate(
        "emi",
        json!({ "principal": 2500000, "annual_rate_percent": 8.5, "tenure_years": 20 }),
    )
    .await;

    assert_amount(&result["emi"], "21696");
    assert_amount(&result["total_payment"], "5206939");
    assert_eq!(result["tenure_months"], 240);
}

#[tokio::test]
async fn test_car_loan_scenario() {
    let result = calculate(
        "car_loan",
        json!({
            "car_price": 1000000,
            "down_payment": 200000,
            "annual_rate_percent": 9,
            "tenure_years": 5
        }),
    )
    .await;

    assert_amount(&result["loan_amount"], "800000");
    assert_amount(&result["emi"], "16607");
}

#[tokio::test]
async fn test_home_loan_schedule_closes_at_zero() {
    let result = calculate(
        "home_loan",
        json!({ "principal": 2500000, "annual_rate_percent": 8.5, "tenure_years": 20 }),
    )
    .await;

    let schedule = result["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 20);
    assert_amount(&schedule[0]["opening_balance"], "2500000");
    assert_amount(&schedule[19]["closing_balance"], "0");
}

#[tokio::test]
async fn test_home_loan_eligibility_applies_foir() {
    let result = calculate(
        "home_loan_eligibility",
        json!({
            "monthly_income": 100000,
            "existing_emis": 10000,
            "annual_rate_percent": 0,
            "tenure_years": 10
        }),
    )
    .await;

    assert_amount(&result["available_for_emi"], "40000");
    assert_amount(&result["max_loan_amount"], "4800000");
}

// =============================================================================
// Investments
// =============================================================================

#[tokio::test]
async fn test_sip_scenario() {
    let result = calculate(
        "sip",
        json!({ "monthly_amount": 10000, "annual_return_percent": 12, "years": 10 }),
    )
    .await;

    assert_amount(&result["future_value"], "2323391");
    assert_amount(&result["invested_amount"], "1200000");
    assert_amount(&result["estimated_returns"], "1123391");
}

#[tokio::test]
async fn test_recurring_deposit_scenario() {
    let result = calculate(
        "recurring_deposit",
        json!({ "monthly_deposit": 5000, "annual_rate_percent": 7, "tenure_months": 60 }),
    )
    .await;

    assert_amount(&result["maturity_amount"], "359664");
    assert_amount(&result["interest_earned"], "59664");
}

#[tokio::test]
async fn test_epf_uses_default_contribution_rates() {
    let result = calculate(
        "epf",
        json!({
            "monthly_basic": 25000,
            "years_to_retirement": 25,
            "annual_increment_percent": 5
        }),
    )
    .await;

    assert_amount(&result["maturity_amount"], "6059079");
    assert_eq!(result["yearly_breakdown"].as_array().unwrap().len(), 25);
}

#[tokio::test]
async fn test_nps_scenario() {
    let result = calculate(
        "nps",
        json!({
            "monthly_contribution": 5000,
            "current_age": 30,
            "retirement_age": 60,
            "expected_return_percent": 10
        }),
    )
    .await;

    assert_amount(&result["total_corpus"], "11396627");
    assert_amount(&result["monthly_pension"], "22793");
}

#[tokio::test]
async fn test_ssy_scenario() {
    let result = calculate("ssy", json!({ "yearly_deposit": 150000, "child_age": 0 })).await;

    assert_eq!(result["tenure_years"], 21);
    assert_amount(&result["maturity_amount"], "7182119");
    assert_amount(&result["total_deposit"], "2250000");
}

#[tokio::test]
async fn test_ppf_scenario() {
    let result = calculate("ppf", json!({ "yearly_deposit": 150000, "tenure_years": 15 })).await;

    assert_amount(&result["maturity_amount"], "4068209");
    assert_amount(&result["total_interest"], "1818209");
}

#[tokio::test]
async fn test_lumpsum_scenario() {
    let result = calculate(
        "lumpsum",
        json!({ "amount": 100000, "annual_return_percent": 12, "years": 10 }),
    )
    .await;

    assert_amount(&result["future_value"], "310585");
    assert_amount(&result["absolute_return_percent"], "211");
}

// =============================================================================
// Salary-side Calculators
// =============================================================================

#[tokio::test]
async fn test_hra_exemption_is_least_of_three() {
    let result = calculate(
        "hra",
        json!({ "basic_da": 50000, "hra_received": 20000, "rent_paid": 25000, "is_metro": true }),
    )
    .await;

    assert_amount(&result["exempt_hra"], "240000");
    assert_amount(&result["taxable_hra"], "0");
}

#[tokio::test]
async fn test_gratuity_cutoff() {
    let eligible = calculate(
        "gratuity",
        json!({ "basic_da": 52000, "years_of_service": 10, "employee_type": "private" }),
    )
    .await;
    let ineligible = calculate(
        "gratuity",
        json!({ "basic_da": 52000, "years_of_service": 4 }),
    )
    .await;

    assert_eq!(eligible["eligible"], true);
    assert_amount(&eligible["gratuity_amount"], "300000");
    assert_eq!(ineligible["eligible"], false);
    assert_amount(&ineligible["gratuity_amount"], "0");
}

#[tokio::test]
async fn test_tds_without_pan() {
    let result = calculate(
        "tds",
        json!({ "amount": 50000, "income_type": "fd_interest", "has_pan": false }),
    )
    .await;

    assert_amount(&result["tds_rate"], "20");
    assert_amount(&result["tds_amount"], "10000");
    assert_amount(&result["net_amount"], "40000");
    assert_eq!(result["is_applicable"], true);
}

#[tokio::test]
async fn test_salary_breakdown() {
    let result = calculate("salary", json!({ "annual_ctc": 1200000 })).await;

    assert_amount(&result["basic"], "480000");
    assert_amount(&result["employee_pf"], "57600");
    assert_amount(&result["income_tax"], "0");
    assert_amount(&result["monthly_in_hand"], "90200");
}

#[tokio::test]
async fn test_gst_inclusive() {
    let result = calculate(
        "gst",
        json!({ "amount": 11800, "rate": 18, "mode": "inclusive" }),
    )
    .await;

    assert_amount(&result["original_amount"], "10000");
    assert_amount(&result["cgst"], "900");
    assert_amount(&result["sgst"], "900");
}

// =============================================================================
// Profile, Health and Errors
// =============================================================================

#[tokio::test]
async fn test_valid_profile_is_echoed() {
    let (status, json) = post(
        "/profile/validate",
        json!({
            "age": 64,
            "gender": "male",
            "state": "Tamil Nadu",
            "annual_income": 180000,
            "occupation": "farmer",
            "category": "sc",
            "is_bpl": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_senior_citizen"], true);
    assert_eq!(json["profile"]["state"], "Tamil Nadu");
}

#[tokio::test]
async fn test_blank_state_is_rejected() {
    let (status, json) = post(
        "/profile/validate",
        json!({
            "age": 30,
            "gender": "female",
            "state": "  ",
            "annual_income": 500000,
            "occupation": "salaried",
            "category": "general"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_PROFILE");
}

#[tokio::test]
async fn test_health() {
    let (status, json) = send(Request::builder().uri("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_unknown_calculator() {
    let (status, json) = post("/calculate", json!({ "calculator": "fixed_deposit", "input": {} })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNKNOWN_CALCULATOR");
}

#[tokio::test]
async fn test_missing_field() {
    let (status, json) = post("/calculate", json!({ "calculator": "gst", "input": { "amount": 100 } })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_tenures_are_rejected() {
    let requests = [
        json!({
            "calculator": "home_loan",
            "input": { "principal": 2500000, "annual_rate_percent": 8.5, "tenure_years": "1000000000" }
        }),
        json!({
            "calculator": "epf",
            "input": { "monthly_basic": 25000, "years_to_retirement": 4294967295u32 }
        }),
        json!({
            "calculator": "ppf",
            "input": { "yearly_deposit": 150000, "tenure_years": 4294967295u32 }
        }),
        json!({
            "calculator": "recurring_deposit",
            "input": { "monthly_deposit": 5000, "annual_rate_percent": 7, "tenure_months": 4000000000u32 }
        }),
    ];

    for body in requests {
        let (status, json) = post("/calculate", body.clone()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", body);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_longest_accepted_tenure_is_calculated() {
    let result = calculate(
        "recurring_deposit",
        json!({ "monthly_deposit": 1000, "annual_rate_percent": 7, "tenure_months": 1200 }),
    )
    .await;

    assert_amount(&result["invested_amount"], "1200000");
}

#[tokio::test]
async fn test_huge_amount_is_rejected() {
    let (status, json) = post(
        "/calculate",
        json!({
            "calculator": "gratuity",
            "input": { "basic_da": "70000000000000000000000000000", "years_of_service": 10 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("basic_da"));
}

#[tokio::test]
async fn test_missing_content_type() {
    let (status, json) = send(
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .body(Body::from(json!({ "calculator": "gst" }).to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}
