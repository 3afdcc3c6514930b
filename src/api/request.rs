//! Request types for the calculator API.
//!
//! This module defines the JSON request body for the `/calculate` endpoint:
//! the calculator name and that calculator's input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    CarLoanInput, EmiInput, EpfInput, GratuityInput, GstInput, HraInput, IncomeTaxInput,
    LoanEligibilityInput, LumpsumInput, NpsInput, PpfInput, RecurringDepositInput, SalaryInput,
    SipInput, SsyInput, TdsInput,
};
use crate::config::InputLimits;
use crate::error::EngineResult;

/// Request body for the `/calculate` endpoint.
///
/// ```json
/// { "calculator": "emi", "input": { "principal": 2500000, "annual_rate_percent": 8.5, "tenure_years": 20 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "input", rename_all = "snake_case")]
pub enum CalculationRequest {
    /// Compare tax under both regimes.
    IncomeTax(IncomeTaxInput),
    /// EMI on any amortizing loan.
    Emi(EmiInput),
    /// EMI on a car loan after down payment.
    CarLoan(CarLoanInput),
    /// Home-loan EMI with a yearly amortization schedule.
    HomeLoan(EmiInput),
    /// Largest home loan a borrower can service.
    HomeLoanEligibility(LoanEligibilityInput),
    /// Monthly SIP projection.
    Sip(SipInput),
    /// Recurring deposit maturity.
    RecurringDeposit(RecurringDepositInput),
    /// EPF balance at retirement.
    Epf(EpfInput),
    /// NPS corpus and pension.
    Nps(NpsInput),
    /// Sukanya Samriddhi Yojana maturity.
    Ssy(SsyInput),
    /// PPF maturity.
    Ppf(PpfInput),
    /// One-time investment growth.
    Lumpsum(LumpsumInput),
    /// HRA exemption.
    Hra(HraInput),
    /// Gratuity payable.
    Gratuity(GratuityInput),
    /// TDS on a payment.
    Tds(TdsInput),
    /// CTC to in-hand breakdown.
    Salary(SalaryInput),
    /// GST split.
    Gst(GstInput),
}

impl CalculationRequest {
    /// Returns the snake_case calculator name used in the `calculator` field.
    pub fn calculator_name(&self) -> &'static str {
        match self {
            CalculationRequest::IncomeTax(_) => "income_tax",
            CalculationRequest::Emi(_) => "emi",
            CalculationRequest::CarLoan(_) => "car_loan",
            CalculationRequest::HomeLoan(_) => "home_loan",
            CalculationRequest::HomeLoanEligibility(_) => "home_loan_eligibility",
            CalculationRequest::Sip(_) => "sip",
            CalculationRequest::RecurringDeposit(_) => "recurring_deposit",
            CalculationRequest::Epf(_) => "epf",
            CalculationRequest::Nps(_) => "nps",
            CalculationRequest::Ssy(_) => "ssy",
            CalculationRequest::Ppf(_) => "ppf",
            CalculationRequest::Lumpsum(_) => "lumpsum",
            CalculationRequest::Hra(_) => "hra",
            CalculationRequest::Gratuity(_) => "gratuity",
            CalculationRequest::Tds(_) => "tds",
            CalculationRequest::Salary(_) => "salary",
            CalculationRequest::Gst(_) => "gst",
        }
    }

    /// Checks every tenure and amount of the input against `limits`.
    ///
    /// Calculators accept any value, but tenures size their loops and
    /// schedules, so the API rejects inputs beyond the configured bounds.
    pub fn validate(&self, limits: &InputLimits) -> EngineResult<()> {
        match self {
            CalculationRequest::IncomeTax(input) => check_amounts(limits, &[
                ("income", input.income),
                ("deductions_80c", input.deductions_80c),
                ("hra_exemption", input.hra_exemption),
                ("other_deductions", input.other_deductions),
            ]),
            CalculationRequest::Emi(input) | CalculationRequest::HomeLoan(input) => {
                check_amounts(limits, &[
                    ("principal", input.principal),
                    ("annual_rate_percent", input.annual_rate_percent),
                ])?;
                limits.check_tenure_years("tenure_years", input.tenure_years)
            }
            CalculationRequest::CarLoan(input) => {
                check_amounts(limits, &[
                    ("car_price", input.car_price),
                    ("down_payment", input.down_payment),
                    ("annual_rate_percent", input.annual_rate_percent),
                ])?;
                limits.check_tenure_years("tenure_years", input.tenure_years)
            }
            CalculationRequest::HomeLoanEligibility(input) => {
                check_amounts(limits, &[
                    ("monthly_income", input.monthly_income),
                    ("existing_emis", input.existing_emis),
                    ("annual_rate_percent", input.annual_rate_percent),
                ])?;
                limits.check_tenure_years("tenure_years", input.tenure_years)
            }
            CalculationRequest::Sip(input) => {
                check_amounts(limits, &[
                    ("monthly_amount", input.monthly_amount),
                    ("annual_return_percent", input.annual_return_percent),
                ])?;
                limits.check_years("years", input.years)
            }
            CalculationRequest::RecurringDeposit(input) => {
                check_amounts(limits, &[
                    ("monthly_deposit", input.monthly_deposit),
                    ("annual_rate_percent", input.annual_rate_percent),
                ])?;
                limits.check_months("tenure_months", input.tenure_months)
            }
            CalculationRequest::Epf(input) => {
                check_amounts(limits, &[
                    ("monthly_basic", input.monthly_basic),
                    (
                        "employee_contribution_percent",
                        input.employee_contribution_percent,
                    ),
                    (
                        "employer_contribution_percent",
                        input.employer_contribution_percent,
                    ),
                    ("annual_increment_percent", input.annual_increment_percent),
                    ("current_balance", input.current_balance),
                ])?;
                limits.check_years("years_to_retirement", input.years_to_retirement)
            }
            CalculationRequest::Nps(input) => {
                check_amounts(limits, &[
                    ("monthly_contribution", input.monthly_contribution),
                    ("expected_return_percent", input.expected_return_percent),
                    ("annuity_percent", input.annuity_percent),
                ])?;
                limits.check_years(
                    "retirement_age",
                    input.retirement_age.saturating_sub(input.current_age),
                )
            }
            CalculationRequest::Ssy(input) => {
                check_amounts(limits, &[("yearly_deposit", input.yearly_deposit)])?;
                limits.check_years("child_age", input.child_age)
            }
            CalculationRequest::Ppf(input) => {
                check_amounts(limits, &[("yearly_deposit", input.yearly_deposit)])?;
                limits.check_years("tenure_years", input.tenure_years)
            }
            CalculationRequest::Lumpsum(input) => {
                check_amounts(limits, &[
                    ("amount", input.amount),
                    ("annual_return_percent", input.annual_return_percent),
                ])?;
                limits.check_years("years", input.years)
            }
            CalculationRequest::Hra(input) => check_amounts(limits, &[
                ("basic_da", input.basic_da),
                ("hra_received", input.hra_received),
                ("rent_paid", input.rent_paid),
            ]),
            CalculationRequest::Gratuity(input) => {
                check_amounts(limits, &[("basic_da", input.basic_da)])?;
                limits.check_years("years_of_service", input.years_of_service)
            }
            CalculationRequest::Tds(input) => check_amounts(limits, &[("amount", input.amount)]),
            CalculationRequest::Salary(input) => {
                check_amounts(limits, &[("annual_ctc", input.annual_ctc)])
            }
            CalculationRequest::Gst(input) => {
                check_amounts(limits, &[("amount", input.amount), ("rate", input.rate)])
            }
        }
    }
}

fn check_amounts(limits: &InputLimits, fields: &[(&str, Decimal)]) -> EngineResult<()> {
    fields
        .iter()
        .try_for_each(|(field, amount)| limits.check_amount(field, *amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::GstMode;
    use crate::config::IncomeType;
    use crate::error::EngineError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_adjacently_tagged_request() {
        let json = r#"{
            "calculator": "emi",
            "input": { "principal": 2500000, "annual_rate_percent": 8.5, "tenure_years": 20 }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            CalculationRequest::Emi(EmiInput {
                principal: dec!(2500000),
                annual_rate_percent: dec!(8.5),
                tenure_years: dec!(20),
            })
        );
        assert_eq!(request.calculator_name(), "emi");
    }

    #[test]
    fn test_name_matches_serialized_tag() {
        let request = CalculationRequest::Gst(GstInput {
            amount: dec!(100),
            rate: dec!(18),
            mode: GstMode::Exclusive,
        });
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["calculator"], request.calculator_name());
    }

    #[test]
    fn test_multi_word_tags_are_snake_case() {
        let json = r#"{
            "calculator": "tds",
            "input": { "amount": 50000, "income_type": "fd_interest", "has_pan": false }
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();

        match request {
            CalculationRequest::Tds(input) => {
                assert_eq!(input.income_type, IncomeType::FdInterest);
                assert!(!input.has_pan);
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_ordinary_inputs() {
        let request = CalculationRequest::HomeLoan(EmiInput {
            principal: dec!(2500000),
            annual_rate_percent: dec!(8.5),
            tenure_years: dec!(20),
        });
        assert!(request.validate(&InputLimits::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_tenures() {
        let limits = InputLimits::default();
        let home_loan = CalculationRequest::HomeLoan(EmiInput {
            principal: dec!(2500000),
            annual_rate_percent: dec!(8.5),
            tenure_years: dec!(1000000000),
        });
        let ppf = CalculationRequest::Ppf(PpfInput {
            yearly_deposit: dec!(150000),
            tenure_years: u32::MAX,
        });
        let rd = CalculationRequest::RecurringDeposit(RecurringDepositInput {
            monthly_deposit: dec!(5000),
            annual_rate_percent: dec!(7),
            tenure_months: 1201,
        });

        for request in [home_loan, ppf, rd] {
            match request.validate(&limits) {
                Err(EngineError::InvalidInput { field, .. }) => {
                    assert!(field.starts_with("tenure"), "unexpected field {}", field)
                }
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_huge_amounts() {
        let request = CalculationRequest::Sip(SipInput {
            monthly_amount: dec!(10000000000000000000000000000),
            annual_return_percent: dec!(12),
            years: 10,
        });

        match request.validate(&InputLimits::default()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "monthly_amount"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_calculator_is_rejected() {
        let json = r#"{ "calculator": "crypto", "input": {} }"#;
        let error = serde_json::from_str::<CalculationRequest>(json).unwrap_err();
        assert!(error.to_string().contains("unknown variant"));
    }
}
