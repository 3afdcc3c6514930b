//! Loan instalment calculations.
//!
//! This module provides the standard EMI calculator and the car-loan variant
//! that finances the on-road price less a down payment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::round_rupee;

use super::compounding::{emi_amount, monthly_rate, tenure_months};

/// Input for an EMI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiInput {
    /// Loan principal.
    pub principal: Decimal,
    /// Annual interest rate as a percentage (e.g. 8.5 for 8.5%).
    pub annual_rate_percent: Decimal,
    /// Tenure in years; fractional years are rounded to whole months.
    pub tenure_years: Decimal,
}

/// The result of an EMI calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Monthly instalment.
    pub emi: Decimal,
    /// All instalments over the tenure.
    pub total_payment: Decimal,
    /// Total payment less principal.
    pub total_interest: Decimal,
    /// Number of monthly instalments.
    pub tenure_months: u32,
}

/// Calculates the EMI of an amortizing loan.
///
/// Uses `EMI = P·r·(1+r)^n / ((1+r)^n − 1)` with `r = annual rate / 12 / 100`
/// and `n` the tenure in months. A zero rate gives `P / n`; a zero tenure gives
/// an all-zero result.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{EmiInput, calculate_emi};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_emi(&EmiInput {
///     principal: dec!(2500000),
///     annual_rate_percent: dec!(8.5),
///     tenure_years: dec!(20),
/// });
/// assert_eq!(result.emi, dec!(21696));
/// assert_eq!(result.tenure_months, 240);
/// ```
pub fn calculate_emi(input: &EmiInput) -> EmiResult {
    let months = tenure_months(input.tenure_years);
    let emi = emi_amount(
        input.principal,
        monthly_rate(input.annual_rate_percent),
        months,
    );
    let total_payment = emi.saturating_mul(Decimal::from(months));

    EmiResult {
        emi: round_rupee(emi),
        total_payment: round_rupee(total_payment),
        total_interest: round_rupee(total_payment.saturating_sub(input.principal)),
        tenure_months: months,
    }
}

/// Input for a car-loan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarLoanInput {
    /// On-road price of the vehicle.
    pub car_price: Decimal,
    /// Down payment made upfront.
    #[serde(default)]
    pub down_payment: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_rate_percent: Decimal,
    /// Tenure in years.
    pub tenure_years: Decimal,
}

/// The result of a car-loan calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarLoanResult {
    /// Amount financed.
    pub loan_amount: Decimal,
    /// Monthly instalment.
    pub emi: Decimal,
    /// All instalments over the tenure.
    pub total_payment: Decimal,
    /// Total payment less the amount financed.
    pub total_interest: Decimal,
    /// Down payment plus all instalments.
    pub total_cost: Decimal,
    /// Number of monthly instalments.
    pub tenure_months: u32,
}

/// Calculates the EMI on a car loan for the price less the down payment.
///
/// A down payment above the price finances nothing.
pub fn calculate_car_loan(input: &CarLoanInput) -> CarLoanResult {
    let loan_amount = input
        .car_price
        .saturating_sub(input.down_payment)
        .max(Decimal::ZERO);
    let months = tenure_months(input.tenure_years);
    let emi = emi_amount(loan_amount, monthly_rate(input.annual_rate_percent), months);
    let total_payment = emi.saturating_mul(Decimal::from(months));

    CarLoanResult {
        loan_amount: round_rupee(loan_amount),
        emi: round_rupee(emi),
        total_payment: round_rupee(total_payment),
        total_interest: round_rupee(total_payment.saturating_sub(loan_amount)),
        total_cost: round_rupee(input.down_payment.saturating_add(total_payment)),
        tenure_months: months,
    }
}
