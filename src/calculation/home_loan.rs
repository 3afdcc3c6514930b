//! Home-loan EMI with a year-wise amortization schedule, and home-loan
//! eligibility under a FOIR cap.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::LoanPolicy;
use crate::models::{AmortizationRow, round_rupee};

use super::compounding::{emi_amount, growth_factor, monthly_rate, saturating_div, tenure_months};
use super::emi::EmiInput;

/// The result of a home-loan calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeLoanResult {
    /// Monthly instalment.
    pub emi: Decimal,
    /// All instalments over the tenure.
    pub total_payment: Decimal,
    /// Total payment less principal.
    pub total_interest: Decimal,
    /// Number of monthly instalments.
    pub tenure_months: u32,
    /// One row per loan year.
    pub schedule: Vec<AmortizationRow>,
}

impl HomeLoanResult {
    fn empty(months: u32) -> Self {
        Self {
            emi: Decimal::ZERO,
            total_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            tenure_months: months,
            schedule: Vec::new(),
        }
    }
}

/// Calculates a home-loan EMI and its year-wise amortization schedule.
///
/// The schedule is built from a month-by-month split of each EMI into
/// interest (`balance × r`) and principal. The last year covers only the
/// months that remain, so the schedule ends exactly at the tenure. A
/// non-positive principal or a zero tenure yields an all-zero result with an
/// empty schedule.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{EmiInput, calculate_home_loan};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_home_loan(&EmiInput {
///     principal: dec!(2500000),
///     annual_rate_percent: dec!(8.5),
///     tenure_years: dec!(20),
/// });
/// assert_eq!(result.schedule.len(), 20);
/// assert_eq!(result.schedule.last().unwrap().closing_balance, dec!(0));
/// ```
pub fn calculate_home_loan(input: &EmiInput) -> HomeLoanResult {
    let months = tenure_months(input.tenure_years);
    if input.principal <= Decimal::ZERO || months == 0 {
        return HomeLoanResult::empty(months);
    }

    let rate = monthly_rate(input.annual_rate_percent);
    let emi = emi_amount(input.principal, rate, months);
    let total_payment = emi.saturating_mul(Decimal::from(months));

    let years = months.div_ceil(12);
    let mut schedule = Vec::new();
    let mut balance = input.principal;

    for year in 1..=years {
        let months_in_year = (months - (year - 1) * 12).min(12);
        let opening_balance = balance;
        let mut interest_paid = Decimal::ZERO;
        let mut principal_paid = Decimal::ZERO;

        for _ in 0..months_in_year {
            let interest = balance.saturating_mul(rate);
            let principal = emi.saturating_sub(interest);
            interest_paid = interest_paid.saturating_add(interest);
            principal_paid = principal_paid.saturating_add(principal);
            balance = balance.saturating_sub(principal);
        }

        schedule.push(AmortizationRow {
            year,
            opening_balance: round_rupee(opening_balance.max(Decimal::ZERO)),
            emi_paid: round_rupee(emi.saturating_mul(Decimal::from(months_in_year))),
            interest_paid: round_rupee(interest_paid),
            principal_paid: round_rupee(principal_paid),
            closing_balance: round_rupee(balance.max(Decimal::ZERO)),
        });
    }

    HomeLoanResult {
        emi: round_rupee(emi),
        total_payment: round_rupee(total_payment),
        total_interest: round_rupee(total_payment.saturating_sub(input.principal)),
        tenure_months: months,
        schedule,
    }
}

/// Input for a home-loan eligibility calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanEligibilityInput {
    /// Net monthly income.
    pub monthly_income: Decimal,
    /// EMIs already being paid each month.
    #[serde(default)]
    pub existing_emis: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_rate_percent: Decimal,
    /// Tenure in years.
    pub tenure_years: Decimal,
}

/// The result of a home-loan eligibility calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanEligibilityResult {
    /// Monthly amount available for a new EMI under the FOIR cap.
    pub available_for_emi: Decimal,
    /// Largest principal that EMI can service.
    pub max_loan_amount: Decimal,
    /// All instalments over the tenure at that EMI.
    pub total_payment: Decimal,
    /// Total payment less the maximum loan.
    pub total_interest: Decimal,
    /// Number of monthly instalments.
    pub tenure_months: u32,
}

/// Calculates the largest home loan a borrower can service.
///
/// The affordable EMI is `max(0, income × FOIR − existing EMIs)`; the annuity
/// formula is then inverted to `EMI · ((1+r)^n − 1) / (r·(1+r)^n)`. A zero rate
/// gives `EMI × n`.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{LoanEligibilityInput, calculate_home_loan_eligibility};
/// use yojana_engine::config::LoanPolicy;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_home_loan_eligibility(
///     &LoanEligibilityInput {
///         monthly_income: dec!(100000),
///         existing_emis: dec!(10000),
///         annual_rate_percent: dec!(0),
///         tenure_years: dec!(10),
///     },
///     &LoanPolicy::default(),
/// );
/// assert_eq!(result.available_for_emi, dec!(40000));
/// assert_eq!(result.max_loan_amount, dec!(4800000));
/// ```
pub fn calculate_home_loan_eligibility(
    input: &LoanEligibilityInput,
    policy: &LoanPolicy,
) -> LoanEligibilityResult {
    let available = (input.monthly_income.saturating_mul(policy.foir_percent) / dec!(100))
        .saturating_sub(input.existing_emis)
        .max(Decimal::ZERO);
    let months = tenure_months(input.tenure_years);
    let rate = monthly_rate(input.annual_rate_percent);

    let max_loan = if months == 0 {
        Decimal::ZERO
    } else if rate.is_zero() {
        available.saturating_mul(Decimal::from(months))
    } else {
        match growth_factor(rate, months) {
            Some(factor) => saturating_div(
                available.saturating_mul(factor.saturating_sub(Decimal::ONE)),
                rate.saturating_mul(factor),
            ),
            // perpetuity limit
            None => saturating_div(available, rate),
        }
    };
    let total_payment = available.saturating_mul(Decimal::from(months));

    LoanEligibilityResult {
        available_for_emi: round_rupee(available),
        max_loan_amount: round_rupee(max_loan),
        total_payment: round_rupee(total_payment),
        total_interest: round_rupee(total_payment.saturating_sub(max_loan)),
        tenure_months: months,
    }
}
