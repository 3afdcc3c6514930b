//! Employees' Provident Fund projection.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::SchemeRates;
use crate::models::{YearlyBreakdown, round_rupee};

fn default_employee_percent() -> Decimal {
    dec!(12)
}

// Employer's 12% less the 8.33% diverted to EPS
fn default_employer_percent() -> Decimal {
    dec!(3.67)
}

/// Input for an EPF projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpfInput {
    /// Current monthly basic salary plus DA.
    pub monthly_basic: Decimal,
    /// Employee contribution as a percentage of basic.
    #[serde(default = "default_employee_percent")]
    pub employee_contribution_percent: Decimal,
    /// Employer contribution credited to EPF as a percentage of basic.
    #[serde(default = "default_employer_percent")]
    pub employer_contribution_percent: Decimal,
    /// Years of contribution left.
    pub years_to_retirement: u32,
    /// Expected yearly salary increase as a percentage.
    #[serde(default)]
    pub annual_increment_percent: Decimal,
    /// Existing EPF balance.
    #[serde(default)]
    pub current_balance: Decimal,
}

/// The result of an EPF projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpfResult {
    /// Balance at retirement.
    pub maturity_amount: Decimal,
    /// Employee contributions over the whole period.
    pub total_employee_contribution: Decimal,
    /// Employer contributions over the whole period.
    pub total_employer_contribution: Decimal,
    /// Interest credited over the whole period.
    pub total_interest: Decimal,
    /// One row per year; `deposit` is both contributions combined.
    pub yearly_breakdown: Vec<YearlyBreakdown>,
}

/// Projects an EPF balance to retirement.
///
/// Every year both contributions (12 months at the current basic) are added
/// first, then interest at the EPF rate is credited on the whole balance, and
/// finally the basic grows by the increment for the next year.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{EpfInput, calculate_epf};
/// use yojana_engine::config::SchemeRates;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_epf(
///     &EpfInput {
///         monthly_basic: dec!(20000),
///         employee_contribution_percent: dec!(12),
///         employer_contribution_percent: dec!(3.67),
///         years_to_retirement: 1,
///         annual_increment_percent: dec!(0),
///         current_balance: dec!(0),
///     },
///     &SchemeRates::default(),
/// );
/// assert_eq!(result.total_employee_contribution, dec!(28800));
/// assert_eq!(result.total_employer_contribution, dec!(8808));
/// assert_eq!(result.maturity_amount, dec!(40711));
/// ```
pub fn calculate_epf(input: &EpfInput, rates: &SchemeRates) -> EpfResult {
    let mut basic = input.monthly_basic;
    let mut balance = input.current_balance;
    let mut employee_total = Decimal::ZERO;
    let mut employer_total = Decimal::ZERO;
    let mut interest_total = Decimal::ZERO;
    let mut yearly_breakdown = Vec::new();

    for year in 1..=input.years_to_retirement {
        let annual_basic = basic.saturating_mul(dec!(12));
        let employee =
            annual_basic.saturating_mul(input.employee_contribution_percent) / dec!(100);
        let employer =
            annual_basic.saturating_mul(input.employer_contribution_percent) / dec!(100);
        let deposit = employee.saturating_add(employer);

        balance = balance.saturating_add(deposit);
        let interest = balance.saturating_mul(rates.epf_rate) / dec!(100);
        balance = balance.saturating_add(interest);

        employee_total = employee_total.saturating_add(employee);
        employer_total = employer_total.saturating_add(employer);
        interest_total = interest_total.saturating_add(interest);
        yearly_breakdown.push(YearlyBreakdown::rounded(year, deposit, interest, balance));

        basic = basic.saturating_mul(Decimal::ONE + input.annual_increment_percent / dec!(100));
    }

    EpfResult {
        maturity_amount: round_rupee(balance),
        total_employee_contribution: round_rupee(employee_total),
        total_employer_contribution: round_rupee(employer_total),
        total_interest: round_rupee(interest_total),
        yearly_breakdown,
    }
}
