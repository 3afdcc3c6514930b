//! Public Provident Fund and Sukanya Samriddhi Yojana projections.
//!
//! Both schemes credit interest once a year on the balance after that year's
//! deposit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::SchemeRates;
use crate::models::{YearlyBreakdown, round_rupee};

/// Year-by-year accumulation shared by the annual-deposit schemes.
struct Projection {
    balance: Decimal,
    total_deposit: Decimal,
    total_interest: Decimal,
    yearly_breakdown: Vec<YearlyBreakdown>,
}

fn project_annual_deposits<F>(years: u32, rate_percent: Decimal, deposit_for_year: F) -> Projection
where
    F: Fn(u32) -> Decimal,
{
    let mut projection = Projection {
        balance: Decimal::ZERO,
        total_deposit: Decimal::ZERO,
        total_interest: Decimal::ZERO,
        yearly_breakdown: Vec::new(),
    };

    for year in 1..=years {
        let deposit = deposit_for_year(year);
        projection.balance = projection.balance.saturating_add(deposit);
        let interest = projection.balance.saturating_mul(rate_percent) / dec!(100);
        projection.balance = projection.balance.saturating_add(interest);

        projection.total_deposit = projection.total_deposit.saturating_add(deposit);
        projection.total_interest = projection.total_interest.saturating_add(interest);
        projection
            .yearly_breakdown
            .push(YearlyBreakdown::rounded(year, deposit, interest, projection.balance));
    }

    projection
}

/// Input for a PPF projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfInput {
    /// Amount deposited each year.
    pub yearly_deposit: Decimal,
    /// Account tenure in years (15, extendable in blocks up to 50).
    pub tenure_years: u32,
}

/// The result of a PPF or SSY projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsSchemeResult {
    /// Value at maturity.
    pub maturity_amount: Decimal,
    /// Sum of all deposits.
    pub total_deposit: Decimal,
    /// Sum of all interest credited.
    pub total_interest: Decimal,
    /// Years until maturity.
    pub tenure_years: u32,
    /// One row per scheme year.
    pub yearly_breakdown: Vec<YearlyBreakdown>,
}

impl From<(Projection, u32)> for SavingsSchemeResult {
    fn from((projection, tenure_years): (Projection, u32)) -> Self {
        Self {
            maturity_amount: round_rupee(projection.balance),
            total_deposit: round_rupee(projection.total_deposit),
            total_interest: round_rupee(projection.total_interest),
            tenure_years,
            yearly_breakdown: projection.yearly_breakdown,
        }
    }
}

/// Projects a PPF account at the statutory PPF rate.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{PpfInput, calculate_ppf};
/// use yojana_engine::config::SchemeRates;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_ppf(
///     &PpfInput { yearly_deposit: dec!(150000), tenure_years: 15 },
///     &SchemeRates::default(),
/// );
/// assert_eq!(result.maturity_amount, dec!(4068209));
/// assert_eq!(result.total_deposit, dec!(2250000));
/// ```
pub fn calculate_ppf(input: &PpfInput, rates: &SchemeRates) -> SavingsSchemeResult {
    let projection =
        project_annual_deposits(input.tenure_years, rates.ppf_rate, |_| input.yearly_deposit);
    (projection, input.tenure_years).into()
}

/// Input for a Sukanya Samriddhi Yojana projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsyInput {
    /// Amount deposited each year during the deposit period.
    pub yearly_deposit: Decimal,
    /// Age of the girl child when the account is opened.
    pub child_age: u32,
}

/// Projects an SSY account to maturity.
///
/// The account runs for `min(21, 21 − child_age + 1)` years. Deposits are made
/// only in the first 15 years, but interest accrues on the whole balance every
/// year until maturity.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{SsyInput, calculate_ssy};
/// use yojana_engine::config::SchemeRates;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_ssy(
///     &SsyInput { yearly_deposit: dec!(150000), child_age: 0 },
///     &SchemeRates::default(),
/// );
/// assert_eq!(result.tenure_years, 21);
/// assert_eq!(result.maturity_amount, dec!(7182119));
/// ```
pub fn calculate_ssy(input: &SsyInput, rates: &SchemeRates) -> SavingsSchemeResult {
    let years = rates
        .ssy_max_years
        .min(rates.ssy_max_years.saturating_add(1).saturating_sub(input.child_age));

    let projection = project_annual_deposits(years, rates.ssy_rate, |year| {
        if year <= rates.ssy_deposit_years {
            input.yearly_deposit
        } else {
            Decimal::ZERO
        }
    });
    (projection, years).into()
}
