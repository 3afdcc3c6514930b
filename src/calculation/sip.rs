//! Systematic Investment Plan and NPS projections.
//!
//! Both use the future value of a monthly annuity due: contributions are made
//! at the start of each month, so the final contribution still earns one
//! month of return.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::SchemeRates;
use crate::models::round_rupee;

use super::compounding::{annuity_due_future_value, monthly_rate};

/// Input for a SIP projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    /// Amount invested each month.
    pub monthly_amount: Decimal,
    /// Expected annual return as a percentage.
    pub annual_return_percent: Decimal,
    /// Investment horizon in years.
    pub years: u32,
}

/// The result of a SIP projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipResult {
    /// Total amount contributed.
    pub invested_amount: Decimal,
    /// Future value less the amount contributed.
    pub estimated_returns: Decimal,
    /// Projected value at the end of the horizon.
    pub future_value: Decimal,
}

/// Projects the value of a monthly SIP.
///
/// `FV = P · ((1+r)^n − 1) / r · (1+r)` with `r = annual return / 12 / 100`
/// and `n = years × 12`. A zero return gives `P × n`.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{SipInput, calculate_sip};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_sip(&SipInput {
///     monthly_amount: dec!(10000),
///     annual_return_percent: dec!(12),
///     years: 10,
/// });
/// assert_eq!(result.future_value, dec!(2323391));
/// assert_eq!(result.invested_amount, dec!(1200000));
/// ```
pub fn calculate_sip(input: &SipInput) -> SipResult {
    let months = input.years.saturating_mul(12);
    let invested = input.monthly_amount.saturating_mul(Decimal::from(months));
    let future_value = annuity_due_future_value(
        input.monthly_amount,
        monthly_rate(input.annual_return_percent),
        months,
    );

    SipResult {
        invested_amount: round_rupee(invested),
        estimated_returns: round_rupee(future_value.saturating_sub(invested)),
        future_value: round_rupee(future_value),
    }
}

fn default_annuity_percent() -> Decimal {
    dec!(40)
}

/// Input for an NPS retirement projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsInput {
    /// Amount contributed each month.
    pub monthly_contribution: Decimal,
    /// Current age in years.
    pub current_age: u32,
    /// Age at retirement.
    pub retirement_age: u32,
    /// Expected annual return as a percentage.
    pub expected_return_percent: Decimal,
    /// Share of the corpus used to buy an annuity, as a percentage.
    #[serde(default = "default_annuity_percent")]
    pub annuity_percent: Decimal,
}

/// The result of an NPS projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpsResult {
    /// Total amount contributed until retirement.
    pub total_invested: Decimal,
    /// Corpus less contributions.
    pub total_gains: Decimal,
    /// Corpus at retirement.
    pub total_corpus: Decimal,
    /// Part of the corpus withdrawn at retirement.
    pub lump_sum: Decimal,
    /// Part of the corpus used to buy the annuity.
    pub annuity_corpus: Decimal,
    /// Estimated monthly pension from the annuity.
    pub monthly_pension: Decimal,
}

/// Projects an NPS corpus and the pension it buys.
///
/// The corpus uses the SIP formula over `retirement_age − current_age` years.
/// The pension assumes the fixed annuity yield from [`SchemeRates`].
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{NpsInput, calculate_nps};
/// use yojana_engine::config::SchemeRates;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_nps(
///     &NpsInput {
///         monthly_contribution: dec!(5000),
///         current_age: 30,
///         retirement_age: 60,
///         expected_return_percent: dec!(10),
///         annuity_percent: dec!(40),
///     },
///     &SchemeRates::default(),
/// );
/// assert_eq!(result.total_invested, dec!(1800000));
/// assert_eq!(result.monthly_pension, dec!(22793));
/// ```
pub fn calculate_nps(input: &NpsInput, rates: &SchemeRates) -> NpsResult {
    let months = input
        .retirement_age
        .saturating_sub(input.current_age)
        .saturating_mul(12);
    let invested = input
        .monthly_contribution
        .saturating_mul(Decimal::from(months));
    let corpus = annuity_due_future_value(
        input.monthly_contribution,
        monthly_rate(input.expected_return_percent),
        months,
    );

    let annuity_corpus = corpus.saturating_mul(input.annuity_percent) / dec!(100);
    let lump_sum = corpus.saturating_sub(annuity_corpus);
    let monthly_pension =
        annuity_corpus.saturating_mul(rates.nps_annuity_yield) / dec!(100) / dec!(12);

    NpsResult {
        total_invested: round_rupee(invested),
        total_gains: round_rupee(corpus.saturating_sub(invested)),
        total_corpus: round_rupee(corpus),
        lump_sum: round_rupee(lump_sum),
        annuity_corpus: round_rupee(annuity_corpus),
        monthly_pension: round_rupee(monthly_pension),
    }
}
