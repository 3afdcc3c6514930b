//! Recurring deposit maturity with quarterly compounding.
//!
//! Banks compound RD interest quarterly, so each monthly instalment grows for
//! its own remaining term expressed in quarters, which is usually fractional.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::round_rupee;

/// Input for a recurring-deposit calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositInput {
    /// Amount deposited each month.
    pub monthly_deposit: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_rate_percent: Decimal,
    /// Number of monthly instalments.
    pub tenure_months: u32,
}

/// The result of a recurring-deposit calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringDepositResult {
    /// Total of all instalments.
    pub invested_amount: Decimal,
    /// Maturity value less instalments.
    pub interest_earned: Decimal,
    /// Value at maturity.
    pub maturity_amount: Decimal,
}

/// Calculates the maturity value of a recurring deposit.
///
/// `Σ deposit × (1 + rate/400)^(remaining months / 3)` over every instalment,
/// where the first instalment has the whole tenure remaining and the last has
/// one month.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{RecurringDepositInput, calculate_recurring_deposit};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_recurring_deposit(&RecurringDepositInput {
///     monthly_deposit: dec!(5000),
///     annual_rate_percent: dec!(7),
///     tenure_months: 60,
/// });
/// assert_eq!(result.invested_amount, dec!(300000));
/// assert_eq!(result.maturity_amount, dec!(359664));
/// ```
pub fn calculate_recurring_deposit(input: &RecurringDepositInput) -> RecurringDepositResult {
    let quarterly_rate = input.annual_rate_percent / dec!(400);
    let monthly_factor = month_growth_factor(quarterly_rate);

    // The instalment with m months remaining grows by monthly_factor^m.
    let mut maturity = Decimal::ZERO;
    let mut growth = Decimal::ONE;
    for _ in 0..input.tenure_months {
        growth = growth.saturating_mul(monthly_factor);
        maturity = maturity.saturating_add(input.monthly_deposit.saturating_mul(growth));
    }

    let invested = input
        .monthly_deposit
        .saturating_mul(Decimal::from(input.tenure_months));

    RecurringDepositResult {
        invested_amount: round_rupee(invested),
        interest_earned: round_rupee(maturity.saturating_sub(invested)),
        maturity_amount: round_rupee(maturity),
    }
}

/// Returns `(1 + quarterly_rate)^(1/3)`, the growth over one month.
fn month_growth_factor(quarterly_rate: Decimal) -> Decimal {
    if quarterly_rate.is_zero() {
        return Decimal::ONE;
    }
    (Decimal::ONE + quarterly_rate)
        .checked_powd(Decimal::ONE / dec!(3))
        .unwrap_or(Decimal::ONE)
}
