//! Compounding primitives shared by the loan and investment calculators.
//!
//! Everything here works on unrounded values; rounding happens only in the
//! calculators' results. Results that would overflow `Decimal` saturate at
//! `Decimal::MAX` (or `Decimal::MIN`) instead of panicking, and the
//! calculators use the same saturating arithmetic on their inputs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Converts an annual percentage into a monthly rate (`annual / 12 / 100`).
pub(crate) fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / dec!(12) / dec!(100)
}

/// Converts a tenure in years into whole months, rounding to the nearest month.
///
/// Negative tenures count as zero months.
pub(crate) fn tenure_months(tenure_years: Decimal) -> u32 {
    tenure_years
        .max(Decimal::ZERO)
        .saturating_mul(dec!(12))
        .round()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Returns `(1 + rate)^periods`, or `None` when it does not fit in a `Decimal`.
pub(crate) fn growth_factor(rate: Decimal, periods: u32) -> Option<Decimal> {
    (Decimal::ONE + rate).checked_powu(u64::from(periods))
}

/// Standard amortizing-loan instalment `P·r·(1+r)^n / ((1+r)^n − 1)`.
///
/// A zero rate spreads the principal evenly; zero months yields zero.
pub(crate) fn emi_amount(principal: Decimal, rate: Decimal, months: u32) -> Decimal {
    if months == 0 {
        return Decimal::ZERO;
    }
    if rate.is_zero() {
        return principal / Decimal::from(months);
    }

    match growth_factor(rate, months) {
        Some(factor) => saturating_div(
            principal.saturating_mul(rate).saturating_mul(factor),
            factor.saturating_sub(Decimal::ONE),
        ),
        // (1+r)^n / ((1+r)^n − 1) tends to 1
        None => principal.saturating_mul(rate),
    }
}

/// Future value of an annuity due: `P · ((1+r)^n − 1) / r · (1+r)`.
///
/// Contributions are made at the start of each period. A zero rate is a plain
/// sum of contributions.
pub(crate) fn annuity_due_future_value(amount: Decimal, rate: Decimal, periods: u32) -> Decimal {
    if rate.is_zero() {
        return amount.saturating_mul(Decimal::from(periods));
    }

    growth_factor(rate, periods)
        .and_then(|factor| amount.checked_mul(factor.saturating_sub(Decimal::ONE)))
        .and_then(|grown| grown.checked_div(rate))
        .and_then(|value| value.checked_mul(Decimal::ONE + rate))
        .unwrap_or_else(|| saturated(amount.is_sign_negative()))
}

/// Compound growth of a single amount: `amount · (1 + rate)^periods`.
pub(crate) fn compound(amount: Decimal, rate: Decimal, periods: u32) -> Decimal {
    growth_factor(rate, periods)
        .and_then(|factor| amount.checked_mul(factor))
        .unwrap_or_else(|| saturated(amount.is_sign_negative()))
}

/// `numerator / denominator`, saturating on overflow. Dividing by zero yields
/// zero.
pub(crate) fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    let negative = numerator.is_sign_negative() != denominator.is_sign_negative();
    numerator
        .checked_div(denominator)
        .unwrap_or_else(|| saturated(negative))
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}
