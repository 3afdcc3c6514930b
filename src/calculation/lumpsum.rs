//! One-time investment growth.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::round_rupee;

use super::compounding::{compound, saturating_div};

/// Input for a lumpsum projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumInput {
    /// Amount invested once at the start.
    pub amount: Decimal,
    /// Expected annual return as a percentage.
    pub annual_return_percent: Decimal,
    /// Holding period in years.
    pub years: u32,
}

/// The result of a lumpsum projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumpsumResult {
    /// Amount invested.
    pub invested_amount: Decimal,
    /// Value at the end of the holding period.
    pub future_value: Decimal,
    /// Future value less the amount invested.
    pub total_gains: Decimal,
    /// Gains as a whole-number percentage of the amount invested.
    pub absolute_return_percent: Decimal,
}

/// Projects a single investment compounded annually.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{LumpsumInput, calculate_lumpsum};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_lumpsum(&LumpsumInput {
///     amount: dec!(100000),
///     annual_return_percent: dec!(12),
///     years: 10,
/// });
/// assert_eq!(result.future_value, dec!(310585));
/// assert_eq!(result.absolute_return_percent, dec!(211));
/// ```
pub fn calculate_lumpsum(input: &LumpsumInput) -> LumpsumResult {
    let future_value = compound(
        input.amount,
        input.annual_return_percent / dec!(100),
        input.years,
    );
    let gains = future_value.saturating_sub(input.amount);
    let absolute_return = saturating_div(gains, input.amount).saturating_mul(dec!(100));

    LumpsumResult {
        invested_amount: round_rupee(input.amount),
        future_value: round_rupee(future_value),
        total_gains: round_rupee(gains),
        absolute_return_percent: round_rupee(absolute_return),
    }
}
