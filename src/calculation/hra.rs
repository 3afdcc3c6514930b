//! House Rent Allowance exemption under Section 10(13A).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::round_rupee;

/// Input for an HRA exemption calculation. All amounts are monthly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HraInput {
    /// Basic salary plus dearness allowance.
    pub basic_da: Decimal,
    /// HRA received from the employer.
    pub hra_received: Decimal,
    /// Rent actually paid.
    pub rent_paid: Decimal,
    /// Whether the rented home is in Delhi, Mumbai, Kolkata or Chennai.
    #[serde(default)]
    pub is_metro: bool,
}

/// The annual HRA exemption and the three limits it is the minimum of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraResult {
    /// Actual HRA received in the year.
    pub actual_hra: Decimal,
    /// 50% (metro) or 40% (non-metro) of annual basic plus DA.
    pub percent_of_basic: Decimal,
    /// Annual rent less 10% of annual basic plus DA, floored at zero.
    pub rent_over_ten_percent: Decimal,
    /// Exempt HRA: the least of the three limits.
    pub exempt_hra: Decimal,
    /// HRA received less the exemption.
    pub taxable_hra: Decimal,
}

/// Calculates the annual HRA exemption from monthly figures.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{HraInput, calculate_hra};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_hra(&HraInput {
///     basic_da: dec!(50000),
///     hra_received: dec!(20000),
///     rent_paid: dec!(25000),
///     is_metro: true,
/// });
/// assert_eq!(result.exempt_hra, dec!(240000));
/// assert_eq!(result.taxable_hra, dec!(0));
/// ```
pub fn calculate_hra(input: &HraInput) -> HraResult {
    let annual_basic = input.basic_da.saturating_mul(dec!(12));
    let actual_hra = input.hra_received.saturating_mul(dec!(12));
    let annual_rent = input.rent_paid.saturating_mul(dec!(12));

    let basic_share = if input.is_metro { dec!(50) } else { dec!(40) };
    let percent_of_basic = annual_basic.saturating_mul(basic_share) / dec!(100);
    let rent_over_ten_percent = annual_rent
        .saturating_sub(annual_basic / dec!(10))
        .max(Decimal::ZERO);

    let exempt = actual_hra.min(percent_of_basic).min(rent_over_ten_percent);

    HraResult {
        actual_hra: round_rupee(actual_hra),
        percent_of_basic: round_rupee(percent_of_basic),
        rent_over_ten_percent: round_rupee(rent_over_ten_percent),
        exempt_hra: round_rupee(exempt),
        taxable_hra: round_rupee(actual_hra.saturating_sub(exempt)),
    }
}
