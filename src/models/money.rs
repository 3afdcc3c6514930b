//! Rupee rounding and display helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);

/// Rounds a value to the nearest whole rupee, halves away from zero.
///
/// Calculators apply this only to their final output fields.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use yojana_engine::models::round_rupee;
///
/// assert_eq!(round_rupee(dec!(21695.5)), dec!(21696));
/// assert_eq!(round_rupee(dec!(21695.49)), dec!(21695));
/// ```
pub fn round_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount using the Indian numbering convention.
///
/// Amounts of one crore and above are shown as `₹X.XX Cr`, one lakh and above
/// as `₹X.XX L`, and anything smaller as whole rupees with digit grouping.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use yojana_engine::models::format_inr;
///
/// assert_eq!(format_inr(dec!(25000000)), "₹2.50 Cr");
/// assert_eq!(format_inr(dec!(2323391)), "₹23.23 L");
/// assert_eq!(format_inr(dec!(21696)), "₹21,696");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    // Band on the rounded figure so 99,999.6 shows as a lakh
    let rupees = round_rupee(amount.abs());

    if rupees >= CRORE {
        format!("{}₹{:.2} Cr", sign, round_two(rupees / CRORE))
    } else if rupees >= LAKH {
        format!("{}₹{:.2} L", sign, round_two(rupees / LAKH))
    } else if rupees.is_zero() {
        "₹0".to_string()
    } else {
        format!("{}₹{}", sign, group_indian(&rupees.to_string()))
    }
}

fn round_two(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Groups an integer digit string as `xx,xx,xxx`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
