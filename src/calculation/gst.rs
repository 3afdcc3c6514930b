//! Goods and Services Tax on a transaction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::round_rupee;

use super::compounding::saturating_div;

/// Whether the amount entered includes GST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstMode {
    /// GST is added on top of the amount.
    #[default]
    Exclusive,
    /// The amount already contains GST.
    Inclusive,
}

/// Input for a GST calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstInput {
    /// Amount entered.
    pub amount: Decimal,
    /// GST rate as a percentage (5, 12, 18 or 28 in practice).
    pub rate: Decimal,
    /// How to read `amount`.
    #[serde(default)]
    pub mode: GstMode,
}

/// The result of a GST calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstResult {
    /// Pre-tax amount.
    pub original_amount: Decimal,
    /// Total GST.
    pub gst_amount: Decimal,
    /// Central share, half of the GST.
    pub cgst: Decimal,
    /// State share, half of the GST.
    pub sgst: Decimal,
    /// Amount including GST.
    pub total_amount: Decimal,
}

/// Splits an amount into its pre-tax value and GST.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{GstInput, GstMode, calculate_gst};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_gst(&GstInput {
///     amount: dec!(11800),
///     rate: dec!(18),
///     mode: GstMode::Inclusive,
/// });
/// assert_eq!(result.original_amount, dec!(10000));
/// assert_eq!(result.cgst, dec!(900));
/// ```
pub fn calculate_gst(input: &GstInput) -> GstResult {
    let (original, gst) = match input.mode {
        GstMode::Exclusive => (
            input.amount,
            input.amount.saturating_mul(input.rate) / dec!(100),
        ),
        GstMode::Inclusive => {
            let original = saturating_div(
                input.amount.saturating_mul(dec!(100)),
                dec!(100).saturating_add(input.rate),
            );
            (original, input.amount.saturating_sub(original))
        }
    };
    let half = gst / dec!(2);

    GstResult {
        original_amount: round_rupee(original),
        gst_amount: round_rupee(gst),
        cgst: round_rupee(half),
        sgst: round_rupee(half),
        total_amount: round_rupee(original.saturating_add(gst)),
    }
}
