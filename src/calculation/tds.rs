//! Tax deducted at source on a single payment.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::{IncomeType, TdsConfig};
use crate::models::round_rupee;

fn default_has_pan() -> bool {
    true
}

/// Input for a TDS calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdsInput {
    /// Payment amount.
    pub amount: Decimal,
    /// What the payment is for.
    pub income_type: IncomeType,
    /// Whether the payee has furnished a PAN.
    #[serde(default = "default_has_pan")]
    pub has_pan: bool,
}

/// The result of a TDS calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsResult {
    /// Rate applied, as a percentage.
    pub tds_rate: Decimal,
    /// Threshold for the income type.
    pub threshold: Decimal,
    /// Whether TDS is deducted at all.
    pub is_applicable: bool,
    /// Tax withheld.
    pub tds_amount: Decimal,
    /// Amount paid out after withholding.
    pub net_amount: Decimal,
}

/// Calculates TDS on a payment.
///
/// Without a PAN the rule's higher rate applies. Nothing is withheld unless
/// the amount exceeds the threshold; salary is always subject to TDS.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{TdsInput, calculate_tds};
/// use yojana_engine::config::{IncomeType, TdsConfig};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_tds(
///     &TdsInput { amount: dec!(50000), income_type: IncomeType::FdInterest, has_pan: false },
///     &TdsConfig::default(),
/// );
/// assert_eq!(result.tds_rate, dec!(20));
/// assert_eq!(result.tds_amount, dec!(10000));
/// assert_eq!(result.net_amount, dec!(40000));
/// ```
pub fn calculate_tds(input: &TdsInput, config: &TdsConfig) -> TdsResult {
    let rule = config.rule(input.income_type);
    let rate = if input.has_pan {
        rule.rate
    } else {
        rule.rate_without_pan
    };

    let is_applicable = input.income_type == IncomeType::Salary || input.amount > rule.threshold;
    let tds = if is_applicable {
        input.amount.saturating_mul(rate) / dec!(100)
    } else {
        Decimal::ZERO
    };

    TdsResult {
        tds_rate: rate,
        threshold: rule.threshold,
        is_applicable,
        tds_amount: round_rupee(tds),
        net_amount: round_rupee(input.amount.saturating_sub(tds)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tds(amount: Decimal, income_type: IncomeType, has_pan: bool) -> TdsResult {
        calculate_tds(
            &TdsInput {
                amount,
                income_type,
                has_pan,
            },
            &TdsConfig::default(),
        )
    }

    #[test]
    fn test_fd_interest_without_pan() {
        let result = tds(dec!(50000), IncomeType::FdInterest, false);

        assert!(result.is_applicable);
        assert_eq!(result.tds_rate, dec!(20));
        assert_eq!(result.threshold, dec!(40000));
        assert_eq!(result.tds_amount, dec!(10000));
        assert_eq!(result.net_amount, dec!(40000));
    }

    #[test]
    fn test_amount_at_threshold_is_not_applicable() {
        let result = tds(dec!(40000), IncomeType::FdInterest, true);

        assert!(!result.is_applicable);
        assert_eq!(result.tds_amount, dec!(0));
        assert_eq!(result.net_amount, dec!(40000));
    }

    #[test]
    fn test_salary_ignores_threshold() {
        let result = tds(dec!(1), IncomeType::Salary, true);
        assert!(result.is_applicable);
    }

    #[test]
    fn test_lottery_rate_unchanged_without_pan() {
        let with_pan = tds(dec!(100000), IncomeType::Lottery, true);
        let without_pan = tds(dec!(100000), IncomeType::Lottery, false);

        assert_eq!(with_pan.tds_rate, dec!(30));
        assert_eq!(without_pan.tds_rate, dec!(30));
        assert_eq!(without_pan.tds_amount, dec!(30000));
    }

    #[test]
    fn test_commission_rate() {
        let result = tds(dec!(20000), IncomeType::Commission, true);
        assert_eq!(result.tds_amount, dec!(400));
    }

    #[test]
    fn test_unknown_income_type_uses_fallback() {
        let input: TdsInput =
            serde_json::from_str(r#"{ "amount": 10000, "income_type": "dividend" }"#).unwrap();
        assert_eq!(input.income_type, IncomeType::Other);
        assert!(input.has_pan);

        let result = calculate_tds(&input, &TdsConfig::default());
        assert_eq!(result.tds_rate, dec!(10));
        assert_eq!(result.tds_amount, dec!(1000));
    }
}
