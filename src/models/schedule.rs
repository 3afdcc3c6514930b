//! Year-indexed breakdown rows shared by the loan and savings calculators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round_rupee;

/// One loan year of a home-loan amortization schedule.
///
/// The `closing_balance` of year N equals the `opening_balance` of year N+1.
///
/// # Example
///
/// ```
/// use yojana_engine::models::AmortizationRow;
/// use rust_decimal_macros::dec;
///
/// let row = AmortizationRow {
///     year: 1,
///     opening_balance: dec!(2500000),
///     emi_paid: dec!(260347),
///     interest_paid: dec!(210591),
///     principal_paid: dec!(49756),
///     closing_balance: dec!(2450244),
/// };
/// assert_eq!(row.opening_balance - row.principal_paid, row.closing_balance);
/// assert_eq!(row.interest_paid + row.principal_paid, row.emi_paid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// The loan year, starting at 1.
    pub year: u32,
    /// Outstanding principal at the start of the year.
    pub opening_balance: Decimal,
    /// Total EMI paid during the year.
    pub emi_paid: Decimal,
    /// Interest component of the EMIs paid.
    pub interest_paid: Decimal,
    /// Principal component of the EMIs paid.
    pub principal_paid: Decimal,
    /// Outstanding principal at the end of the year.
    pub closing_balance: Decimal,
}

/// One year of a deposit-scheme projection (PPF, EPF, SSY).
///
/// Interest for the year is computed on the balance after that year's deposit,
/// so `balance = previous balance + deposit + interest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    /// The scheme year, starting at 1.
    pub year: u32,
    /// Amount deposited during the year.
    pub deposit: Decimal,
    /// Interest credited at the end of the year.
    pub interest: Decimal,
    /// Balance at the end of the year.
    pub balance: Decimal,
}

impl YearlyBreakdown {
    /// Builds a row from unrounded accumulators, rounding each field.
    pub(crate) fn rounded(year: u32, deposit: Decimal, interest: Decimal, balance: Decimal) -> Self {
        Self {
            year,
            deposit: round_rupee(deposit),
            interest: round_rupee(interest),
            balance: round_rupee(balance),
        }
    }
}
