//! CTC to in-hand salary breakdown.
//!
//! The CTC is split using the ratios in [`SalaryStructure`]. Income tax is
//! estimated under the new regime, which is the default for salaried
//! employees.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::{SalaryStructure, TaxConfig};
use crate::models::round_rupee;

use super::income_tax::{new_regime_taxable, regime_tax};

fn default_include_pf() -> bool {
    true
}

/// Input for a salary breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Annual cost to company.
    pub annual_ctc: Decimal,
    /// Whether the employee is enrolled in EPF.
    #[serde(default = "default_include_pf")]
    pub include_pf: bool,
}

/// Annual salary components and take-home pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Basic pay.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Remainder of the CTC after basic, HRA and employer PF.
    pub special_allowance: Decimal,
    /// Employer's EPF contribution, part of CTC but not paid out.
    pub employer_pf: Decimal,
    /// Employee's EPF contribution, deducted from gross.
    pub employee_pf: Decimal,
    /// State professional tax.
    pub professional_tax: Decimal,
    /// Income tax under the new regime, including cess.
    pub income_tax: Decimal,
    /// CTC less employer PF.
    pub gross_salary: Decimal,
    /// Gross less employee PF, professional tax and income tax, floored at zero.
    pub annual_in_hand: Decimal,
    /// Annual in-hand spread over twelve months.
    pub monthly_in_hand: Decimal,
}

/// Breaks an annual CTC down into components and in-hand pay.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{SalaryInput, calculate_salary};
/// use yojana_engine::config::{SalaryStructure, TaxConfig};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_salary(
///     &SalaryInput { annual_ctc: dec!(1200000), include_pf: true },
///     &SalaryStructure::default(),
///     &TaxConfig::default(),
/// );
/// assert_eq!(result.basic, dec!(480000));
/// assert_eq!(result.income_tax, dec!(0));
/// assert_eq!(result.monthly_in_hand, dec!(90200));
/// ```
pub fn calculate_salary(
    input: &SalaryInput,
    structure: &SalaryStructure,
    tax: &TaxConfig,
) -> SalaryResult {
    let ctc = input.annual_ctc;
    let basic = ctc.saturating_mul(structure.basic_percent_of_ctc) / dec!(100);
    let hra = basic.saturating_mul(structure.hra_percent_of_basic) / dec!(100);
    let pf = if input.include_pf {
        basic.saturating_mul(structure.pf_percent_of_basic) / dec!(100)
    } else {
        Decimal::ZERO
    };
    let special_allowance = ctc
        .saturating_sub(basic)
        .saturating_sub(hra)
        .saturating_sub(pf)
        .max(Decimal::ZERO);
    let gross = ctc.saturating_sub(pf);

    let income_tax = regime_tax(
        new_regime_taxable(ctc, tax),
        &tax.new_regime,
        tax.cess_percent,
    )
    .total_tax;
    let professional_tax = structure.professional_tax;

    let annual_in_hand = gross
        .saturating_sub(pf)
        .saturating_sub(professional_tax)
        .saturating_sub(income_tax)
        .max(Decimal::ZERO);

    SalaryResult {
        basic: round_rupee(basic),
        hra: round_rupee(hra),
        special_allowance: round_rupee(special_allowance),
        employer_pf: round_rupee(pf),
        employee_pf: round_rupee(pf),
        professional_tax: round_rupee(professional_tax),
        income_tax,
        gross_salary: round_rupee(gross),
        annual_in_hand: round_rupee(annual_in_hand),
        monthly_in_hand: round_rupee(annual_in_hand / dec!(12)),
    }
}
