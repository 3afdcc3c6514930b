//! Income-tax calculation for both Indian tax regimes.
//!
//! This module provides the progressive slab computation and the comparison
//! between the new regime (Section 115BAC) and the old regime.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::{RegimeConfig, SlabTable, TaxConfig};
use crate::models::round_rupee;

/// Applies a progressive slab table to an income.
///
/// Each slab whose lower bound is below the income taxes the part of the
/// income inside `[lower, min(income, upper)]` at the slab rate. The result is
/// rounded to the nearest rupee.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::compute_tax;
/// use yojana_engine::config::{NEW_REGIME_SLABS, SlabTable};
/// use rust_decimal_macros::dec;
///
/// let slabs = SlabTable::new(NEW_REGIME_SLABS.to_vec());
/// // 5% of 4L..8L plus 10% of 8L..10L
/// assert_eq!(compute_tax(dec!(1000000), &slabs), dec!(40000));
/// assert_eq!(compute_tax(dec!(0), &slabs), dec!(0));
/// ```
pub fn compute_tax(income: Decimal, slabs: &SlabTable) -> Decimal {
    let mut tax = Decimal::ZERO;

    for slab in slabs.slabs() {
        if income <= slab.lower {
            break;
        }
        let top = match slab.upper {
            Some(upper) => income.min(upper),
            None => income,
        };
        let taxed = top.saturating_sub(slab.lower).saturating_mul(slab.rate) / dec!(100);
        tax = tax.saturating_add(taxed);
    }

    round_rupee(tax)
}

/// The tax regime a taxpayer opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// The default regime under Section 115BAC.
    New,
    /// The regime with Chapter VI-A deductions and exemptions.
    Old,
}

/// Input for the income-tax regime comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    /// Gross annual income.
    pub income: Decimal,
    /// Section 80C deductions (old regime only).
    #[serde(default)]
    pub deductions_80c: Decimal,
    /// HRA exemption (old regime only).
    #[serde(default)]
    pub hra_exemption: Decimal,
    /// Any other deductions such as 80D or 24(b) (old regime only).
    #[serde(default)]
    pub other_deductions: Decimal,
}

/// Tax payable under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeTax {
    /// Income after deductions.
    pub taxable_income: Decimal,
    /// Slab tax after the Section 87A rebate.
    pub tax: Decimal,
    /// Section 87A rebate granted.
    pub rebate: Decimal,
    /// Health and education cess.
    pub cess: Decimal,
    /// Tax plus cess.
    pub total_tax: Decimal,
}

/// The result of comparing both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// Tax under the new regime.
    pub new_regime: RegimeTax,
    /// Tax under the old regime.
    pub old_regime: RegimeTax,
    /// The regime with the lower total; ties favour the new regime.
    pub recommendation: Regime,
    /// Difference between the two totals.
    pub savings: Decimal,
}

/// Computes tax for one regime from its taxable income.
pub(crate) fn regime_tax(
    taxable_income: Decimal,
    regime: &RegimeConfig,
    cess_percent: Decimal,
) -> RegimeTax {
    let slab_tax = compute_tax(taxable_income, &regime.slabs);

    let rebate = if taxable_income <= regime.rebate_income_limit {
        slab_tax.min(regime.max_rebate)
    } else {
        Decimal::ZERO
    };
    let tax = slab_tax.saturating_sub(rebate).max(Decimal::ZERO);
    let cess = tax.saturating_mul(cess_percent) / dec!(100);

    RegimeTax {
        taxable_income: round_rupee(taxable_income),
        tax: round_rupee(tax),
        rebate: round_rupee(rebate),
        cess: round_rupee(cess),
        total_tax: round_rupee(tax.saturating_add(cess)),
    }
}

/// Taxable income under the new regime: only the standard deduction applies.
pub(crate) fn new_regime_taxable(income: Decimal, config: &TaxConfig) -> Decimal {
    income
        .saturating_sub(config.new_regime.standard_deduction)
        .max(Decimal::ZERO)
}

/// Compares the tax payable under the new and old regimes.
///
/// Deductions are not validated; callers pass non-negative amounts.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{IncomeTaxInput, Regime, calculate_income_tax};
/// use yojana_engine::config::TaxConfig;
/// use rust_decimal_macros::dec;
///
/// let input = IncomeTaxInput {
///     income: dec!(800000),
///     deductions_80c: dec!(150000),
///     hra_exemption: dec!(0),
///     other_deductions: dec!(0),
/// };
/// let result = calculate_income_tax(&input, &TaxConfig::default());
///
/// assert_eq!(result.new_regime.total_tax, dec!(0));
/// assert_eq!(result.old_regime.total_tax, dec!(33800));
/// assert_eq!(result.recommendation, Regime::New);
/// ```
pub fn calculate_income_tax(input: &IncomeTaxInput, config: &TaxConfig) -> IncomeTaxResult {
    let new_taxable = new_regime_taxable(input.income, config);
    let new_regime = regime_tax(new_taxable, &config.new_regime, config.cess_percent);

    let old_taxable = input
        .income
        .saturating_sub(input.deductions_80c)
        .saturating_sub(input.hra_exemption)
        .saturating_sub(input.other_deductions)
        .saturating_sub(config.old_regime.standard_deduction)
        .max(Decimal::ZERO);
    let old_regime = regime_tax(old_taxable, &config.old_regime, config.cess_percent);

    let recommendation = if new_regime.total_tax <= old_regime.total_tax {
        Regime::New
    } else {
        Regime::Old
    };
    let savings = old_regime
        .total_tax
        .saturating_sub(new_regime.total_tax)
        .abs();

    IncomeTaxResult {
        new_regime,
        old_regime,
        recommendation,
        savings,
    }
}
