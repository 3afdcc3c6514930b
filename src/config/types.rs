//! Configuration types for the calculators.
//!
//! This module contains the strongly-typed statutory tables that are either
//! built in (the [`Default`] impls, FY 2025-26 values) or deserialized from
//! YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single bracket of a progressive tax table.
///
/// Income in `[lower, upper)` is taxed at `rate` percent. An `upper` of `None`
/// marks the open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slab {
    /// The lower bound of the bracket.
    pub lower: Decimal,
    /// The upper bound of the bracket, or `None` for the top bracket.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// The marginal rate for this bracket, as a percentage.
    pub rate: Decimal,
}

impl Slab {
    const fn new(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> Self {
        Self { lower, upper, rate }
    }
}

/// New-regime slabs (Section 115BAC) for FY 2025-26.
pub const NEW_REGIME_SLABS: [Slab; 7] = [
    Slab::new(dec!(0), Some(dec!(400000)), dec!(0)),
    Slab::new(dec!(400000), Some(dec!(800000)), dec!(5)),
    Slab::new(dec!(800000), Some(dec!(1200000)), dec!(10)),
    Slab::new(dec!(1200000), Some(dec!(1600000)), dec!(15)),
    Slab::new(dec!(1600000), Some(dec!(2000000)), dec!(20)),
    Slab::new(dec!(2000000), Some(dec!(2400000)), dec!(25)),
    Slab::new(dec!(2400000), None, dec!(30)),
];

/// Old-regime slabs for individuals below 60.
pub const OLD_REGIME_SLABS: [Slab; 4] = [
    Slab::new(dec!(0), Some(dec!(250000)), dec!(0)),
    Slab::new(dec!(250000), Some(dec!(500000)), dec!(5)),
    Slab::new(dec!(500000), Some(dec!(1000000)), dec!(20)),
    Slab::new(dec!(1000000), None, dec!(30)),
];

/// An ordered progressive slab table covering `[0, ∞)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlabTable(Vec<Slab>);

impl SlabTable {
    /// Creates a slab table without validating it.
    ///
    /// Use [`SlabTable::validate`] for tables coming from outside the crate.
    pub fn new(slabs: Vec<Slab>) -> Self {
        Self(slabs)
    }

    /// Returns the slabs in ascending order.
    pub fn slabs(&self) -> &[Slab] {
        &self.0
    }

    /// Checks the table invariants.
    ///
    /// The first slab must start at zero, each slab must start where the
    /// previous one ended, bounds must strictly increase, only the last slab may
    /// be open-ended and no rate may be negative.
    ///
    /// # Example
    ///
    /// ```
    /// use yojana_engine::config::{NEW_REGIME_SLABS, SlabTable};
    ///
    /// let table = SlabTable::new(NEW_REGIME_SLABS.to_vec());
    /// assert!(table.validate("new_regime").is_ok());
    /// ```
    pub fn validate(&self, name: &str) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidConfig {
            table: name.to_string(),
            message,
        };

        let first = self
            .0
            .first()
            .ok_or_else(|| invalid("slab table is empty".to_string()))?;
        if !first.lower.is_zero() {
            return Err(invalid(format!(
                "first slab must start at 0, starts at {}",
                first.lower
            )));
        }

        let last_index = self.0.len() - 1;
        for (index, slab) in self.0.iter().enumerate() {
            if slab.rate.is_sign_negative() {
                return Err(invalid(format!("slab {} has negative rate {}", index, slab.rate)));
            }

            match slab.upper {
                Some(upper) if upper <= slab.lower => {
                    return Err(invalid(format!(
                        "slab {} upper bound {} is not above lower bound {}",
                        index, upper, slab.lower
                    )));
                }
                Some(_) if index == last_index => {
                    return Err(invalid("last slab must be unbounded".to_string()));
                }
                None if index != last_index => {
                    return Err(invalid(format!("slab {} is unbounded but not last", index)));
                }
                _ => {}
            }

            if let Some(next) = self.0.get(index + 1) {
                if slab.upper != Some(next.lower) {
                    return Err(invalid(format!(
                        "slab {} does not start where slab {} ends",
                        index + 1,
                        index
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Parameters for one income-tax regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    /// Progressive slab table.
    pub slabs: SlabTable,
    /// Flat standard deduction on salary income.
    pub standard_deduction: Decimal,
    /// Section 87A: rebate applies when taxable income is at or below this.
    pub rebate_income_limit: Decimal,
    /// Section 87A: the maximum rebate.
    pub max_rebate: Decimal,
}

impl RegimeConfig {
    /// The built-in new regime (FY 2025-26).
    pub fn new_regime() -> Self {
        Self {
            slabs: SlabTable::new(NEW_REGIME_SLABS.to_vec()),
            standard_deduction: dec!(75000),
            rebate_income_limit: dec!(1200000),
            max_rebate: dec!(60000),
        }
    }

    /// The built-in old regime.
    pub fn old_regime() -> Self {
        Self {
            slabs: SlabTable::new(OLD_REGIME_SLABS.to_vec()),
            standard_deduction: dec!(50000),
            rebate_income_limit: dec!(500000),
            max_rebate: dec!(12500),
        }
    }
}

/// Income-tax configuration for both regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Section 115BAC regime.
    pub new_regime: RegimeConfig,
    /// Regime with Chapter VI-A deductions.
    pub old_regime: RegimeConfig,
    /// Health and education cess, as a percentage of tax.
    pub cess_percent: Decimal,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            new_regime: RegimeConfig::new_regime(),
            old_regime: RegimeConfig::old_regime(),
            cess_percent: dec!(4),
        }
    }
}

impl TaxConfig {
    /// Validates both slab tables.
    pub fn validate(&self) -> EngineResult<()> {
        self.new_regime.slabs.validate("new_regime")?;
        self.old_regime.slabs.validate("old_regime")
    }
}

/// The category of a payment for TDS purposes.
///
/// Unknown income types deserialize to [`IncomeType::Other`], which uses the
/// fallback rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    /// Salary (Section 192).
    Salary,
    /// Interest on fixed deposits (Section 194A).
    FdInterest,
    /// Rent (Section 194-I).
    Rent,
    /// Professional or technical fees (Section 194J).
    Freelance,
    /// Commission or brokerage (Section 194H).
    Commission,
    /// Lottery and game-show winnings (Section 194B).
    Lottery,
    /// Sale of immovable property (Section 194-IA).
    PropertySale,
    /// Any other payment.
    #[serde(other)]
    Other,
}

/// Withholding parameters for one income type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsRule {
    /// Rate when the payee has furnished a PAN, as a percentage.
    pub rate: Decimal,
    /// TDS applies only to amounts above this threshold.
    pub threshold: Decimal,
    /// Rate when no PAN is available (Section 206AA).
    pub rate_without_pan: Decimal,
}

impl TdsRule {
    const fn new(rate: Decimal, threshold: Decimal, rate_without_pan: Decimal) -> Self {
        Self {
            rate,
            threshold,
            rate_without_pan,
        }
    }
}

/// TDS rate table keyed by income type, with an explicit fallback rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdsConfig {
    /// Rules per income type.
    pub rules: HashMap<IncomeType, TdsRule>,
    /// Rule used for income types missing from `rules`.
    pub fallback: TdsRule,
}

impl TdsConfig {
    /// Returns the rule for an income type, falling back when it has none.
    pub fn rule(&self, income_type: IncomeType) -> &TdsRule {
        self.rules.get(&income_type).unwrap_or(&self.fallback)
    }
}

impl Default for TdsConfig {
    fn default() -> Self {
        let rules = HashMap::from([
            (IncomeType::Salary, TdsRule::new(dec!(10), dec!(0), dec!(20))),
            (IncomeType::FdInterest, TdsRule::new(dec!(10), dec!(40000), dec!(20))),
            (IncomeType::Rent, TdsRule::new(dec!(10), dec!(240000), dec!(20))),
            (IncomeType::Freelance, TdsRule::new(dec!(10), dec!(30000), dec!(20))),
            (IncomeType::Commission, TdsRule::new(dec!(2), dec!(15000), dec!(20))),
            (IncomeType::Lottery, TdsRule::new(dec!(30), dec!(10000), dec!(30))),
            (IncomeType::PropertySale, TdsRule::new(dec!(1), dec!(5000000), dec!(20))),
        ]);

        Self {
            rules,
            fallback: TdsRule::new(dec!(10), dec!(0), dec!(20)),
        }
    }
}

/// Statutory rates of the government savings schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRates {
    /// Public Provident Fund rate, percent per year.
    pub ppf_rate: Decimal,
    /// Employees' Provident Fund rate, percent per year.
    pub epf_rate: Decimal,
    /// Sukanya Samriddhi Yojana rate, percent per year.
    pub ssy_rate: Decimal,
    /// Years during which SSY deposits are made.
    pub ssy_deposit_years: u32,
    /// Maximum SSY account life in years.
    pub ssy_max_years: u32,
    /// Assumed annuity yield used for NPS pension estimates, percent per year.
    pub nps_annuity_yield: Decimal,
}

impl Default for SchemeRates {
    fn default() -> Self {
        Self {
            ppf_rate: dec!(7.1),
            epf_rate: dec!(8.25),
            ssy_rate: dec!(8.2),
            ssy_deposit_years: 15,
            ssy_max_years: 21,
            nps_annuity_yield: dec!(6),
        }
    }
}

/// Lender underwriting policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPolicy {
    /// Fixed Obligation to Income Ratio cap, as a percentage of monthly income.
    pub foir_percent: Decimal,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            foir_percent: dec!(50),
        }
    }
}

/// Structural ratios used to split a CTC into salary components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// Basic pay as a percentage of CTC.
    pub basic_percent_of_ctc: Decimal,
    /// HRA as a percentage of basic.
    pub hra_percent_of_basic: Decimal,
    /// EPF contribution (each side) as a percentage of basic.
    pub pf_percent_of_basic: Decimal,
    /// Annual professional tax.
    pub professional_tax: Decimal,
}

impl Default for SalaryStructure {
    fn default() -> Self {
        Self {
            basic_percent_of_ctc: dec!(40),
            hra_percent_of_basic: dec!(50),
            pf_percent_of_basic: dec!(12),
            professional_tax: dec!(2400),
        }
    }
}

/// Bounds on the calculator inputs the API accepts.
///
/// Tenures drive loop counts and schedule lengths, so they are capped before a
/// request reaches a calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Longest tenure, horizon or service period in years.
    pub max_tenure_years: u32,
    /// Longest tenure in months.
    pub max_tenure_months: u32,
    /// Largest accepted magnitude of any money amount or percentage.
    pub max_amount: Decimal,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_tenure_years: 100,
            max_tenure_months: 1200,
            max_amount: dec!(1000000000000000),
        }
    }
}

impl InputLimits {
    /// Rejects an amount whose magnitude exceeds `max_amount`.
    pub fn check_amount(&self, field: &str, amount: Decimal) -> EngineResult<()> {
        if amount.abs() > self.max_amount {
            return Err(invalid_input(
                field,
                format!("magnitude must be at most {}", self.max_amount),
            ));
        }
        Ok(())
    }

    /// Rejects a whole number of years above `max_tenure_years`.
    pub fn check_years(&self, field: &str, years: u32) -> EngineResult<()> {
        if years > self.max_tenure_years {
            return Err(invalid_input(
                field,
                format!("must be at most {} years", self.max_tenure_years),
            ));
        }
        Ok(())
    }

    /// Rejects a fractional tenure above `max_tenure_years`.
    pub fn check_tenure_years(&self, field: &str, years: Decimal) -> EngineResult<()> {
        if years > Decimal::from(self.max_tenure_years) {
            return Err(invalid_input(
                field,
                format!("must be at most {} years", self.max_tenure_years),
            ));
        }
        Ok(())
    }

    /// Rejects a number of months above `max_tenure_months`.
    pub fn check_months(&self, field: &str, months: u32) -> EngineResult<()> {
        if months > self.max_tenure_months {
            return Err(invalid_input(
                field,
                format!("must be at most {} months", self.max_tenure_months),
            ));
        }
        Ok(())
    }
}

fn invalid_input(field: &str, message: String) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Policy configuration file structure (schemes.yaml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Savings-scheme rates.
    pub schemes: SchemeRates,
    /// Loan underwriting policy.
    pub loan: LoanPolicy,
    /// CTC split ratios.
    pub salary: SalaryStructure,
    /// Bounds on request inputs.
    #[serde(default)]
    pub limits: InputLimits,
}

/// The complete calculator configuration.
///
/// [`CalculatorConfig::default`] yields the built-in FY 2025-26 tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    tax: TaxConfig,
    tds: TdsConfig,
    policy: PolicyConfig,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(tax: TaxConfig, tds: TdsConfig, policy: PolicyConfig) -> Self {
        Self { tax, tds, policy }
    }

    /// Returns the income-tax configuration.
    pub fn tax(&self) -> &TaxConfig {
        &self.tax
    }

    /// Returns the TDS rate table.
    pub fn tds(&self) -> &TdsConfig {
        &self.tds
    }

    /// Returns the savings-scheme rates.
    pub fn schemes(&self) -> &SchemeRates {
        &self.policy.schemes
    }

    /// Returns the loan underwriting policy.
    pub fn loan(&self) -> &LoanPolicy {
        &self.policy.loan
    }

    /// Returns the CTC split ratios.
    pub fn salary(&self) -> &SalaryStructure {
        &self.policy.salary
    }

    /// Returns the bounds on request inputs.
    pub fn limits(&self) -> &InputLimits {
        &self.policy.limits
    }
}
