//! Gratuity under the Payment of Gratuity Act.
//!
//! Gratuity is `last drawn basic + DA × 15/26 × completed years`, payable only
//! after five years of continuous service. The tax-free portion is capped at
//! ₹20 lakh for government employees and ₹25 lakh for everyone else.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::round_rupee;

/// Minimum completed years of service for gratuity.
pub const MIN_GRATUITY_SERVICE_YEARS: u32 = 5;

/// Who the employer is, which decides the tax-free cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Central or state government employee.
    Government,
    /// Any other employee covered by the Act.
    #[default]
    Private,
}

impl EmployeeType {
    /// Ceiling on the tax-free gratuity.
    pub fn tax_free_cap(&self) -> Decimal {
        match self {
            EmployeeType::Government => dec!(2000000),
            EmployeeType::Private => dec!(2500000),
        }
    }
}

/// Input for a gratuity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GratuityInput {
    /// Last drawn monthly basic plus DA.
    pub basic_da: Decimal,
    /// Completed years of service.
    pub years_of_service: u32,
    /// Employer category.
    #[serde(default)]
    pub employee_type: EmployeeType,
}

/// The result of a gratuity calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratuityResult {
    /// Whether the service period qualifies for gratuity.
    pub eligible: bool,
    /// Gratuity payable.
    pub gratuity_amount: Decimal,
    /// Portion exempt from tax.
    pub tax_free: Decimal,
    /// Portion above the cap.
    pub taxable: Decimal,
}

/// Calculates gratuity and its tax split.
///
/// # Examples
///
/// ```
/// use yojana_engine::calculation::{EmployeeType, GratuityInput, calculate_gratuity};
/// use rust_decimal_macros::dec;
///
/// let result = calculate_gratuity(&GratuityInput {
///     basic_da: dec!(52000),
///     years_of_service: 10,
///     employee_type: EmployeeType::Private,
/// });
/// assert!(result.eligible);
/// assert_eq!(result.gratuity_amount, dec!(300000));
/// ```
pub fn calculate_gratuity(input: &GratuityInput) -> GratuityResult {
    if input.years_of_service < MIN_GRATUITY_SERVICE_YEARS {
        return GratuityResult {
            eligible: false,
            gratuity_amount: Decimal::ZERO,
            tax_free: Decimal::ZERO,
            taxable: Decimal::ZERO,
        };
    }

    let gratuity = (input.basic_da.saturating_mul(dec!(15)) / dec!(26))
        .saturating_mul(Decimal::from(input.years_of_service));
    let tax_free = gratuity.min(input.employee_type.tax_free_cap());

    GratuityResult {
        eligible: true,
        gratuity_amount: round_rupee(gratuity),
        tax_free: round_rupee(tax_free),
        taxable: round_rupee(gratuity.saturating_sub(tax_free)),
    }
}
