//! Calculation logic for the financial calculators.
//!
//! Every calculator is a pure function from an input struct (plus any
//! configuration tables it needs) to a result struct. Calculators are total:
//! degenerate inputs such as a zero tenure or a zero rate produce well-defined
//! results instead of errors. Intermediate values keep full `Decimal`
//! precision and only the result fields are rounded to whole rupees.

mod compounding;
mod emi;
mod epf;
mod gratuity;
mod gst;
mod home_loan;
mod hra;
mod income_tax;
mod lumpsum;
mod recurring_deposit;
mod salary;
mod sip;
mod small_savings;
mod tds;

pub use emi::{CarLoanInput, CarLoanResult, EmiInput, EmiResult, calculate_car_loan, calculate_emi};
pub use epf::{EpfInput, EpfResult, calculate_epf};
pub use gratuity::{
    EmployeeType, GratuityInput, GratuityResult, MIN_GRATUITY_SERVICE_YEARS, calculate_gratuity,
};
pub use gst::{GstInput, GstMode, GstResult, calculate_gst};
pub use home_loan::{
    HomeLoanResult, LoanEligibilityInput, LoanEligibilityResult, calculate_home_loan,
    calculate_home_loan_eligibility,
};
pub use hra::{HraInput, HraResult, calculate_hra};
pub use income_tax::{
    IncomeTaxInput, IncomeTaxResult, Regime, RegimeTax, calculate_income_tax, compute_tax,
};
pub use lumpsum::{LumpsumInput, LumpsumResult, calculate_lumpsum};
pub use recurring_deposit::{
    RecurringDepositInput, RecurringDepositResult, calculate_recurring_deposit,
};
pub use salary::{SalaryInput, SalaryResult, calculate_salary};
pub use sip::{NpsInput, NpsResult, SipInput, SipResult, calculate_nps, calculate_sip};
pub use small_savings::{PpfInput, SavingsSchemeResult, SsyInput, calculate_ppf, calculate_ssy};
pub use tds::{TdsInput, TdsResult, calculate_tds};
