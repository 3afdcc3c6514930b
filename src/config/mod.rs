//! Configuration loading and management for the calculators.
//!
//! Statutory tables (tax slabs, TDS rates, scheme rates) are immutable values
//! built once, either from the built-in FY 2025-26 defaults or from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use yojana_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/fy2025-26").unwrap();
//! println!("PPF rate: {}%", loader.config().schemes().ppf_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConfig, IncomeType, InputLimits, LoanPolicy, NEW_REGIME_SLABS, OLD_REGIME_SLABS,
    PolicyConfig, RegimeConfig, SalaryStructure, SchemeRates, Slab, SlabTable, TaxConfig,
    TdsConfig, TdsRule,
};
