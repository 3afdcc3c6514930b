//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory tables
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, PolicyConfig, TaxConfig, TdsConfig};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/fy2025-26/
/// ├── tax.yaml      # Slab tables, standard deductions, rebate, cess
/// ├── tds.yaml      # TDS rates and thresholds per income type
/// └── schemes.yaml  # Scheme rates, loan FOIR cap, CTC split ratios
/// ```
///
/// # Example
///
/// ```no_run
/// use yojana_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fy2025-26")?;
/// println!("Cess: {}%", loader.config().tax().cess_percent);
/// # Ok::<(), yojana_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A slab table breaks its ordering invariants (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tax = Self::load_yaml::<TaxConfig>(&path.join("tax.yaml"))?;
        tax.validate()?;

        let tds = Self::load_yaml::<TdsConfig>(&path.join("tds.yaml"))?;
        let policy = Self::load_yaml::<PolicyConfig>(&path.join("schemes.yaml"))?;

        debug!(
            path = %path.display(),
            tds_rules = tds.rules.len(),
            "Loaded calculator configuration"
        );

        Ok(Self {
            config: CalculatorConfig::new(tax, tds, policy),
        })
    }

    /// Creates a loader around the built-in tables.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IncomeType;
    use rust_decimal_macros::dec;

    fn config_path() -> &'static str {
        "./config/fy2025-26"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_shipped_configuration_matches_builtin_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), ConfigLoader::builtin().config());
    }

    #[test]
    fn test_tds_rules_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rule = loader.config().tds().rule(IncomeType::FdInterest);

        assert_eq!(rule.rate, dec!(10));
        assert_eq!(rule.threshold, dec!(40000));
        assert_eq!(rule.rate_without_pan, dec!(20));
    }

    #[test]
    fn test_scheme_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let schemes = loader.config().schemes();

        assert_eq!(schemes.ppf_rate, dec!(7.1));
        assert_eq!(schemes.epf_rate, dec!(8.25));
        assert_eq!(schemes.ssy_deposit_years, 15);
    }

    #[test]
    fn test_input_limits_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let limits = loader.config().limits();

        assert_eq!(limits.max_tenure_years, 100);
        assert_eq!(limits.max_tenure_months, 1200);
        assert_eq!(limits.max_amount, dec!(1000000000000000));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("tax.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_slab_table_is_rejected() {
        let dir = std::env::temp_dir().join(format!("yojana-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("tax.yaml"),
            r#"
new_regime:
  slabs:
    - { lower: "0", upper: "100", rate: "0" }
    - { lower: "200", rate: "10" }
  standard_deduction: "0"
  rebate_income_limit: "0"
  max_rebate: "0"
old_regime:
  slabs:
    - { lower: "0", rate: "0" }
  standard_deduction: "0"
  rebate_income_limit: "0"
  max_rebate: "0"
cess_percent: "4"
"#,
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::InvalidConfig { table, .. }) => assert_eq!(table, "new_regime"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("yojana-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tax.yaml"), "new_regime: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert!(path.contains("tax.yaml")),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
