//! Application state for the calculator API.

use std::sync::Arc;

use crate::config::{CalculatorConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the statutory tables loaded at startup; handlers only read them.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        self.config.config()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_builtin_tables() {
        let state = AppState::default();
        assert_eq!(state.config().tax().cess_percent, dec!(4));
    }
}
