//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::PayrollResult;
use crate::service::PayrollService;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration, the store, and the payroll service over it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<InMemoryStore>,
    payroll: PayrollService<InMemoryStore>,
}

impl AppState {
    /// Creates the application state with an empty store.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration cannot back a store.
    pub fn new(config: ConfigLoader) -> PayrollResult<Self> {
        let store = Arc::new(InMemoryStore::new(config.config())?);
        Self::with_store(config, store)
    }

    /// Creates the application state over an existing store.
    pub fn with_store(config: ConfigLoader, store: Arc<InMemoryStore>) -> PayrollResult<Self> {
        let payroll = PayrollService::new(
            Arc::clone(&store),
            config.hourly_rate(),
            config.config().recent_hours_window_days,
        )?;

        Ok(Self {
            config: Arc::new(config),
            store,
            payroll,
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Returns the payroll service.
    pub fn payroll(&self) -> &PayrollService<InMemoryStore> {
        &self.payroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_shares_store_with_service() {
        let loader = ConfigLoader::from_config(PayrollConfig::default()).unwrap();
        let state = AppState::new(loader).unwrap();
        let cloned = state.clone();

        state
            .store()
            .add_employee(crate::models::NewEmployee {
                name: "Asha Rai".to_string(),
                role: "Chef".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(cloned.store().list_employees().unwrap().len(), 1);
        assert_eq!(cloned.payroll().hourly_rate(), Decimal::new(20, 0));
    }
}
