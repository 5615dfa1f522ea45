//! Temperature unit preference
//!
//! The unit outlives the session and is independent of weather loading.

use std::{fmt, sync::Arc};

use domain::value_objects::TemperatureUnit;
use tracing::{debug, warn};

use crate::{error::ApplicationError, ports::PreferenceStorePort};

/// Preference key holding `"C"` or `"F"`
pub const UNIT_PREFERENCE_KEY: &str = "clima_unit";

/// Reads and writes the durable unit preference
pub struct UnitPreferences {
    store: Arc<dyn PreferenceStorePort>,
}

impl fmt::Debug for UnitPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitPreferences").finish_non_exhaustive()
    }
}

impl UnitPreferences {
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    /// The stored unit, or Celsius when unset or unreadable
    pub async fn current(&self) -> TemperatureUnit {
        match self.store.get(UNIT_PREFERENCE_KEY).await {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring invalid unit preference");
                TemperatureUnit::default()
            }),
            Ok(None) => TemperatureUnit::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read unit preference");
                TemperatureUnit::default()
            },
        }
    }

    /// Store a unit
    pub async fn set(&self, unit: TemperatureUnit) -> Result<(), ApplicationError> {
        debug!(unit = %unit, "Saving unit preference");
        self.store.set(UNIT_PREFERENCE_KEY, unit.code()).await
    }

    /// Flip the stored unit and return the new one
    pub async fn toggle(&self) -> Result<TemperatureUnit, ApplicationError> {
        let next = self.current().await.toggle();
        self.set(next).await?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockPreferenceStorePort;

    #[tokio::test]
    async fn defaults_to_celsius_when_unset() {
        let mut store = MockPreferenceStorePort::new();
        store.expect_get().returning(|_| Ok(None));
        let prefs = UnitPreferences::new(Arc::new(store));
        assert_eq!(prefs.current().await, TemperatureUnit::Celsius);
    }

    #[tokio::test]
    async fn invalid_value_falls_back_to_celsius() {
        let mut store = MockPreferenceStorePort::new();
        store.expect_get().returning(|_| Ok(Some("K".to_string())));
        let prefs = UnitPreferences::new(Arc::new(store));
        assert_eq!(prefs.current().await, TemperatureUnit::Celsius);
    }

    #[tokio::test]
    async fn toggle_flips_and_saves() {
        let mut store = MockPreferenceStorePort::new();
        store.expect_get()
            .withf(|key| key == "clima_unit")
            .returning(|_| Ok(Some("C".to_string())));
        store.expect_set()
            .withf(|key, value| key == "clima_unit" && value == "F")
            .times(1)
            .returning(|_, _| Ok(()));
        let prefs = UnitPreferences::new(Arc::new(store));
        assert_eq!(prefs.toggle().await.unwrap(), TemperatureUnit::Fahrenheit);
    }

    #[tokio::test]
    async fn read_failure_falls_back_to_celsius() {
        let mut store = MockPreferenceStorePort::new();
        store.expect_get()
            .returning(|_| Err(ApplicationError::Internal("disk".into())));
        let prefs = UnitPreferences::new(Arc::new(store));
        assert_eq!(prefs.current().await, TemperatureUnit::Celsius);
    }
}
