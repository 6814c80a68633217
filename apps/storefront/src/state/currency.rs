//! # Currency State
//!
//! The session display currency behind the GHS/USD toggle.
//!
//! Defaults to the local currency; every price the API formats goes
//! through the currently selected value.

use std::sync::{Arc, Mutex};

use atelier_core::Currency;

/// Shared display-currency selection.
#[derive(Debug, Clone)]
pub struct CurrencyState {
    current: Arc<Mutex<Currency>>,
}

impl CurrencyState {
    /// Starts on the default currency (GHS).
    pub fn new() -> Self {
        CurrencyState {
            current: Arc::new(Mutex::new(Currency::default())),
        }
    }

    /// Returns the selected currency.
    pub fn get(&self) -> Currency {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Switches the display currency.
    pub fn set(&self, currency: Currency) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = currency;
    }
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_ghs() {
        let state = CurrencyState::new();
        assert_eq!(state.get(), Currency::Ghs);
    }

    #[test]
    fn test_toggle_is_shared_across_clones() {
        let state = CurrencyState::new();
        let clone = state.clone();

        state.set(Currency::Usd);
        assert_eq!(clone.get(), Currency::Usd);
    }
}
