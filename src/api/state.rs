//! Application state for the PAYE engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxTableRegistry;

/// Shared application state.
///
/// Holds the statutory registry, loaded once at startup and shared read-only
/// across handlers.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<TaxTableRegistry>,
}

impl AppState {
    /// Creates a new application state with the given registry.
    pub fn new(registry: TaxTableRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the statutory registry.
    pub fn registry(&self) -> &TaxTableRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_registry() {
        let state = AppState::new(TaxTableRegistry::zimra_2025());
        let clone = state.clone();
        assert!(std::ptr::eq(state.registry(), clone.registry()));
    }
}
