//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use crate::store::Store;
use std::sync::Arc;

/// Shared application state
///
/// Holds the store handle every request goes through. Both fields are
/// `Arc`s, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Persistence store, opened once at startup
    pub store: Arc<dyn Store>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the store
    #[inline]
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_state_clone_shares_store() {
        let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
        let cloned = state.clone();

        cloned.store().create_user("alice").await.unwrap();

        // Both handles see the same collections
        let users = state.store().list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }
}
