//! Application state for the hours analyzer API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::ConfigLoader;
use crate::store::RecordStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration, the record store, and the lock that lets one save
/// cycle (load, merge, save) run at a time.
#[derive(Clone)]
pub struct AppState {
    /// The loaded schedule and premium rules.
    config: Arc<ConfigLoader>,
    /// Where the record collection lives.
    store: Arc<dyn RecordStore>,
    /// Held for the whole of a save cycle.
    save_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Creates a new application state from a configuration and a record store.
    pub fn new<S: RecordStore + 'static>(config: ConfigLoader, store: S) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a handle to the record store.
    pub fn store(&self) -> Arc<dyn RecordStore> {
        Arc::clone(&self.store)
    }

    /// Returns the lock serializing save cycles.
    pub fn save_lock(&self) -> &Mutex<()> {
        &self.save_lock
    }
}
