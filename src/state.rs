//! Shared application state for all routes.

use crate::store::DataStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
    /// Used as the docs server host when a request has no Host header.
    pub fallback_host: String,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>, fallback_host: impl Into<String>) -> Self {
        Self {
            store,
            fallback_host: fallback_host.into(),
        }
    }
}
