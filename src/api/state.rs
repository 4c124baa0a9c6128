//! Application state for the Paytimer HTTP API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{SettingsLoader, SettingsSnapshot};

/// Shared application state.
///
/// Holds the default settings used when a request does not carry its own.
#[derive(Clone)]
pub struct AppState {
    /// The default settings snapshot.
    settings: Arc<SettingsSnapshot>,
}

impl AppState {
    /// Creates a new application state from loaded settings.
    pub fn new(loader: SettingsLoader) -> Self {
        Self::from_settings(loader.into_settings())
    }

    /// Creates a new application state from a settings snapshot.
    pub fn from_settings(settings: SettingsSnapshot) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns the default settings.
    pub fn settings(&self) -> &SettingsSnapshot {
        &self.settings
    }
}
