//! Application state for the payroll preview API.

use std::sync::Arc;

use crate::config::{ConfigLoader, PreviewRules};

/// Shared application state.
///
/// Holds the rules every handler computes with. Rules are immutable once
/// loaded, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<PreviewRules>,
}

impl AppState {
    /// Creates a new application state from loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            rules: Arc::new(config.rules().clone()),
        }
    }

    /// Returns the rules handlers compute with.
    pub fn rules(&self) -> &PreviewRules {
        &self.rules
    }

    /// Returns "name version" of the rules, for responses and logs.
    pub fn rules_label(&self) -> String {
        let metadata = self.rules.metadata();
        format!("{} {}", metadata.name, metadata.version)
    }
}
