//! Application state for the billing engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::settings::WorkspaceSettings;

/// Shared application state.
///
/// Holds the workspace settings loaded once per session. The settings
/// persistence collaborator owns writes; handlers only read.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<WorkspaceSettings>,
}

impl AppState {
    /// Creates a new application state with the given workspace settings.
    pub fn new(settings: WorkspaceSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns the workspace settings.
    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }
}
