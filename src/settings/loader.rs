//! Workspace settings loading.
//!
//! This module provides the [`SettingsLoader`] type for reading workspace
//! settings from a YAML file at session start. The settings persistence
//! collaborator owns writes; the engine only ever reads the loaded value.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::WorkspaceSettings;

/// Loads and provides access to workspace settings.
///
/// # File structure
///
/// ```text
/// config/workspace.yaml
/// ```
///
/// with the shape:
///
/// ```yaml
/// currency:
///   code: INR
///   symbol: "₹"
///   position: prefix
///   decimals: 2
/// date_time:
///   timezone: "+05:30"
///   date_format: DD-MM-YYYY
///   time_format: 12h
/// ```
///
/// # Example
///
/// ```no_run
/// use billing_engine::settings::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/workspace.yaml")?;
/// let settings = loader.settings();
/// # Ok::<(), billing_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: WorkspaceSettings,
}

impl SettingsLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SettingsNotFound`] when the file cannot be
    /// read and [`EngineError::SettingsParseError`] when it is not valid
    /// YAML for [`WorkspaceSettings`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        let settings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::SettingsParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { settings })
    }

    /// Wraps an already-constructed settings value, e.g. the session
    /// default when no file exists yet.
    pub fn from_settings(settings: WorkspaceSettings) -> Self {
        Self { settings }
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &WorkspaceSettings {
        &self.settings
    }
}
