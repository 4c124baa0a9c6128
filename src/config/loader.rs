//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading a settings
//! snapshot and the bundled holiday calendar from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidaySet};

use super::types::SettingsSnapshot;

/// One bundled holiday file.
#[derive(Debug, Clone, Deserialize)]
struct HolidayFile {
    holidays: Vec<Holiday>,
}

/// Loads and provides access to the worker's settings.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml     # Salary, shift window, weekly mask, start date
/// └── holidays/
///     └── 2025.yaml     # Bundled legal holidays, one file per year
/// ```
///
/// The `holidays/` directory is optional. Its files are read in file-name
/// order, and holidays listed in `settings.yaml` take precedence over bundled
/// entries for the same date.
///
/// # Example
///
/// ```no_run
/// use paytimer_engine::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/default")?;
/// println!("Monthly salary: {}", loader.settings().monthly_salary);
/// # Ok::<(), paytimer_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: SettingsSnapshot,
}

impl SettingsLoader {
    /// Loads settings from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `SettingsLoader` on success, or an error if:
    /// - `settings.yaml` is missing (`ConfigNotFound`)
    /// - any file contains invalid YAML or misses a required field
    ///   (`ConfigParseError`)
    ///
    /// Loading does not validate the settings; see
    /// [`SettingsSnapshot::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let mut settings = Self::load_yaml::<SettingsSnapshot>(&settings_path)?;

        let holidays_dir = path.join("holidays");
        let mut holidays = Self::load_holidays(&holidays_dir)?;
        holidays.extend(settings.holidays);
        settings.holidays = holidays.into();

        debug!(
            path = %path.display(),
            holidays = settings.holidays.len(),
            "Loaded settings"
        );

        Ok(Self { settings })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HolidaySet> {
        if !holidays_dir.exists() {
            return Ok(HolidaySet::new());
        }

        let dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();

        let mut holidays = HolidaySet::new();
        for file in &files {
            let holiday_file = Self::load_yaml::<HolidayFile>(file)?;
            debug!(
                file = %file.display(),
                count = holiday_file.holidays.len(),
                "Loaded holiday file"
            );
            holidays.extend(holiday_file.holidays);
        }

        Ok(holidays)
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &SettingsSnapshot {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> SettingsSnapshot {
        self.settings
    }

    /// Builds an engine from the loaded settings.
    ///
    /// Fails with a configuration error if the settings are invalid.
    pub fn engine(&self) -> EngineResult<Engine> {
        Engine::from_settings(&self.settings)
    }
}
