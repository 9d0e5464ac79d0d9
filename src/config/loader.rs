//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading store
//! settings from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};

use super::types::{StoreConfig, StoreFile};

/// Name of the settings file inside a configuration directory.
pub const STORE_FILE_NAME: &str = "store.yaml";

/// Loads and provides access to store configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── store.yaml   # Store name, timezone, opening hours, grace period
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_datetime::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("{} opens at {}", loader.store().name(), loader.store().opening_time());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    store: StoreConfig,
}

impl ConfigLoader {
    /// Loads `store.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or misses a required field
    /// - The timezone or a time of day does not validate
    pub fn load<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let path = path.as_ref().join(STORE_FILE_NAME);
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| ScheduleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Builds a loader from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_datetime::config::ConfigLoader;
    ///
    /// let yaml = "name: Night Owl\nopening_time: \"18:00\"\nclosing_time: \"02:00\"\n";
    /// let loader = ConfigLoader::from_yaml_str(yaml)?;
    /// assert_eq!(loader.store().timezone(), chrono_tz::Asia::Seoul);
    /// assert!(loader.store().is_overnight());
    /// # Ok::<(), shift_datetime::error::ScheduleError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> ScheduleResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> ScheduleResult<Self> {
        let file: StoreFile =
            serde_yaml::from_str(content).map_err(|e| ScheduleError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let store = StoreConfig::try_from(file)?;
        debug!(path = %path, store = %store.name(), timezone = store.timezone().name(), "Loaded store configuration");

        Ok(Self { store })
    }

    /// Returns the validated store settings.
    pub fn store(&self) -> &StoreConfig {
        &self.store
    }
}
