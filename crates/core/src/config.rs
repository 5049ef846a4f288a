//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Nothing in the core reads process-wide environment variables while a command is
//! executing.

use crate::constants::DEFAULT_DATA_FILE;
use crate::{ClinicError, ClinicResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClinicConfig {
    data_file: PathBuf,
}

impl ClinicConfig {
    /// Create a new `ClinicConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] if `data_file` is empty or names an existing
    /// directory.
    pub fn new(data_file: PathBuf) -> ClinicResult<Self> {
        if data_file.as_os_str().is_empty() {
            return Err(ClinicError::invalid("data file path cannot be empty"));
        }
        if data_file.is_dir() {
            return Err(ClinicError::invalid(format!(
                "data file path is a directory: {}",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// Resolve the data file path from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_DATA_FILE`].
pub fn data_file_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}
