//! Loading options and configurations from `polymer.json`.

use super::model::{ProjectConfig, ProjectOptions};
use crate::error::{ConfigError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Conventional config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "polymer.json";

/// Read raw options from a JSON file.
///
/// # Returns
///
/// * `Ok(Some(options))` - The parsed, unresolved options
/// * `Ok(None)` - The file does not exist
/// * `Err(ConfigError::Parse)` - The file is not a valid options document
/// * `Err(ConfigError::Io)` - The file exists but could not be read
pub fn load_options_from_file<P: AsRef<Path>>(path: P) -> Result<Option<ProjectOptions>> {
    let path = path.as_ref();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let options = ProjectOptions::from_json(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loaded project options");
    Ok(Some(options))
}

/// Read options from a JSON file and normalize them.
///
/// The result is not validated; call [`ProjectConfig::validate`] before
/// handing it to a build.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<Option<ProjectConfig>> {
    Ok(load_options_from_file(path)?.map(ProjectConfig::new))
}

impl ProjectOptions {
    /// See [`load_options_from_file`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        load_options_from_file(path)
    }
}

impl ProjectConfig {
    /// See [`load_config_from_file`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        load_config_from_file(path)
    }
}
