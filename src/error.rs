//! Error types for polymer project configuration.
//!
//! Uses thiserror for derive macros. Validation messages carry the
//! `Polymer Config Error:` prefix and fixed wording, since build tooling
//! pattern-matches on them.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not a valid options document.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration could not be rendered as JSON.
    #[error("failed to serialize configuration to JSON: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// A `sources` glob could not be compiled.
    #[error("invalid glob pattern in sources: '{pattern}' - {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("Polymer Config Error: entrypoint ({entrypoint}) does not resolve within root ({root})")]
    EntrypointOutsideRoot { entrypoint: PathBuf, root: PathBuf },

    #[error("Polymer Config Error: shell ({shell}) does not resolve within root ({root})")]
    ShellOutsideRoot { shell: PathBuf, root: PathBuf },

    #[error("Polymer Config Error: a \"fragments\" path ({fragment}) does not resolve within root ({root})")]
    FragmentOutsideRoot { fragment: PathBuf, root: PathBuf },

    #[error("Polymer Config Error: a \"sources\" path ({source_glob}) does not resolve within root ({root})")]
    SourceOutsideRoot { source_glob: String, root: PathBuf },

    #[error("Polymer Config Error: a \"extraDependencies\" path ({dependency}) does not resolve within root ({root})")]
    ExtraDependencyOutsideRoot { dependency: String, root: PathBuf },

    /// `builds` was supplied but is not an array of build objects.
    #[error("Polymer Config Error: \"builds\" ({value}) expected an array of build configurations.")]
    BuildsNotArray { value: String },

    #[error("Polymer Config Error: all \"builds\" require a \"name\" property when there are multiple builds defined.")]
    BuildMissingName,

    #[error("Polymer Config Error: \"builds\" duplicate build name \"{name}\" found. Build names must be unique.")]
    BuildDuplicateName { name: String },
}

impl ConfigError {
    /// Returns true for structural violations raised by `ProjectConfig::validate`.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            ConfigError::Io { .. }
                | ConfigError::Parse { .. }
                | ConfigError::Serialize { .. }
                | ConfigError::InvalidGlob { .. }
        )
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() {
            exit_codes::VALIDATION_FAILURE
        } else {
            exit_codes::USER_ERROR
        }
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
