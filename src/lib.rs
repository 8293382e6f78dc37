//! Polymer project configuration.
//!
//! Turns the options in a `polymer.json` file into an absolute,
//! internally-consistent [`ProjectConfig`] for build tooling, and validates
//! it on request.
//!
//! ```no_run
//! use polymer_project_config::ProjectConfig;
//!
//! if let Some(config) = ProjectConfig::load_from_file("polymer.json")? {
//!     config.validate()?;
//!     println!("entrypoint: {}", config.entrypoint.display());
//! }
//! # Ok::<(), polymer_project_config::ConfigError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod matcher;
pub mod paths;

#[cfg(test)]
mod test_support;

pub use config::{
    BuildConfig, Builds, ProjectConfig, ProjectOptions, load_config_from_file,
    load_options_from_file, normalize,
};
pub use error::{ConfigError, Result};
pub use matcher::SourceMatcher;
