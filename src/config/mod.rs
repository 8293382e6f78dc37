//! Project configuration model.
//!
//! `ProjectOptions` is what the user writes in `polymer.json`;
//! `ProjectConfig` is the normalized form handed to the build pipeline.
//! Normalization never fails. All structural checks live in
//! `ProjectConfig::validate`, which callers run explicitly.

mod loader;
mod model;
mod operations;
pub mod types;
mod validate;


// Re-export public API
pub use loader::{CONFIG_FILE_NAME, load_config_from_file, load_options_from_file};
pub use model::{ProjectConfig, ProjectOptions};
pub use operations::normalize;
pub use types::{BuildConfig, Builds};
