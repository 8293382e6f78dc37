//! Options and configuration struct definitions.

use super::types::Builds;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Raw, user-supplied project options.
///
/// This is the shape of `polymer.json`. Every field is optional and paths
/// are kept exactly as written; nothing is resolved until the options are
/// turned into a [`ProjectConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    /// Project root, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Main HTML entrypoint, relative to root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,

    /// App shell, relative to root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Lazily loaded fragments, relative to root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragments: Option<Vec<String>>,

    /// Dependency globs copied into the build untouched. `!` excludes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_dependencies: Option<Vec<String>>,

    /// Source globs. `!` excludes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,

    /// Named build variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builds: Option<Builds>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A normalized project configuration.
///
/// Every path is absolute. `shell` and `builds` are `None` when the options
/// did not mention them; downstream tooling treats that differently from an
/// empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub root: PathBuf,

    pub entrypoint: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<PathBuf>,

    pub fragments: Vec<PathBuf>,

    /// The shell (if any) followed by `fragments`.
    pub all_fragments: Vec<PathBuf>,

    /// Absolute globs, exclusions keep their `!` prefix.
    pub extra_dependencies: Vec<String>,

    /// User source globs, then `all_fragments`, then `entrypoint`.
    pub sources: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builds: Option<Builds>,
}
