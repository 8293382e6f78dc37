//! Normalization, classification, and utility operations.

use super::model::{ProjectConfig, ProjectOptions};
use super::types::{BuildConfig, DEFAULT_ENTRYPOINT, default_sources};
use crate::error::Result;
use crate::matcher::SourceMatcher;
use crate::paths::{resolve_glob, resolve_path};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};
use tracing::{debug, warn};

impl ProjectOptions {
    /// Parse options from a JSON document.
    ///
    /// Unknown keys are kept in `extra`. No path is resolved.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Layer `overrides` on top of these options.
    ///
    /// Every field set in `overrides` wins; unknown keys are merged with the
    /// override taking precedence.
    pub fn merge(self, overrides: ProjectOptions) -> ProjectOptions {
        let mut extra = self.extra;
        extra.extend(overrides.extra);

        ProjectOptions {
            root: overrides.root.or(self.root),
            entrypoint: overrides.entrypoint.or(self.entrypoint),
            shell: overrides.shell.or(self.shell),
            fragments: overrides.fragments.or(self.fragments),
            extra_dependencies: overrides.extra_dependencies.or(self.extra_dependencies),
            sources: overrides.sources.or(self.sources),
            builds: overrides.builds.or(self.builds),
            extra,
        }
    }
}

impl ProjectConfig {
    /// Normalize options against the process working directory.
    ///
    /// Never fails. If the working directory cannot be read, the filesystem
    /// root is used as the base instead.
    pub fn new(options: ProjectOptions) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|e| {
            warn!(error = %e, "cannot read working directory; resolving against filesystem root");
            PathBuf::from(MAIN_SEPARATOR_STR)
        });
        Self::from_options_in(options, &cwd)
    }

    /// Normalize options against an explicit absolute working directory.
    pub fn from_options_in(options: ProjectOptions, cwd: &Path) -> Self {
        let root = match options.root.as_deref() {
            Some(root) => resolve_path(cwd, root),
            None => resolve_path(cwd, ""),
        };

        let entrypoint = resolve_path(
            &root,
            options.entrypoint.as_deref().unwrap_or(DEFAULT_ENTRYPOINT),
        );

        let shell = options.shell.as_deref().map(|shell| resolve_path(&root, shell));

        let fragments: Vec<PathBuf> = options
            .fragments
            .unwrap_or_default()
            .iter()
            .map(|fragment| resolve_path(&root, fragment))
            .collect();

        let all_fragments: Vec<PathBuf> = shell.iter().chain(&fragments).cloned().collect();

        let extra_dependencies = options
            .extra_dependencies
            .unwrap_or_default()
            .iter()
            .map(|dependency| resolve_glob(&root, dependency))
            .collect();

        let mut sources: Vec<String> = options
            .sources
            .unwrap_or_else(default_sources)
            .iter()
            .map(|source| resolve_glob(&root, source))
            .collect();
        sources.extend(
            all_fragments
                .iter()
                .map(|fragment| fragment.to_string_lossy().into_owned()),
        );
        sources.push(entrypoint.to_string_lossy().into_owned());

        debug!(
            root = %root.display(),
            entrypoint = %entrypoint.display(),
            fragments = all_fragments.len(),
            sources = sources.len(),
            "normalized project options"
        );

        ProjectConfig {
            root,
            entrypoint,
            shell,
            fragments,
            all_fragments,
            extra_dependencies,
            sources,
            builds: options.builds,
        }
    }

    /// True if `path` is the shell or one of the fragments.
    pub fn is_fragment(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.all_fragments.iter().any(|fragment| fragment == path)
    }

    /// True if a shell is configured and `path` is it.
    pub fn is_shell(&self, path: impl AsRef<Path>) -> bool {
        self.shell.as_deref() == Some(path.as_ref())
    }

    /// True if `path` is the entrypoint, the shell, or a fragment.
    ///
    /// This checks the named entry files only. Use [`ProjectConfig::source_matcher`]
    /// to test a path against the `sources` globs.
    pub fn is_source(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.entrypoint == path
            || self.is_shell(path)
            || self.fragments.iter().any(|fragment| fragment == path)
    }

    /// Compile the `sources` globs into a matcher.
    pub fn source_matcher(&self) -> Result<SourceMatcher> {
        SourceMatcher::new(&self.sources)
    }

    /// Find a build by name.
    pub fn build(&self, name: &str) -> Option<&BuildConfig> {
        self.builds
            .as_ref()?
            .as_list()?
            .iter()
            .find(|build| build.name.as_deref() == Some(name))
    }

    /// Names of the configured builds, in order. Unnamed builds are skipped.
    pub fn build_names(&self) -> Vec<&str> {
        self.builds
            .as_ref()
            .and_then(|builds| builds.as_list())
            .unwrap_or_default()
            .iter()
            .filter_map(|build| build.name.as_deref())
            .collect()
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new(ProjectOptions::default())
    }
}

impl From<ProjectOptions> for ProjectConfig {
    fn from(options: ProjectOptions) -> Self {
        Self::new(options)
    }
}

/// Normalize options into a configuration. See [`ProjectConfig::new`].
pub fn normalize(options: ProjectOptions) -> ProjectConfig {
    ProjectConfig::new(options)
}
