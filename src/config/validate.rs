//! Structural validation of a normalized configuration.

use super::model::ProjectConfig;
use super::types::{BuildConfig, Builds};
use crate::error::{ConfigError, Result};
use crate::paths::is_within;
use std::collections::HashSet;
use tracing::debug;

impl ProjectConfig {
    /// Validate the configuration and return `Ok(true)` when it is sound.
    ///
    /// Validation rules, checked in order (the first failure is reported):
    /// - `entrypoint`, `shell`, every fragment, every source and every extra
    ///   dependency resolve within `root` (`!` exclusions included)
    /// - `builds`, if present, is an array of build objects
    /// - with more than one build, every build has a non-empty, unique name
    ///
    /// Never mutates the configuration, so repeated calls agree.
    pub fn validate(&self) -> Result<bool> {
        if !is_within(&self.root, &self.entrypoint) {
            return Err(ConfigError::EntrypointOutsideRoot {
                entrypoint: self.entrypoint.clone(),
                root: self.root.clone(),
            });
        }

        if let Some(shell) = &self.shell
            && !is_within(&self.root, shell)
        {
            return Err(ConfigError::ShellOutsideRoot {
                shell: shell.clone(),
                root: self.root.clone(),
            });
        }

        if let Some(fragment) = self.fragments.iter().find(|f| !is_within(&self.root, f)) {
            return Err(ConfigError::FragmentOutsideRoot {
                fragment: fragment.clone(),
                root: self.root.clone(),
            });
        }

        if let Some(source) = self.sources.iter().find(|s| !is_within(&self.root, s)) {
            return Err(ConfigError::SourceOutsideRoot {
                source_glob: source.clone(),
                root: self.root.clone(),
            });
        }

        if let Some(dependency) = self
            .extra_dependencies
            .iter()
            .find(|d| !is_within(&self.root, d))
        {
            return Err(ConfigError::ExtraDependencyOutsideRoot {
                dependency: dependency.clone(),
                root: self.root.clone(),
            });
        }

        if let Some(builds) = &self.builds {
            validate_builds(builds)?;
        }

        debug!(root = %self.root.display(), "configuration is valid");
        Ok(true)
    }
}

fn validate_builds(builds: &Builds) -> Result<()> {
    let builds = match builds {
        Builds::List(builds) => builds,
        Builds::Malformed(value) => {
            return Err(ConfigError::BuildsNotArray {
                value: value.to_string(),
            });
        }
    };

    // A single build may stay anonymous.
    if builds.len() > 1 {
        validate_build_names(builds)?;
    }

    Ok(())
}

fn validate_build_names(builds: &[BuildConfig]) -> Result<()> {
    let mut seen = HashSet::new();

    for build in builds {
        let name = build
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::BuildMissingName)?;

        if !seen.insert(name) {
            return Err(ConfigError::BuildDuplicateName {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}
