//! Glob matching over resolved `sources` entries.
//!
//! A path is a source when it matches at least one positive pattern and no
//! `!` pattern, regardless of the order the patterns were listed in.

use crate::error::{ConfigError, Result};
use crate::paths::split_negation;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled include/exclude glob sets.
#[derive(Debug, Clone)]
pub struct SourceMatcher {
    include: GlobSet,
    include_patterns: Vec<String>,
    exclude: GlobSet,
}

impl SourceMatcher {
    /// Compile a list of glob entries. Entries starting with `!` exclude.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut include = GlobSetBuilder::new();
        let mut include_patterns = Vec::new();
        let mut exclude = GlobSetBuilder::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let (negated, positive) = split_negation(pattern);
            let glob = GlobBuilder::new(positive)
                .literal_separator(true)
                .build()
                .map_err(|e| ConfigError::InvalidGlob {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;

            if negated {
                exclude.add(glob);
            } else {
                include.add(glob);
                include_patterns.push(positive.to_string());
            }
        }

        Ok(Self {
            include: build_set(include)?,
            include_patterns,
            exclude: build_set(exclude)?,
        })
    }

    /// True if `path` is matched by an include and no exclude.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        self.matched_pattern(path).is_some()
    }

    /// The first positive pattern matching `path`, unless an exclusion applies.
    pub fn matched_pattern(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        if self.exclude.is_match(path) {
            return None;
        }

        let matches = self.include.matches(path);
        matches
            .first()
            .and_then(|&index| self.include_patterns.get(index))
            .map(String::as_str)
    }
}

fn build_set(builder: GlobSetBuilder) -> Result<GlobSet> {
    builder.build().map_err(invalid_glob)
}

/// Report a globset error against the pattern it names, if any.
fn invalid_glob(error: globset::Error) -> ConfigError {
    ConfigError::InvalidGlob {
        pattern: error.glob().unwrap_or("<sources>").to_string(),
        message: error.kind().to_string(),
    }
}
