//! Command implementations for polymer-config.
//!
//! Every command starts from the same options: the config file (when it
//! exists) with the command-line overrides layered on top.

use crate::cli::{Cli, Command, PathsArgs, ShowArgs};
use crate::config::{ProjectConfig, ProjectOptions, load_options_from_file};
use crate::error::{ConfigError, Result};
use crate::paths::resolve_path;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let options = resolve_options(&cli.config, cli.overrides.into_options())?;

    match cli.command {
        Command::Show(args) => cmd_show(options, args),
        Command::Options => cmd_options(&options),
        Command::Validate => cmd_validate(options),
        Command::Classify(args) => cmd_classify(options, args),
        Command::Match(args) => cmd_match(options, args),
    }
}

/// Load options from `config_path` and apply `overrides`.
///
/// A missing config file is not an error; the overrides are used alone.
pub fn resolve_options(config_path: &Path, overrides: ProjectOptions) -> Result<ProjectOptions> {
    let file_options = match load_options_from_file(config_path)? {
        Some(options) => options,
        None => {
            info!(path = %config_path.display(), "no config file; using command-line options only");
            ProjectOptions::default()
        }
    };

    Ok(file_options.merge(overrides))
}

fn cmd_show(options: ProjectOptions, args: ShowArgs) -> Result<()> {
    let config = ProjectConfig::new(options);
    if args.validate {
        config.validate()?;
    }
    println!("{}", to_pretty_json(&config)?);
    Ok(())
}

fn cmd_options(options: &ProjectOptions) -> Result<()> {
    println!("{}", to_pretty_json(options)?);
    Ok(())
}

fn cmd_validate(options: ProjectOptions) -> Result<()> {
    ProjectConfig::new(options).validate()?;
    println!("ok");
    Ok(())
}

fn cmd_classify(options: ProjectOptions, args: PathsArgs) -> Result<()> {
    let config = ProjectConfig::new(options);
    let cwd = current_dir()?;

    for path in &args.paths {
        let resolved = resolve_path(&cwd, path);
        println!("{}: {}", resolved.display(), classification(&config, &resolved));
    }
    Ok(())
}

fn cmd_match(options: ProjectOptions, args: PathsArgs) -> Result<()> {
    let config = ProjectConfig::new(options);
    let matcher = config.source_matcher()?;
    let cwd = current_dir()?;

    for path in &args.paths {
        let resolved = resolve_path(&cwd, path);
        match matcher.matched_pattern(&resolved) {
            Some(pattern) => println!("{}: matched by {}", resolved.display(), pattern),
            None => println!("{}: not a source", resolved.display()),
        }
    }
    Ok(())
}

/// Describe the roles `path` plays in `config`.
///
/// Roles are listed as `shell`, `fragment`, `entrypoint`, `source`; a path
/// with none of them is reported as `other`.
pub fn classification(config: &ProjectConfig, path: &Path) -> String {
    let mut roles = Vec::new();
    if config.is_shell(path) {
        roles.push("shell");
    }
    if config.is_fragment(path) {
        roles.push("fragment");
    }
    if config.entrypoint == path {
        roles.push("entrypoint");
    }
    if config.is_source(path) {
        roles.push("source");
    }

    if roles.is_empty() {
        "other".to_string()
    } else {
        roles.join(", ")
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    debug!("rendering JSON output");
    serde_json::to_string_pretty(value).map_err(|source| ConfigError::Serialize { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_file;

    fn config() -> ProjectConfig {
        let options = ProjectOptions {
            root: Some("public".to_string()),
            entrypoint: Some("index.html".to_string()),
            shell: Some("shell.html".to_string()),
            fragments: Some(vec!["view.html".to_string()]),
            ..Default::default()
        };
        ProjectConfig::from_options_in(options, Path::new("/work"))
    }

    #[test]
    fn classification_lists_every_role() {
        let config = config();

        assert_eq!(
            classification(&config, Path::new("/work/public/shell.html")),
            "shell, fragment, source"
        );
        assert_eq!(
            classification(&config, Path::new("/work/public/view.html")),
            "fragment, source"
        );
        assert_eq!(
            classification(&config, Path::new("/work/public/index.html")),
            "entrypoint, source"
        );
        assert_eq!(
            classification(&config, Path::new("/work/public/other.html")),
            "other"
        );
    }

    #[test]
    fn resolve_options_without_file_uses_overrides() {
        let temp = tempfile::tempdir().unwrap();
        let overrides = ProjectOptions {
            root: Some("app".to_string()),
            ..Default::default()
        };

        let options = resolve_options(&temp.path().join("polymer.json"), overrides.clone()).unwrap();
        assert_eq!(options, overrides);
    }

    #[test]
    fn resolve_options_layers_overrides_on_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_file(
            temp.path(),
            "polymer.json",
            r#"{ "root": "public", "entrypoint": "foo.html" }"#,
        );
        let overrides = ProjectOptions {
            entrypoint: Some("bar.html".to_string()),
            ..Default::default()
        };

        let options = resolve_options(&path, overrides).unwrap();
        assert_eq!(options.root.as_deref(), Some("public"));
        assert_eq!(options.entrypoint.as_deref(), Some("bar.html"));
    }

    #[test]
    fn resolve_options_propagates_parse_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = write_file(temp.path(), "polymer.json", "{");

        let err = resolve_options(&path, ProjectOptions::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
