//! CLI argument parsing for polymer-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::{CONFIG_FILE_NAME, ProjectOptions};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Polymer-config: inspect and validate polymer.json project configuration.
///
/// Options are read from the config file (if it exists) and then
/// overridden by any flags given on the command line.
#[derive(Parser, Debug)]
#[command(name = "polymer-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the project config file.
    #[arg(long, short = 'c', global = true, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for polymer-config.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the normalized configuration as JSON.
    Show(ShowArgs),

    /// Print the merged, unresolved options as JSON.
    Options,

    /// Validate the configuration.
    ///
    /// Prints `ok` on success; exits with code 2 on a violation.
    Validate,

    /// Report whether each path is the shell, a fragment, or a named source.
    Classify(PathsArgs),

    /// Report whether each path is matched by the `sources` globs.
    Match(PathsArgs),
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Validate before printing.
    #[arg(long)]
    pub validate: bool,
}

/// Paths for `classify` and `match`, relative to the working directory.
#[derive(Args, Debug)]
pub struct PathsArgs {
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Flags overriding values from the config file.
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Project root, relative to the working directory.
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Main entrypoint, relative to root.
    #[arg(long, global = true)]
    pub entrypoint: Option<String>,

    /// App shell, relative to root.
    #[arg(long, global = true)]
    pub shell: Option<String>,

    /// Fragment, relative to root (repeatable).
    #[arg(long = "fragment", global = true)]
    pub fragments: Vec<String>,

    /// Source glob, relative to root (repeatable, `!` excludes).
    #[arg(long = "source", global = true)]
    pub sources: Vec<String>,

    /// Extra dependency glob, relative to root (repeatable, `!` excludes).
    #[arg(long = "extra-dependency", global = true)]
    pub extra_dependencies: Vec<String>,
}

impl OverrideArgs {
    /// Convert flags to options; repeatable flags given zero times stay unset.
    pub fn into_options(self) -> ProjectOptions {
        fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
            (!values.is_empty()).then_some(values)
        }

        ProjectOptions {
            root: self.root,
            entrypoint: self.entrypoint,
            shell: self.shell,
            fragments: non_empty(self.fragments),
            extra_dependencies: non_empty(self.extra_dependencies),
            sources: non_empty(self.sources),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_polymer_json() {
        let cli = Cli::try_parse_from(["polymer-config", "validate"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("polymer.json"));
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Command::Validate));
    }

    #[test]
    fn overrides_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "polymer-config",
            "show",
            "--validate",
            "--root",
            "public",
            "--fragment",
            "a.html",
            "--fragment",
            "b.html",
            "-vv",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Show(ShowArgs { validate: true })));
        assert_eq!(cli.verbose, 2);

        let options = cli.overrides.into_options();
        assert_eq!(options.root.as_deref(), Some("public"));
        assert_eq!(
            options.fragments,
            Some(vec!["a.html".to_string(), "b.html".to_string()])
        );
        assert_eq!(options.sources, None);
    }

    #[test]
    fn classify_requires_paths() {
        assert!(Cli::try_parse_from(["polymer-config", "classify"]).is_err());

        let cli = Cli::try_parse_from(["polymer-config", "classify", "index.html"]).unwrap();
        match cli.command {
            Command::Classify(args) => assert_eq!(args.paths, vec![PathBuf::from("index.html")]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn empty_overrides_leave_options_unset() {
        let options = OverrideArgs::default().into_options();
        assert_eq!(options, ProjectOptions::default());
    }
}
