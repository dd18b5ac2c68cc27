//! CLI argument parsing for lgtm.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lgtm: inspect a project's approval policy.
///
/// Reads a `.lgtm` file (and optionally its deployment file), applies the
/// process defaults from the `LGTM_*` environment variables, and reports the
/// effective configuration.
#[derive(Parser, Debug)]
#[command(name = "lgtm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for lgtm.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a `.lgtm` file and print the effective config as JSON.
    ///
    /// Fails if the file is not valid TOML or the approval pattern does
    /// not compile.
    Check(CheckArgs),

    /// Test whether a comment counts as an approval.
    ///
    /// Prints `true` or `false`; both exit successfully.
    Match(MatchArgs),

    /// Print the process defaults as JSON.
    Defaults,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the project's `.lgtm` file.
    pub config: PathBuf,

    /// Path to the deployment file, read only when `do_deploy` is set.
    #[arg(short, long)]
    pub deploy: Option<PathBuf>,
}

/// Arguments for the `match` command.
#[derive(Parser, Debug)]
pub struct MatchArgs {
    /// Path to the project's `.lgtm` file.
    pub config: PathBuf,

    /// Comment text to test.
    pub text: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_deploy_file() {
        let cli =
            Cli::try_parse_from(["lgtm", "check", ".lgtm", "--deploy", "DEPLOYMENTS"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.config, PathBuf::from(".lgtm"));
                assert_eq!(args.deploy, Some(PathBuf::from("DEPLOYMENTS")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_match() {
        let cli = Cli::try_parse_from(["lgtm", "match", ".lgtm", "LGTM minor"]).unwrap();
        match cli.command {
            Command::Match(args) => {
                assert_eq!(args.config, PathBuf::from(".lgtm"));
                assert_eq!(args.text, "LGTM minor");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn match_requires_text() {
        assert!(Cli::try_parse_from(["lgtm", "match", ".lgtm"]).is_err());
    }
}
