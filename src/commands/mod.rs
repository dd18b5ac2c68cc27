//! Command implementations for lgtm.
//!
//! Commands own all file I/O: they read the documents, hand the bytes to a
//! [`ConfigLoader`] built from the environment, and print the result.

use crate::cli::{CheckArgs, Command, MatchArgs};
use lgtm::config::{ConfigDefaults, ConfigLoader};
use lgtm::error::{LgtmError, Result};
use std::path::Path;


/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    let loader = ConfigLoader::from_env()?;

    let output = match command {
        Command::Check(args) => run_check(&loader, &args)?,
        Command::Match(args) => run_match(&loader, &args)?,
        Command::Defaults => run_defaults(loader.defaults())?,
    };
    println!("{}", output);
    Ok(())
}

/// Load the config (and deployment file) and render it as JSON.
///
/// The deployment file is only read when the config sets `do_deploy`, so a
/// project with deploys off never needs one.
pub(crate) fn run_check(loader: &ConfigLoader, args: &CheckArgs) -> Result<String> {
    let config_data = read_file(&args.config)?;
    let config = loader.parse(&config_data, &[])?;

    let config = match &args.deploy {
        Some(path) if config.do_deployment => loader.parse(&config_data, &read_file(path)?)?,
        _ => config,
    };
    config.to_json()
}

pub(crate) fn run_match(loader: &ConfigLoader, args: &MatchArgs) -> Result<String> {
    let config_data = read_file(&args.config)?;
    let config = loader.parse(&config_data, &[])?;
    Ok(config.is_match(&args.text).to_string())
}

pub(crate) fn run_defaults(defaults: &ConfigDefaults) -> Result<String> {
    serde_json::to_string_pretty(defaults)
        .map_err(|e| LgtmError::UserError(format!("failed to serialize defaults to JSON: {}", e)))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| LgtmError::UserError(format!("failed to read '{}': {}", path.display(), e)))
}
