//! Config loading, defaulting, and matching operations.

use super::model::{Config, DeploymentConfigs};
use super::types::ConfigDefaults;
use crate::error::{LgtmError, Result};
use regex::Regex;
use tracing::{debug, warn};

/// Document names used in decode errors.
pub const CONFIG_DOCUMENT: &str = ".lgtm";
pub const DEPLOYMENT_DOCUMENT: &str = "DEPLOYMENTS";

/// Parses project configuration against a fixed set of defaults.
///
/// The defaults are captured at construction and never re-read, so one loader
/// can be shared by reference across threads parsing independent projects.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    defaults: ConfigDefaults,
}

impl ConfigLoader {
    pub fn new(defaults: ConfigDefaults) -> Self {
        Self { defaults }
    }

    /// Create a loader whose defaults come from the `LGTM_*` environment.
    pub fn from_env() -> Result<Self> {
        ConfigDefaults::from_env().map(Self::new)
    }

    pub fn defaults(&self) -> &ConfigDefaults {
        &self.defaults
    }

    /// Parse a project's `.lgtm` file and, when deploys are enabled, its
    /// deployment map.
    ///
    /// # Arguments
    ///
    /// * `config_data` - Raw bytes of the `.lgtm` file
    /// * `deploy_data` - Raw bytes of the deployment file (may be empty)
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Config with defaults applied and the matcher compiled
    /// * `Err(LgtmError::DecodeError)` - Either document is not valid UTF-8 TOML
    /// * `Err(LgtmError::PatternError)` - The effective pattern is not a valid regex
    pub fn parse(&self, config_data: &[u8], deploy_data: &[u8]) -> Result<Config> {
        let mut config = self.parse_str(decode_utf8(CONFIG_DOCUMENT, config_data)?)?;

        if config.do_deployment {
            let deploy_text = decode_utf8(DEPLOYMENT_DOCUMENT, deploy_data)?;
            config.deployment_map = load_deployment_map(deploy_text)?;
        } else if !deploy_data.is_empty() {
            warn!(
                bytes = deploy_data.len(),
                "deployment file supplied but do_deploy is off; ignoring it"
            );
        }

        Ok(config)
    }

    /// Parse a project's `.lgtm` file from a string.
    ///
    /// Unknown keys are silently ignored. The deployment map is never loaded
    /// here; use [`ConfigLoader::parse`] for that.
    pub fn parse_str(&self, data: &str) -> Result<Config> {
        let mut config: Config = toml::from_str(data).map_err(|e| LgtmError::DecodeError {
            document: CONFIG_DOCUMENT.to_string(),
            message: e.to_string(),
        })?;

        self.apply_defaults(&mut config);

        let matcher = Regex::new(&config.pattern).map_err(|e| LgtmError::PatternError {
            pattern: config.pattern.clone(),
            message: e.to_string(),
        })?;
        config.matcher = Some(matcher);

        Ok(config)
    }

    /// Replace every zero-valued field that has a process default.
    ///
    /// A boolean left at `false` cannot be told apart from one explicitly set
    /// to `false`, so a `true` default for `self_approval_off` always wins.
    fn apply_defaults(&self, config: &mut Config) {
        let defaults = &self.defaults;

        if config.approvals == 0 {
            debug!(value = defaults.approvals, "approvals not set, using default");
            config.approvals = defaults.approvals;
        }
        if config.pattern.is_empty() {
            debug!(value = %defaults.pattern, "pattern not set, using default");
            config.pattern = defaults.pattern.clone();
        }
        if config.team.is_empty() {
            debug!(value = %defaults.team, "team not set, using default");
            config.team = defaults.team.clone();
        }
        if config.approval_algorithm.is_empty() {
            debug!(value = %defaults.approval_algorithm, "approval_algorithm not set, using default");
            config.approval_algorithm = defaults.approval_algorithm.clone();
        }
        if config.version_algorithm.is_empty() {
            debug!(value = %defaults.version_algorithm, "version_algorithm not set, using default");
            config.version_algorithm = defaults.version_algorithm.clone();
        }
        if !config.self_approval_off {
            config.self_approval_off = defaults.self_approval_off;
        }
    }
}

fn decode_utf8<'a>(document: &str, data: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(data).map_err(|e| LgtmError::DecodeError {
        document: document.to_string(),
        message: e.to_string(),
    })
}

/// Decode the deployment map. Empty input yields an empty map.
fn load_deployment_map(data: &str) -> Result<DeploymentConfigs> {
    if data.is_empty() {
        debug!("do_deploy set without a deployment file; using an empty deployment map");
        return Ok(DeploymentConfigs::default());
    }

    let map: DeploymentConfigs = toml::from_str(data).map_err(|e| LgtmError::DecodeError {
        document: DEPLOYMENT_DOCUMENT.to_string(),
        message: e.to_string(),
    })?;
    debug!(entries = map.len(), "loaded deployment map");
    Ok(map)
}

impl Config {
    /// Returns true if `text` matches the approval pattern.
    ///
    /// A config that was not produced by [`ConfigLoader`] has no compiled
    /// matcher and never matches.
    pub fn is_match(&self, text: &str) -> bool {
        match &self.matcher {
            Some(re) => re.is_match(text),
            None => false,
        }
    }

    /// The compiled approval pattern, if any.
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }

    /// First capture group of the pattern, when it matched a non-empty string.
    ///
    /// With the default pattern this is the token following `LGTM`, e.g.
    /// `"major"` for `"LGTM major"`.
    pub fn approver_argument(&self, text: &str) -> Option<String> {
        let captures = self.matcher.as_ref()?.captures(text)?;
        captures
            .get(1)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Serialize config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LgtmError::UserError(format!("failed to serialize config to JSON: {}", e)))
    }

    /// Serialize config to a TOML string.
    ///
    /// A loaded deployment map is written as a `[deployment_map]` table, but
    /// parsing the output ignores that table: the map only ever comes from the
    /// deployment document passed to [`ConfigLoader::parse`].
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| LgtmError::UserError(format!("failed to serialize config to TOML: {}", e)))
    }
}
