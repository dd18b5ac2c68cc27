//! Process-wide defaults for lgtm configuration.
//!
//! This module defines the built-in default values and the [`ConfigDefaults`]
//! struct that the loader consults whenever a per-project field is left at its
//! zero value.

use crate::error::{LgtmError, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the required approval count.
pub const ENV_APPROVALS: &str = "LGTM_APPROVALS";
/// Environment variable overriding the approval comment pattern.
pub const ENV_PATTERN: &str = "LGTM_PATTERN";
/// Environment variable overriding the approving team.
pub const ENV_TEAM: &str = "LGTM_TEAM";
/// Environment variable overriding the self-approval-disallowed flag.
pub const ENV_SELF_APPROVAL_OFF: &str = "LGTM_SELF_APPROVAL_OFF";
/// Environment variable overriding the approval algorithm name.
pub const ENV_APPROVAL_ALGORITHM: &str = "LGTM_APPROVAL_ALGORITHM";
/// Environment variable overriding the version algorithm name.
pub const ENV_VERSION_ALGORITHM: &str = "LGTM_VERSION_ALGORITHM";

// Built-in values used when neither the project file nor the environment sets a field
pub(crate) fn default_approvals() -> i64 {
    2
}
pub(crate) fn default_pattern() -> String {
    r"(?i)^LGTM\s*(\S*)".to_string()
}
pub(crate) fn default_team() -> String {
    "MAINTAINERS".to_string()
}
pub(crate) fn default_approval_algorithm() -> String {
    "simple".to_string()
}
pub(crate) fn default_version_algorithm() -> String {
    "semver".to_string()
}

/// Defaults applied to every project configuration a loader parses.
///
/// Built once at process start, either from the built-in values
/// ([`ConfigDefaults::default`]) or from the `LGTM_*` environment variables
/// ([`ConfigDefaults::from_env`]), and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDefaults {
    /// Number of approvals required before a merge.
    pub approvals: i64,

    /// Regular expression recognizing an approval comment.
    pub pattern: String,

    /// Team whose members may approve.
    pub team: String,

    /// Whether pull request authors are barred from approving their own work.
    pub self_approval_off: bool,

    /// Name of the approval counting algorithm.
    pub approval_algorithm: String,

    /// Name of the version computation algorithm.
    pub version_algorithm: String,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            approvals: default_approvals(),
            pattern: default_pattern(),
            team: default_team(),
            self_approval_off: false,
            approval_algorithm: default_approval_algorithm(),
            version_algorithm: default_version_algorithm(),
        }
    }
}

impl ConfigDefaults {
    /// Read defaults from the `LGTM_*` environment variables.
    ///
    /// Unset variables keep their built-in value. Call this once at startup.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read defaults through an arbitrary lookup function.
    ///
    /// `lookup` receives a variable name such as `LGTM_TEAM` and returns its
    /// value, or `None` to keep the built-in default.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDefaults)` - Defaults with every supplied override applied
    /// * `Err(LgtmError::InvalidDefault)` - A numeric or boolean value failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaults = Self::default();

        if let Some(value) = lookup(ENV_APPROVALS) {
            defaults.approvals = parse_count(ENV_APPROVALS, &value)?;
        }
        if let Some(value) = lookup(ENV_PATTERN) {
            defaults.pattern = value;
        }
        if let Some(value) = lookup(ENV_TEAM) {
            defaults.team = value;
        }
        if let Some(value) = lookup(ENV_SELF_APPROVAL_OFF) {
            defaults.self_approval_off = parse_flag(ENV_SELF_APPROVAL_OFF, &value)?;
        }
        if let Some(value) = lookup(ENV_APPROVAL_ALGORITHM) {
            defaults.approval_algorithm = value;
        }
        if let Some(value) = lookup(ENV_VERSION_ALGORITHM) {
            defaults.version_algorithm = value;
        }

        Ok(defaults)
    }

    pub fn with_approvals(mut self, approvals: i64) -> Self {
        self.approvals = approvals;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    pub fn with_self_approval_off(mut self, self_approval_off: bool) -> Self {
        self.self_approval_off = self_approval_off;
        self
    }

    pub fn with_approval_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.approval_algorithm = algorithm.into();
        self
    }

    pub fn with_version_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.version_algorithm = algorithm.into();
        self
    }
}

/// Parse an integer setting. Surrounding whitespace is rejected.
fn parse_count(name: &str, value: &str) -> Result<i64> {
    value.parse().map_err(|_| LgtmError::InvalidDefault {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Parse a boolean setting, accepting the usual flag spellings.
///
/// Surrounding whitespace is rejected.
fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(LgtmError::InvalidDefault {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
