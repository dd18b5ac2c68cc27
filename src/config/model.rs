//! Config and deployment map definitions.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Approval policy for a single project.
///
/// This struct represents the contents of a project's `.lgtm` file after the
/// loader has filled in defaults. Unknown keys in the TOML are ignored and
/// missing keys start at their zero value.
///
/// A `Config` built by [`ConfigLoader`](super::ConfigLoader) always carries a
/// compiled matcher for `pattern`. One built any other way (`Default`, direct
/// deserialization) has none, and [`Config::is_match`] reports `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Approval policy
    // =========================================================================
    /// Number of approvals required before a pull request is mergeable.
    ///
    /// Any non-zero integer is kept as written, including negative values.
    pub approvals: i64,

    /// Regular expression recognizing an approval comment.
    pub pattern: String,

    /// Team whose members count as approvers.
    pub team: String,

    /// Whether the author's own approval is ignored.
    pub self_approval_off: bool,

    /// Name of the approval counting algorithm (e.g. "simple").
    pub approval_algorithm: String,

    // =========================================================================
    // Feature toggles
    // =========================================================================
    /// Merge the pull request once approved.
    pub do_merge: bool,

    /// Tag a new version after merging.
    pub do_version: bool,

    /// Post a status comment on the pull request.
    pub do_comment: bool,

    /// Trigger deployments; also gates loading of the deployment map.
    #[serde(rename = "do_deploy")]
    pub do_deployment: bool,

    // =========================================================================
    // Versioning
    // =========================================================================
    /// Name of the version computation algorithm (e.g. "semver").
    pub version_algorithm: String,

    /// Format string for generated version tags.
    pub version_format: String,

    // =========================================================================
    // Derived state
    // =========================================================================
    /// Deployment map, populated only when `do_deploy` is set.
    #[serde(skip_deserializing, skip_serializing_if = "DeploymentConfigs::is_empty")]
    pub deployment_map: DeploymentConfigs,

    #[serde(skip)]
    pub(crate) matcher: Option<Regex>,
}

/// Deployment targets and rules for a project.
///
/// The shape of this document belongs to the deploy step of the bot, so it is
/// kept as an open mapping of top-level keys to TOML values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentConfigs {
    entries: BTreeMap<String, toml::Value>,
}

impl DeploymentConfigs {
    /// Look up a top-level entry.
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &toml::Value)> {
        self.entries.iter()
    }

    /// Top-level keys whose values are tables, typically one per environment.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_table())
            .map(|(key, _)| key.as_str())
    }
}

impl FromIterator<(String, toml::Value)> for DeploymentConfigs {
    fn from_iter<I: IntoIterator<Item = (String, toml::Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
