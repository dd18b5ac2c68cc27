//! Project configuration for lgtm.
//!
//! This module loads a project's `.lgtm` file (TOML) and, when deploys are
//! enabled, its deployment map. Unknown keys are ignored, fields left at their
//! zero value take the loader's process defaults, and the approval pattern is
//! compiled once per load.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{Config, DeploymentConfigs};
pub use operations::{CONFIG_DOCUMENT, ConfigLoader, DEPLOYMENT_DOCUMENT};
pub use types::ConfigDefaults;
