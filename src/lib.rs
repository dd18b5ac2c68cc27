//! lgtm: per-project approval policy for the LGTM review and merge bot.
//!
//! Callers read a project's `.lgtm` file (and optional deployment file) from
//! wherever they keep it and hand the bytes to a [`config::ConfigLoader`].

pub mod config;
pub mod error;
pub mod exit_codes;
