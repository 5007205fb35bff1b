//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module reads the TOML configuration from an explicit path
//! or the platform-appropriate directory, and falls back to defaults when no
//! file exists yet (first run).

pub mod config;
