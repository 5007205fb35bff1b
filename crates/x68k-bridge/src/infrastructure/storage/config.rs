//! TOML-based configuration for the bridge.
//!
//! The configuration file is looked up in this order:
//!
//! 1. A path passed explicitly (first command-line argument of the binary).
//! 2. The `X68K_BRIDGE_CONFIG` environment variable.
//! 3. The platform config directory:
//!    - Windows:  `%APPDATA%\X68kBridge\config.toml`
//!    - Linux:    `$XDG_CONFIG_HOME/x68kbridge/config.toml` or `~/.config/x68kbridge/config.toml`
//!    - macOS:    `~/Library/Application Support/X68kBridge/config.toml`
//!
//! A missing file is not an error: the defaults below are used instead.
//!
//! ```toml
//! [keyboard]
//! model = "zui_key_num_fn"   # zui_key | zui_key_num_fn | num_fn
//! fn_keycode = 0x75
//!
//! [queue]
//! depth = 32
//!
//! [logging]
//! level = "info"
//! ```
//!
//! # Serde default values
//!
//! Every field carries `#[serde(default)]`, so a file that only sets
//! `keyboard.model` is complete.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use x68k_keycore::keymap::x68k;
use x68k_keycore::{KeyboardModel, FN_KEYCODE};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "X68K_BRIDGE_CONFIG";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file parsed but holds a value the bridge cannot run with.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level bridge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which keyboard is attached and how its Fn key is marked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// Table pair to translate with.
    #[serde(default)]
    pub model: KeyboardModel,
    /// Keycode that marks Fn keys in the tables.  Must be non-zero and not
    /// produced by any real X68000 key.
    #[serde(default = "default_fn_keycode")]
    pub fn_keycode: u8,
}

/// Outgoing keycode queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueConfig {
    /// Number of bytes buffered between translation and transmission (1–255).
    #[serde(default = "default_depth")]
    pub depth: u8,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_fn_keycode() -> u8 {
    FN_KEYCODE
}
fn default_depth() -> u8 {
    32
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            model: KeyboardModel::default(),
            fn_keycode: default_fn_keycode(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Checks values that parse correctly but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero queue depth, an unknown log
    /// level, or an Fn keycode that is zero or already sent by a real X68000
    /// key (every table position producing it would become an Fn key).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue.depth == 0 {
            return Err(ConfigError::Invalid("queue.depth must be between 1 and 255".into()));
        }
        if self.keyboard.fn_keycode == 0 {
            return Err(ConfigError::Invalid(
                "keyboard.fn_keycode must not be 0x00 (reserved for unmapped keys)".into(),
            ));
        }
        if let Some(name) = x68k::key_name(self.keyboard.fn_keycode) {
            return Err(ConfigError::Invalid(format!(
                "keyboard.fn_keycode 0x{:02x} is the X68000 {name} key",
                self.keyboard.fn_keycode
            )));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !matches!(level.as_str(), "error" | "warn" | "info" | "debug" | "trace") {
            return Err(ConfigError::Invalid(format!(
                "logging.level {:?} is not one of error, warn, info, debug, trace",
                self.logging.level
            )));
        }
        Ok(())
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the config file path: `explicit`, then [`CONFIG_PATH_ENV`], then
/// the platform directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if neither override is given
/// and the base directory cannot be determined.
pub fn config_file_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.toml"))
}

/// Loads and validates the config from the resolved path, returning defaults
/// if the file does not exist.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = config_file_path(explicit)?;
    load_config_from(&path)
}

/// Loads and validates the config stored at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] if the TOML is malformed, and
/// [`ConfigError::Invalid`] if a value fails validation.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let cfg = match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str::<AppConfig>(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Persists `config` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config directory including the bridge subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("X68kBridge"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("x68kbridge"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("X68kBridge")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
