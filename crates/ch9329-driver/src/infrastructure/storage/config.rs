//! TOML configuration for the `ch9329` tool.
//!
//! Read from an explicit path, or from the platform config directory:
//! - Linux:    `$XDG_CONFIG_HOME/ch9329/config.toml` (or `~/.config/ch9329/`)
//! - macOS:    `~/Library/Application Support/ch9329/config.toml`
//! - Windows:  `%APPDATA%\ch9329\config.toml`
//!
//! ```toml
//! [serial]
//! port = "/dev/ttyUSB0"
//! baud_rate = 9600
//! timeout_ms = 1000
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every field is optional. A missing field takes its default, and a missing
//! platform-default file means "all defaults", so the tool works before any
//! config exists. A file named explicitly with `--config` must exist.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

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
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriverConfig {
    #[serde(default)]
    pub serial: SerialSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UART settings for the chip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerialSettings {
    /// Device path, e.g. `/dev/ttyUSB0` or `COM3`.
    #[serde(default = "default_port")]
    pub port: String,
    /// Must match the rate stored on the chip (factory default 9600).
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    /// Read/write timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl SerialSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is unset: `"error"` .. `"trace"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_port() -> String {
    if cfg!(target_os = "windows") {
        "COM3".to_string()
    } else {
        "/dev/ttyUSB0".to_string()
    }
}
fn default_baud_rate() -> u32 {
    9600
}
fn default_timeout_ms() -> u64 {
    1000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud_rate: default_baud_rate(),
            timeout_ms: default_timeout_ms(),
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

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path of the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads the config from the platform config directory, returning defaults
/// if the file does not exist.
///
/// # Errors
///
/// See [`load_from_path`].
pub fn load_config() -> Result<DriverConfig, ConfigError> {
    load_from_path(&config_file_path()?)
}

/// Loads the config from `path`, returning defaults if the file does not
/// exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_from_path(path: &Path) -> Result<DriverConfig, ConfigError> {
    match load_required(path) {
        Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(DriverConfig::default())
        }
        other => other,
    }
}

/// Loads the config from a path the user named explicitly. A missing file is
/// an error here.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, including when it
/// does not exist, and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_required(path: &Path) -> Result<DriverConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("ch9329"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("ch9329")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("ch9329"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Writes `content` to a unique file under the system temp dir.
    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ch9329-config-{}-{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).expect("write temp config");
        path
    }

    #[test]
    fn test_defaults_match_chip_factory_settings() {
        // Arrange / Act
        let cfg = DriverConfig::default();

        // Assert
        assert_eq!(cfg.serial.baud_rate, 9600);
        assert_eq!(cfg.serial.timeout(), Duration::from_secs(1));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: DriverConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg, DriverConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let cfg: DriverConfig = toml::from_str("[serial]\nbaud_rate = 115200\n").expect("parse");

        assert_eq!(cfg.serial.baud_rate, 115_200);
        assert_eq!(cfg.serial.port, default_port());
        assert_eq!(cfg.serial.timeout_ms, 1000);
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn test_serializes_and_deserializes_round_trip() {
        let mut cfg = DriverConfig::default();
        cfg.serial.port = "/dev/ttyAMA0".to_string();
        cfg.logging.level = "debug".to_string();

        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: DriverConfig = toml::from_str(&toml_str).expect("deserialize");

        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_load_from_path_reads_file() {
        let path = temp_config("reads", "[serial]\nport = \"/dev/ttyS1\"\n");

        let cfg = load_from_path(&path).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(cfg.serial.port, "/dev/ttyS1");
    }

    #[test]
    fn test_load_from_missing_path_yields_defaults() {
        let path = std::env::temp_dir().join("ch9329-config-definitely-missing.toml");
        let cfg = load_from_path(&path).expect("missing file is not an error");
        assert_eq!(cfg, DriverConfig::default());
    }

    #[test]
    fn test_load_required_reports_missing_file() {
        // Arrange
        let path = std::env::temp_dir().join("ch9329-config-definitely-missing.toml");

        // Act
        let result = load_required(&path);

        // Assert
        match result {
            Err(ConfigError::Io { path: reported, source }) => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected ConfigError::Io, got {other:?}"),
        }
    }

    #[test]
    fn test_load_required_reads_existing_file() {
        let path = temp_config("required", "[logging]\nlevel = \"trace\"\n");

        let cfg = load_required(&path).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(cfg.logging.level, "trace");
        assert_eq!(cfg.serial, SerialSettings::default());
    }

    #[test]
    fn test_load_from_path_rejects_malformed_toml() {
        let path = temp_config("malformed", "[serial\nport = ");

        let result = load_from_path(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let result: Result<DriverConfig, _> = toml::from_str("[serial]\nbaud_rate = \"fast\"\n");
        assert!(result.is_err());
    }
}
