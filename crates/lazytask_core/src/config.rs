//! Session configuration.
//!
//! # Responsibility
//! - Hold the handful of knobs a session needs (currently logging only).
//! - Normalize and validate values before anything consumes them.
//!
//! # Invariants
//! - A constructed `LoggingConfig` always has a supported level and an
//!   absolute log directory.
//! - Nothing here reads environment variables or command-line flags.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_DIR_APP_NAME: &str = "lazytask";
const LOG_DIR_LEAF: &str = "logs";

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLogLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(dir) => {
                write!(f, "log_dir must be an absolute path, got `{dir}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Where and how verbosely the session writes its diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    level: &'static str,
    log_dir: PathBuf,
}

impl LoggingConfig {
    /// Builds a config from raw values.
    ///
    /// # Errors
    /// - `UnsupportedLogLevel` for anything outside trace|debug|info|warn|error.
    /// - `EmptyLogDir` / `RelativeLogDir` for unusable directories.
    pub fn new(level: &str, log_dir: impl AsRef<Path>) -> ConfigResult<Self> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: normalize_log_dir(log_dir.as_ref())?,
        })
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        self.log_dir.as_path()
    }
}

impl Default for LoggingConfig {
    /// Build-mode level, logs under `<temp_dir>/lazytask/logs`.
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: std::env::temp_dir()
                .join(LOG_DIR_APP_NAME)
                .join(LOG_DIR_LEAF),
        }
    }
}

/// Top-level session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub logging: LoggingConfig,
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> ConfigResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::UnsupportedLogLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &Path) -> ConfigResult<PathBuf> {
    let raw = log_dir.to_string_lossy();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(ConfigError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, LoggingConfig};

    #[test]
    fn level_is_normalized() {
        let dir = std::env::temp_dir();
        assert_eq!(LoggingConfig::new("INFO", &dir).unwrap().level(), "info");
        assert_eq!(LoggingConfig::new(" warning ", &dir).unwrap().level(), "warn");
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = LoggingConfig::new("loud", std::env::temp_dir()).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedLogLevel("loud".to_string()));
    }

    #[test]
    fn relative_and_empty_dirs_are_rejected() {
        let err = LoggingConfig::new("info", "logs/dev").unwrap_err();
        assert!(err.to_string().contains("absolute"));
        assert_eq!(
            LoggingConfig::new("info", "  ").unwrap_err(),
            ConfigError::EmptyLogDir
        );
    }

    #[test]
    fn default_log_dir_is_absolute() {
        let config = LoggingConfig::default();
        assert!(config.log_dir().is_absolute());
        assert!(config.log_dir().ends_with("lazytask/logs"));
    }
}
