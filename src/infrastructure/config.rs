//! Configuration management
//!
//! Settings are layered: defaults, then `$HOME/.doryctl/config.yaml` (or
//! `--config`), then `DORYCTL_*` environment variables. Command-line flags
//! are applied last by the CLI.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`Config::server_url`]
pub const ENV_SERVER_URL: &str = "DORYCTL_SERVER_URL";
/// Environment variable overriding [`Config::access_token`]
pub const ENV_ACCESS_TOKEN: &str = "DORYCTL_ACCESS_TOKEN";
/// Environment variable overriding [`Config::insecure`]
pub const ENV_INSECURE: &str = "DORYCTL_INSECURE";
/// Environment variable overriding [`Config::timeout_secs`]
pub const ENV_TIMEOUT: &str = "DORYCTL_TIMEOUT";
/// Environment variable overriding [`Config::log_level`]
pub const ENV_LOG_LEVEL: &str = "DORYCTL_LOG_LEVEL";

const CONFIG_DIR: &str = ".doryctl";
const CONFIG_FILE: &str = "config.yaml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("read config file {path} error: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`Config`]
    #[error("parse config file {path} error: {message}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// An environment variable holds an unusable value
    #[error("environment variable {var}={value} format error: {reason}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
        /// Expected format.
        reason: &'static str,
    },

    /// No server URL is configured
    #[error("server_url not configured, set server_url in .doryctl/config.yaml or DORYCTL_SERVER_URL")]
    MissingServerUrl,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the platform server
    pub server_url: String,
    /// Token sent with every request
    pub access_token: String,
    /// Accept invalid TLS certificates
    pub insecure: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Log level, `off` disables logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            access_token: String::new(),
            insecure: false,
            timeout_secs: 5,
            log_level: "off".to_string(),
        }
    }
}

impl Config {
    /// Returns `$HOME/.doryctl/config.yaml`, if a home directory is known
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the config file at `path`, or at [`Config::default_path`].
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_yaml(&text, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    fn from_yaml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Applies `DORYCTL_*` variables from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] for a malformed value.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Applies overrides read through `lookup`; empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] for a malformed value.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_SERVER_URL) {
            self.server_url = value;
        }
        if let Some(value) = get(ENV_ACCESS_TOKEN) {
            self.access_token = value;
        }
        if let Some(value) = get(ENV_INSECURE) {
            self.insecure = parse_bool(&value).ok_or(ConfigError::InvalidEnv {
                var: ENV_INSECURE,
                value,
                reason: "expected true or false",
            })?;
        }
        if let Some(value) = get(ENV_TIMEOUT) {
            self.timeout_secs = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_TIMEOUT,
                value,
                reason: "expected a number of seconds",
            })?;
        }
        if let Some(value) = get(ENV_LOG_LEVEL) {
            self.log_level = value;
        }
        Ok(self)
    }

    /// Returns the server URL without trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingServerUrl`] when unset.
    pub fn require_server_url(&self) -> Result<&str, ConfigError> {
        let url = self.server_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::MissingServerUrl);
        }
        Ok(url)
    }

    /// Request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether logging was requested through the config
    #[must_use]
    pub fn logging_enabled(&self) -> bool {
        !self.log_level.is_empty() && !self.log_level.eq_ignore_ascii_case("off")
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.log_level, "off");
        assert!(!config.logging_enabled());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.yaml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_url: https://dory.example.com/").unwrap();
        writeln!(file, "access_token: abc").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server_url, "https://dory.example.com/");
        assert_eq!(config.access_token, "abc");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.require_server_url().unwrap(), "https://dory.example.com");
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(Config::load(Some(file.path())).unwrap(), Config::default());
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: [not, a, number]").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default()
            .with_overrides_from(env(&[
                (ENV_SERVER_URL, "http://localhost:9000"),
                (ENV_ACCESS_TOKEN, "token"),
                (ENV_INSECURE, "true"),
                (ENV_TIMEOUT, "30"),
                (ENV_LOG_LEVEL, "debug"),
            ]))
            .unwrap();

        assert_eq!(config.server_url, "http://localhost:9000");
        assert_eq!(config.access_token, "token");
        assert!(config.insecure);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.logging_enabled());
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let base = Config {
            server_url: "http://from-file".to_string(),
            ..Config::default()
        };
        let config = base
            .clone()
            .with_overrides_from(env(&[(ENV_SERVER_URL, "  ")]))
            .unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_invalid_env_values() {
        let err = Config::default()
            .with_overrides_from(env(&[(ENV_TIMEOUT, "soon")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "environment variable DORYCTL_TIMEOUT=soon format error: expected a number of seconds"
        );

        let err = Config::default()
            .with_overrides_from(env(&[(ENV_INSECURE, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_INSECURE, .. }));
    }

    #[test]
    fn test_missing_server_url() {
        let err = Config::default().require_server_url().unwrap_err();
        assert_eq!(
            err.to_string(),
            "server_url not configured, set server_url in .doryctl/config.yaml or DORYCTL_SERVER_URL"
        );
    }
}
