//! Runtime configuration
//!
//! Values are resolved in order: CLI flags > config file > defaults. The
//! config file is TOML; every key is optional:
//!
//! ```toml
//! registry_url = "https://registry.npmjs.org"
//! github_api_url = "https://api.github.com"
//! github_token = "ghp_..."
//! concurrency = 4
//! timeout_secs = 30
//! release_limit = 5
//! snapshot_file = "/home/me/.local/share/depradar/snapshots.json"
//! ```

use crate::error::ConfigError;
use crate::pipeline::DEFAULT_RELEASE_LIMIT;
use crate::registry::{DEFAULT_GITHUB_API_URL, DEFAULT_REGISTRY_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "depradar.toml";

/// Default number of dependencies analyzed at once
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted when no token is configured
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Upper bound for `release_limit` (GitHub page size)
const MAX_RELEASE_LIMIT: usize = 100;

/// Config file contents; absent keys fall back to defaults
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub github_api_url: Option<String>,
    pub github_token: Option<String>,
    pub concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub release_limit: Option<usize>,
    pub snapshot_file: Option<PathBuf>,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// npm registry base URL
    pub registry_url: String,
    /// GitHub API base URL
    pub github_api_url: String,
    /// Token for GitHub API requests
    pub github_token: Option<String>,
    /// Dependencies analyzed at once; 1 means strictly sequential
    pub concurrency: usize,
    /// Per-request HTTP timeout
    pub timeout: Duration,
    /// Releases inspected per repository
    pub release_limit: usize,
    /// Snapshot store location
    pub snapshot_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            github_token: None,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            release_limit: DEFAULT_RELEASE_LIMIT,
            snapshot_file: default_snapshot_file(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `depradar.toml` in the
    /// working directory is used when present, otherwise defaults. Values
    /// are not range-checked here; call [`Config::validate`] once
    /// command-line overrides are applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => Some(read_config_file(path)?),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Some(read_config_file(fallback)?)
                } else {
                    None
                }
            }
        };

        let config = match file {
            Some(file) => Self::default().merge(file),
            None => Self::default(),
        }
        .with_token_fallback(std::env::var(GITHUB_TOKEN_ENV).ok());
        Ok(config)
    }

    /// Overlay values set in `file`
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.registry_url {
            self.registry_url = v;
        }
        if let Some(v) = file.github_api_url {
            self.github_api_url = v;
        }
        if file.github_token.is_some() {
            self.github_token = file.github_token;
        }
        if let Some(v) = file.concurrency {
            self.concurrency = v;
        }
        if let Some(v) = file.timeout_secs {
            self.timeout = Duration::from_secs(v);
        }
        if let Some(v) = file.release_limit {
            self.release_limit = v;
        }
        if let Some(v) = file.snapshot_file {
            self.snapshot_file = v;
        }
        self
    }

    /// Use `token` when no token is configured; empty values are ignored
    pub fn with_token_fallback(mut self, token: Option<String>) -> Self {
        if self.github_token.is_none() {
            self.github_token = token.filter(|t| !t.is_empty());
        }
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::invalid_value("concurrency", "must be at least 1"));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::invalid_value("timeout_secs", "must be at least 1"));
        }
        if self.release_limit == 0 || self.release_limit > MAX_RELEASE_LIMIT {
            return Err(ConfigError::invalid_value(
                "release_limit",
                format!("must be between 1 and {}", MAX_RELEASE_LIMIT),
            ));
        }
        for (key, url) in [
            ("registry_url", &self.registry_url),
            ("github_api_url", &self.github_api_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::invalid_value(
                    key,
                    format!("'{}' is not an http(s) URL", url),
                ));
            }
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Default snapshot store path.
/// Uses $XDG_DATA_HOME/depradar if XDG_DATA_HOME is set,
/// otherwise ~/.local/share/depradar, or ./depradar if neither is available.
pub fn default_snapshot_file() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir()).join("snapshots.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("depradar")
}
