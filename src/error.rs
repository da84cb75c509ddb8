//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: fatal problems with the manifest handed to a run
//! - RegistryError: failures talking to the npm registry or GitHub
//! - ConfigError: invalid configuration file or values
//! - SnapshotError: failures of the on-disk snapshot store

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Registry / release API related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Snapshot store related errors
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Errors that make a whole analysis run impossible
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read the manifest file
    #[error("failed to read manifest {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest text is not valid JSON
    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Manifest is valid JSON but not an object
    #[error("invalid JSON: manifest must be an object")]
    NotAnObject,

    /// Neither dependencies nor devDependencies contain anything
    #[error("no dependencies/devDependencies found")]
    NoDependencies,
}

/// Errors related to registry and release API communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Non-2xx HTTP status; displayed as `<code> <reason>`, e.g. `404 Not Found`
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    /// Transport failure (DNS, connect, timeout, ...)
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body could not be decoded
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// HTTP client construction failed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// A value is out of range
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors related to the snapshot store
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Reading or writing the store file failed
    #[error("snapshot store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store file exists but cannot be decoded
    #[error("snapshot store {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// Snapshot name was empty after trimming
    #[error("please add a snapshot name")]
    EmptyName,

    /// Manifest content was empty after trimming
    #[error("nothing to save")]
    EmptyContent,

    /// No snapshot with the given name
    #[error("snapshot '{name}' not found")]
    NotFound { name: String },
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new InvalidJson error
    pub fn invalid_json(message: impl Into<String>) -> Self {
        ManifestError::InvalidJson {
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a Status error from an HTTP status code
    pub fn status(status: reqwest::StatusCode) -> Self {
        RegistryError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Creates a new Network error
    pub fn network(message: impl Into<String>) -> Self {
        RegistryError::Network {
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidValue error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl SnapshotError {
    /// Creates a new Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_status_display_matches_http_line() {
        let err = RegistryError::status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found");

        let err = RegistryError::status(reqwest::StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "403 Forbidden");
    }

    #[test]
    fn test_registry_network_display() {
        let err = RegistryError::network("connection refused");
        let msg = err.to_string();
        assert!(msg.contains("network error"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_manifest_error_invalid_json() {
        let err = ManifestError::invalid_json("expected value at line 1 column 1");
        let msg = format!("{}", err);
        assert!(msg.starts_with("invalid JSON"));
        assert!(msg.contains("line 1 column 1"));
    }

    #[test]
    fn test_manifest_error_no_dependencies() {
        let err = ManifestError::NoDependencies;
        assert_eq!(err.to_string(), "no dependencies/devDependencies found");
    }

    #[test]
    fn test_manifest_error_read() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ManifestError::read_error("/tmp/package.json", io);
        let msg = err.to_string();
        assert!(msg.contains("failed to read manifest"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::invalid_value("concurrency", "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("'concurrency'"));
        assert!(msg.contains("at least 1"));
    }

    #[test]
    fn test_snapshot_error_messages() {
        assert_eq!(SnapshotError::EmptyName.to_string(), "please add a snapshot name");
        assert_eq!(SnapshotError::EmptyContent.to_string(), "nothing to save");
        let err = SnapshotError::NotFound {
            name: "baseline".to_string(),
        };
        assert!(err.to_string().contains("'baseline'"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::NoDependencies.into();
        assert!(app_err.to_string().contains("no dependencies"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let app_err: AppError = RegistryError::status(reqwest::StatusCode::NOT_FOUND).into();
        assert_eq!(app_err.to_string(), "404 Not Found");
    }

    #[test]
    fn test_app_error_from_snapshot_error() {
        let app_err: AppError = SnapshotError::EmptyName.into();
        assert!(app_err.to_string().contains("snapshot name"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::NotAnObject;
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotAnObject"));
    }
}
