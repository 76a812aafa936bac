//! Error types for mm-cli
//!
//! Library code returns `MmError`; command handlers wrap it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mm-cli operations
pub type MmResult<T> = Result<T, MmError>;

/// Main error type for mm-cli operations
#[derive(Error, Debug)]
pub enum MmError {
    /// No `mm-config.toml` in the working directory or any ancestor
    #[error("could not find {name}. make sure you are in your mechmania repository")]
    ProjectNotFound { name: &'static str },

    /// Config file could not be read
    #[error("failed to read config file: {}", file.display())]
    ConfigRead {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or does not match the schema
    #[error("failed to parse config from {}: {message}", file.display())]
    ConfigParse { file: PathBuf, message: String },

    /// Auth token missing or unreadable
    #[error("failed to read certificate in {}\n\n have you logged in?", file.display())]
    NotLoggedIn {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Authenticated endpoint called without a token loaded
    #[error("no auth token loaded\n\n have you logged in?")]
    MissingToken,

    /// Transport-level HTTP failure
    #[error("request to {endpoint} failed")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error(transparent)]
    Api(#[from] crate::api::ApiError),

    /// Success response whose body did not match the expected shape
    #[error("failed to parse response")]
    Decode(#[source] reqwest::Error),

    /// Strategy directory missing for the configured language
    #[error("could not find strategy code: {} does not exist", path.display())]
    StrategyNotFound { path: PathBuf },

    /// Archive creation failed
    #[error("failed to {stage}")]
    Archive {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Version string was neither a number nor `latest`
    #[error("Invalid version: '{0}'. Expected a number or 'latest'")]
    InvalidVersion(String),

    /// `latest` requested but the server has no versions
    #[error("No versions available to switch to")]
    NoVersions,

    /// Requested version is not in the listing
    #[error("Version {0} not found")]
    VersionNotFound(u32),

    /// Requested version did not compile
    #[error("Version {version} has status '{status}', cannot switch")]
    VersionNotSwitchable { version: u32, status: String },

    /// External program could not be launched
    #[error("failed to run {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External program exited unsuccessfully
    #[error("{what} failed: {stderr}")]
    CommandFailed { what: String, stderr: String },

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
