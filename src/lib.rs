//! mm-cli - MechMania competitor toolkit
//!
//! Library half of the `mm` binary: project discovery, configuration, the
//! tournament API client, strategy packaging, the local match engine and
//! update checks. Terminal presentation lives in the binary.

pub mod api;
pub mod archive;
pub mod config;
pub mod engine;
pub mod error;
pub mod project;
pub mod session;
pub mod update;
pub mod versions;

// Re-exports for convenience
pub use api::{ApiClient, ApiError};
pub use config::{Config, Lang};
pub use error::{MmError, MmResult};
pub use project::{find_project_root, Project, CONFIG_NAME, TOKEN_NAME};
pub use session::TokenStore;
pub use versions::Version;
