//! Project configuration (`mm-config.toml`)
//!
//! Resolution order:
//! 1. Environment variables (`MM_API_URL`, `MM_LANGUAGE`)
//! 2. Project config at the repository root
//!
//! Both keys are required in the file; the environment only overrides.

mod loader;
mod types;

pub use loader::{apply_env_overrides, ConfigWarning};
pub use types::{Config, Lang};
