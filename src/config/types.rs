//! Configuration type definitions

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MmResult;

use super::loader::{self, ConfigWarning};

/// Language of the competitor's starterpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Rust,
    Python,
    Java,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Rust, Lang::Python, Lang::Java];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Rust => "rust",
            Lang::Python => "python",
            Lang::Java => "java",
        }
    }

    /// Directory holding the competitor's strategy code, relative to the project root.
    pub fn strategy_dir(&self) -> &'static str {
        match self {
            Lang::Rust => "src/strategy",
            Lang::Python => "strategy",
            Lang::Java => "src/com/bot/strategy",
        }
    }

    /// Upstream starterpack repository for this language.
    pub fn starterpack_url(&self) -> &'static str {
        match self {
            Lang::Rust => "https://github.com/mechmania/rust-starterpack",
            Lang::Python => "https://github.com/mechmania/python-starterpack",
            Lang::Java => "https://github.com/mechmania/java-starterpack",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Lang::ALL
            .into_iter()
            .find(|lang| lang.as_str() == lower)
            .ok_or_else(|| format!("unknown language '{}'", s))
    }
}

/// Contents of `mm-config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub language: Lang,

    #[serde(rename = "api-url")]
    pub api_url: String,
}

impl Config {
    /// Load configuration from a TOML file, applying environment overrides.
    pub fn load(path: &Path) -> MmResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MmResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Base API URL without trailing slashes.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}
