//! Project discovery
//!
//! Every command runs inside a starterpack checkout, identified by the
//! `mm-config.toml` at its root.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigWarning};
use crate::error::{MmError, MmResult};

/// Project config file name.
pub const CONFIG_NAME: &str = "mm-config.toml";

/// Auth token file name, stored next to the config.
pub const TOKEN_NAME: &str = ".mm-token";

/// Find the nearest ancestor of `start` (inclusive) containing `mm-config.toml`.
pub fn find_project_root(start: &Path) -> MmResult<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_project_root(dir))
        .map(Path::to_path_buf)
        .ok_or(MmError::ProjectNotFound { name: CONFIG_NAME })
}

fn is_project_root(dir: &Path) -> bool {
    dir.join(CONFIG_NAME).is_file()
}

/// A located starterpack checkout and its loaded configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

impl Project {
    /// Locate the project from the current working directory.
    pub fn discover() -> MmResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd)
    }

    pub fn discover_from(start: &Path) -> MmResult<Self> {
        let root = find_project_root(start)?;
        Self::open(root)
    }

    /// Load the project rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> MmResult<Self> {
        let root = root.into();
        let (config, warnings) = Config::load_with_warnings(&root.join(CONFIG_NAME))?;
        tracing::debug!(root = %root.display(), language = %config.language, "loaded project");
        Ok(Self {
            root,
            config,
            warnings,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_NAME)
    }

    pub fn token_path(&self) -> PathBuf {
        self.root.join(TOKEN_NAME)
    }

    /// Strategy directory for the configured language.
    pub fn strategy_path(&self) -> PathBuf {
        self.root.join(self.config.language.strategy_dir())
    }
}
