//! Auth token persistence (`.mm-token` at the project root)

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MmError, MmResult};
use crate::project::TOKEN_NAME;

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(TOKEN_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token, trimmed.
    pub fn read(&self) -> MmResult<String> {
        let content = fs::read_to_string(&self.path).map_err(|source| MmError::NotLoggedIn {
            file: self.path.clone(),
            source,
        })?;
        Ok(content.trim().to_string())
    }

    pub fn save(&self, token: &str) -> MmResult<()> {
        fs::write(&self.path, token.trim())?;
        tracing::debug!(path = %self.path.display(), "saved auth token");
        Ok(())
    }
}
