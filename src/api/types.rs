//! Wire types for the tournament API

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitRequest<'a> {
    pub language: &'a str,
    /// Base64 of the gzipped strategy tarball
    pub data: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitResponse {
    pub submission_id: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct SwitchRequest {
    pub version: u32,
}

/// Error body returned by the server on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

/// Compilation state of a submission or stored version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompileStatus {
    Pending,
    Success,
    Failure,
}

impl CompileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileStatus::Pending => "pending",
            CompileStatus::Success => "success",
            CompileStatus::Failure => "failure",
        }
    }
}

impl std::fmt::Display for CompileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationResult {
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub build_log: String,
}

/// Response of `GET /bot/compilation/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compilation {
    pub status: CompileStatus,
    pub result: CompilationResult,
}

impl Compilation {
    pub fn is_pending(&self) -> bool {
        self.status == CompileStatus::Pending
    }
}

/// One stored bot version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotVersion {
    #[serde(rename = "version")]
    pub number: u32,
    pub language: String,
    pub compile_status: CompileStatus,
    #[serde(default)]
    pub compiled_at: String,
    #[serde(default)]
    pub submitted_at: String,
}

/// Response of `GET /bot/versions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionListing {
    pub versions: Vec<BotVersion>,
    #[serde(default)]
    pub active_version: Option<u32>,
}

impl VersionListing {
    /// Highest version number, which is what `latest` refers to.
    pub fn latest(&self) -> Option<u32> {
        self.versions.iter().map(|v| v.number).max()
    }

    pub fn find(&self, number: u32) -> Option<&BotVersion> {
        self.versions.iter().find(|v| v.number == number)
    }
}
