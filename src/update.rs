//! Self-update for the CLI and upstream merges for the starterpack
//!
//! The CLI is compared by commit hash against the published repository; the
//! starterpack by counting upstream commits not yet merged.

use std::path::Path;
use std::process::Output;

use tokio::process::Command;

use crate::config::Lang;
use crate::error::{MmError, MmResult};
use crate::project::Project;

pub const CLI_REPO_URL: &str = "https://github.com/mechmania/cli";

const UNKNOWN_HASH: &str = "unknown";

/// Commit this binary was built from (see `build.rs`).
pub fn current_cli_hash() -> &'static str {
    env!("GIT_HASH")
}

/// Which parts of the installation are behind upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateStatus {
    pub cli: bool,
    pub starterpack: bool,
}

impl UpdateStatus {
    pub fn any(&self) -> bool {
        self.cli || self.starterpack
    }

    /// Notice for `mm update --check`; `None` when up to date.
    pub fn notice(&self) -> Option<&'static str> {
        match (self.cli, self.starterpack) {
            (true, true) => {
                Some("Updates available for CLI and starterpack! Run with 'update' command")
            }
            (true, false) => Some("CLI update available! Run with 'update' command"),
            (false, true) => Some("Starterpack update available! Run with 'update' command"),
            (false, false) => None,
        }
    }
}

async fn run_tool(program: &str, args: &[&str], cwd: Option<&Path>) -> MmResult<Output> {
    let mut cmd = Command::new(program);
    cmd.args(args).kill_on_drop(true);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    tracing::debug!(program, ?args, "running");
    cmd.output().await.map_err(|source| MmError::Spawn {
        program: program.to_string(),
        source,
    })
}

/// Run a tool and return its stdout, failing with its stderr on a bad exit.
async fn capture(program: &str, args: &[&str], cwd: Option<&Path>, what: &str) -> MmResult<String> {
    let output = run_tool(program, args, cwd).await?;
    if !output.status.success() {
        return Err(MmError::CommandFailed {
            what: what.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// First whitespace-separated token of `git ls-remote` output.
pub fn parse_ls_remote(output: &str) -> MmResult<String> {
    output
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| MmError::CommandFailed {
            what: "remote version check".to_string(),
            stderr: "invalid remote response".to_string(),
        })
}

pub fn parse_rev_count(output: &str) -> MmResult<u32> {
    output
        .trim()
        .parse()
        .map_err(|_| MmError::CommandFailed {
            what: "git rev-list".to_string(),
            stderr: format!("unexpected output '{}'", output.trim()),
        })
}

pub async fn remote_cli_hash() -> MmResult<String> {
    let out = capture(
        "git",
        &["ls-remote", CLI_REPO_URL, "HEAD"],
        None,
        "fetch remote hash",
    )
    .await?;
    parse_ls_remote(&out)
}

pub async fn has_cli_updates() -> MmResult<bool> {
    let current = current_cli_hash();
    if current == UNKNOWN_HASH {
        tracing::warn!("binary was built without a commit hash, skipping CLI update check");
        return Ok(false);
    }

    let latest = remote_cli_hash().await?;
    tracing::debug!(current, latest = %latest, "compared CLI hashes");
    Ok(current != latest)
}

pub async fn update_cli() -> MmResult<()> {
    capture(
        "cargo",
        &["install", "--git", CLI_REPO_URL, "--force"],
        None,
        "CLI update",
    )
    .await?;
    Ok(())
}

pub async fn has_upstream_changes(project: &Project) -> MmResult<bool> {
    has_upstream_changes_from(&project.root, project.config.language.starterpack_url()).await
}

/// Fetch `upstream_url` as remote `upstream` and report whether `upstream/main`
/// has commits that `HEAD` lacks.
pub async fn has_upstream_changes_from(root: &Path, upstream_url: &str) -> MmResult<bool> {
    // Fails harmlessly when the remote already exists.
    run_tool("git", &["remote", "add", "upstream", upstream_url], Some(root)).await?;

    capture(
        "git",
        &["fetch", "upstream", "main"],
        Some(root),
        "Git fetch",
    )
    .await?;

    let out = capture(
        "git",
        &["rev-list", "--count", "HEAD..upstream/main"],
        Some(root),
        "Git rev-list",
    )
    .await?;

    let behind = parse_rev_count(&out)?;
    tracing::debug!(behind, "starterpack upstream status");
    Ok(behind > 0)
}

/// Stage the strategy code so the merge keeps it, then merge `upstream/main`.
pub async fn update_starterpack(root: &Path, language: Lang) -> MmResult<()> {
    run_tool("git", &["add", language.strategy_dir()], Some(root)).await?;

    capture(
        "git",
        &["merge", "upstream/main", "--no-edit"],
        Some(root),
        "Git merge",
    )
    .await?;
    Ok(())
}

/// Check both the CLI and the starterpack concurrently.
pub async fn check_updates(project: &Project) -> MmResult<UpdateStatus> {
    let (cli, starterpack) = tokio::join!(has_cli_updates(), has_upstream_changes(project));
    Ok(UpdateStatus {
        cli: cli?,
        starterpack: starterpack?,
    })
}
