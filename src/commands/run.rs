//! Run command handler
//!
//! Builds the bot with `scripts/build`, then plays `scripts/run` against
//! itself and records the gamelog under `logs/`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use mm_cli::engine::{ArgConfig, OutputMapping, OutputSource};
use mm_cli::MmError;

use super::engine::run_match;
use super::load_project;
use crate::cli::RunArgs;
use crate::ui::context::UiContext;

const SCRIPTS_DIR: &str = "scripts";
const LOGS_DIR: &str = "logs";

fn script_suffix() -> &'static str {
    if cfg!(windows) {
        ".bat"
    } else {
        ""
    }
}

/// `scripts/build` and `scripts/run` under `root`, both required.
fn bot_scripts(root: &Path) -> Result<(PathBuf, PathBuf)> {
    let scripts = root.join(SCRIPTS_DIR);
    if !scripts.exists() {
        bail!("unable to find build scripts");
    }

    let build = scripts.join(format!("build{}", script_suffix()));
    let run = scripts.join(format!("run{}", script_suffix()));
    if !build.exists() || !run.exists() {
        bail!("unable to find bot file");
    }
    Ok((build, run))
}

/// First free `logs/log-<timestamp>[-N].mmgl` under `root`.
pub(crate) fn gamelog_path(root: &Path, now: DateTime<Utc>) -> PathBuf {
    let dir = root.join(LOGS_DIR);
    let stem = format!("log-{}", now.format("%Y%m%d_%H%M%S"));

    let mut path = dir.join(format!("{}.mmgl", stem));
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{}-{}.mmgl", stem, n));
        n += 1;
    }
    path
}

async fn build_bot(root: &Path, script: &Path) -> Result<()> {
    tracing::info!(script = %script.display(), "building bot");
    let output = tokio::process::Command::new(script)
        .current_dir(root)
        .kill_on_drop(true)
        .output()
        .await
        .context("failed to build bot")?;

    if !output.status.success() {
        return Err(MmError::CommandFailed {
            what: "bot build".to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(())
}

fn engine_args(root: &Path, run_script: PathBuf, gamelog: PathBuf, args: &RunArgs) -> ArgConfig {
    ArgConfig {
        bot_a: run_script.clone(),
        bot_b: run_script,
        print: if args.quiet {
            None
        } else {
            Some(vec![OutputSource::BotA, OutputSource::BotB])
        },
        output: Some(vec![OutputMapping {
            sources: vec![OutputSource::Gamelog],
            path: gamelog,
        }]),
        timeout: args.timeout,
        workdir: Some(root.to_path_buf()),
        echo_to_stderr: false,
    }
}

pub async fn cmd_run(ui: &UiContext, args: RunArgs) -> Result<()> {
    let project = load_project(ui)?;
    let (build, run) = bot_scripts(&project.root)?;

    build_bot(&project.root, &build).await?;

    let gamelog = gamelog_path(&project.root, Utc::now());
    run_match(ui, engine_args(&project.root, run, gamelog.clone(), &args)).await?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "gamelog",
            "path": gamelog.display().to_string(),
        }))?;
    } else {
        println!("gamelog written to {}", gamelog.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn gamelog_name_uses_utc_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(
            gamelog_path(Path::new("/bot"), now),
            PathBuf::from("/bot/logs/log-20260307_090502.mmgl")
        );
    }

    #[test]
    fn gamelog_name_skips_existing_logs() {
        let dir = tempdir().unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 2).unwrap();
        let logs = dir.path().join("logs");
        std::fs::create_dir(&logs).unwrap();
        std::fs::write(logs.join("log-20260307_090502.mmgl"), "").unwrap();

        assert_eq!(
            gamelog_path(dir.path(), now),
            logs.join("log-20260307_090502-1.mmgl")
        );

        std::fs::write(logs.join("log-20260307_090502-1.mmgl"), "").unwrap();
        assert_eq!(
            gamelog_path(dir.path(), now),
            logs.join("log-20260307_090502-2.mmgl")
        );
    }

    #[test]
    fn missing_scripts_dir_is_reported() {
        let dir = tempdir().unwrap();
        let err = bot_scripts(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "unable to find build scripts");
    }

    #[test]
    fn missing_run_script_is_reported() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("scripts")).unwrap();
        std::fs::write(
            dir.path().join(format!("scripts/build{}", script_suffix())),
            "",
        )
        .unwrap();
        let err = bot_scripts(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "unable to find bot file");
    }

    #[test]
    fn quiet_drops_terminal_output() {
        let args = RunArgs {
            quiet: true,
            timeout: None,
        };
        let root = Path::new("/bot");
        let config = engine_args(root, PathBuf::from("run"), PathBuf::from("g.mmgl"), &args);
        assert_eq!(config.print, None);
        assert_eq!(config.bot_a, config.bot_b);
        assert_eq!(config.workdir, Some(PathBuf::from("/bot")));

        let config = engine_args(
            root,
            PathBuf::from("run"),
            PathBuf::from("g.mmgl"),
            &RunArgs::default(),
        );
        assert_eq!(
            config.print,
            Some(vec![OutputSource::BotA, OutputSource::BotB])
        );
    }
}
