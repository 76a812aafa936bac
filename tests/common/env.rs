//! Test environment for running the `mm` binary against a temp project.

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use tempfile::TempDir;
use tokio::io::AsyncWriteExt;

/// Result of running an mm CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parsed NDJSON events from stdout
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated starterpack checkout.
pub struct TestEnv {
    pub project_root: TempDir,
    mm_bin: PathBuf,
}

impl TestEnv {
    /// Empty directory, no `mm-config.toml`.
    pub fn bare() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            mm_bin: PathBuf::from(env!("CARGO_BIN_EXE_mm")),
        }
    }

    /// Project with `config` as its `mm-config.toml`.
    pub fn with_config(config: &str) -> Self {
        let env = Self::bare();
        env.write_project_file(mm_cli::CONFIG_NAME, config);
        env
    }

    /// Python project talking to `api_url`.
    pub fn python(api_url: &str) -> Self {
        Self::with_config(&super::python_config(api_url))
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Executable shell script (unix only).
    #[cfg(unix)]
    pub fn write_script(&self, relative: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.write_project_file(relative, &format!("#!/bin/sh\n{}\n", body));
        let path = self.project_path(relative);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod script");
    }

    pub fn login_as(&self, token: &str) {
        self.write_project_file(mm_cli::TOKEN_NAME, &format!("{}\n", token));
    }

    fn command(&self, cwd: &Path, args: &[&str]) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.mm_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("MM_API_URL")
            .env_remove("MM_LANGUAGE")
            .env_remove("MM_LOG")
            .env_remove("MM_LOG_JSON");
        cmd
    }

    /// Run mm from the project root
    pub async fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args).await
    }

    pub async fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_with_stdin(cwd, args, "").await
    }

    /// Run mm with `input` piped to stdin
    pub async fn run_with_stdin(&self, cwd: &Path, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(cwd, args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute mm");

        let mut stdin = child.stdin.take().expect("stdin is piped");
        // mm may exit before reading; a broken pipe here is not a test failure
        let _ = stdin.write_all(input.as_bytes()).await;
        drop(stdin);

        let output = child.wait_with_output().await.expect("Failed to wait for mm");
        TestResult::from_output(output)
    }
}
