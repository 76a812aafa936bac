//! Submit command handler
//!
//! Packages the strategy directory, uploads it, then polls the build until
//! the server reports a result. A failed build is reported, not returned as
//! an error: the upload itself succeeded.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use mm_cli::api::Compilation;
use mm_cli::{archive, ApiClient, MmError};

use super::load_project;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::submit::render_compilation;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

pub async fn cmd_submit(ui: &UiContext, no_wait: bool) -> Result<()> {
    let project = load_project(ui)?;

    let strategy = project.strategy_path();
    if !strategy.exists() {
        return Err(MmError::StrategyNotFound { path: strategy }.into());
    }

    let data = archive::compress_folder(&strategy)?;
    let encoded = archive::encode(&data);

    let client = ApiClient::for_project(&project)?;

    if !ui.json {
        println!("submitting bot...");
    }
    let submission_id = client
        .submit(project.config.language, &encoded)
        .await
        .context("failed to submit bot")?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "submitted",
            "submission_id": submission_id,
            "language": project.config.language.as_str(),
        }))?;
    } else {
        println!(
            "{}",
            ColoredText::success("uploaded successfully and queued for submission")
                .render(ui.color)
        );
    }

    if no_wait {
        if !ui.json {
            println!(
                "{}",
                ColoredText::dim(format!("submission id: {}", submission_id)).render(ui.color)
            );
        }
        return Ok(());
    }

    let compilation = wait_for_compilation(ui, &client, submission_id, POLL_INTERVAL).await?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "compilation",
            "submission_id": submission_id,
            "status": compilation.status,
            "success": compilation.result.success,
            "error_message": compilation.result.error_message,
            "build_log": compilation.result.build_log,
        }))?;
    } else {
        print!("{}", render_compilation(&compilation, ui.color));
    }
    Ok(())
}

fn progress(ui: &UiContext, text: &str) {
    if ui.json {
        return;
    }
    print!("{}", text);
    io::stdout().flush().ok();
}

async fn wait_for_compilation(
    ui: &UiContext,
    client: &ApiClient,
    submission_id: u32,
    interval: Duration,
) -> Result<Compilation> {
    progress(
        ui,
        "polling submission status (canceling here will not abort the submission)",
    );

    loop {
        progress(ui, ".");
        let compilation = client
            .compilation(submission_id)
            .await
            .context("failed to check submission status")?;

        if !compilation.is_pending() {
            progress(ui, "\n");
            tracing::info!(submission_id, status = %compilation.status, "compilation finished");
            return Ok(compilation);
        }

        tokio::time::sleep(interval).await;
    }
}
