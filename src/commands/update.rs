//! Update command handler

use anyhow::{Context, Result};
use mm_cli::update;

use super::load_project;
use crate::ui::context::UiContext;
use crate::ui::views::update::{render_check, render_step_done, render_step_start};

pub async fn cmd_update(ui: &UiContext, check_only: bool) -> Result<()> {
    let project = load_project(ui)?;

    let status = update::check_updates(&project)
        .await
        .context("failed to check for updates")?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "update_check",
            "cli": status.cli,
            "starterpack": status.starterpack,
        }))?;
    }

    if check_only {
        if !ui.json {
            print!("{}", render_check(&status, ui.color));
        }
        return Ok(());
    }

    if !status.any() {
        if !ui.json {
            println!("Everything is up to date!");
        }
        return Ok(());
    }

    if status.cli {
        if !ui.json {
            print!("{}", render_step_start("Updating CLI...", ui.color, ui.unicode));
        }
        update::update_cli().await.context("failed to update CLI")?;
        if !ui.json {
            print!(
                "{}",
                render_step_done("CLI updated successfully", ui.color, ui.unicode)
            );
        }
    }

    if status.starterpack {
        if !ui.json {
            print!(
                "{}",
                render_step_start("Updating starterpack...", ui.color, ui.unicode)
            );
        }
        update::update_starterpack(&project.root, project.config.language)
            .await
            .context("failed to merge updates")?;
        if !ui.json {
            print!(
                "{}",
                render_step_done("Starterpack updated successfully", ui.color, ui.unicode)
            );
        }
    }

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "update_applied",
            "cli": status.cli,
            "starterpack": status.starterpack,
        }))?;
    }
    Ok(())
}
