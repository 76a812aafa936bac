//! Versions and switch command handlers

use anyhow::{bail, Context, Result};
use mm_cli::api::VersionListing;
use mm_cli::versions::{self, Version};
use mm_cli::{ApiClient, Project};

use super::load_project;
use crate::ui::context::UiContext;
use crate::ui::prompt;
use crate::ui::views::versions::render_versions;

async fn fetch(project: &Project) -> Result<(ApiClient, VersionListing)> {
    let client = ApiClient::for_project(project)?;
    let listing = client
        .versions()
        .await
        .context("failed to fetch bot versions")?;
    Ok((client, listing))
}

pub async fn cmd_versions(ui: &UiContext) -> Result<()> {
    let project = load_project(ui)?;
    let (_, listing) = fetch(&project).await?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "versions",
            "versions": listing.versions,
            "active_version": listing.active_version,
            "latest": listing.latest(),
        }))?;
        return Ok(());
    }

    print!("{}", render_versions(&listing, ui.color, ui.unicode));
    Ok(())
}

pub async fn cmd_switch(ui: &UiContext, version: Option<Version>) -> Result<()> {
    let project = load_project(ui)?;
    let (client, listing) = fetch(&project).await?;

    let requested = match version {
        Some(v) => v,
        None => {
            if ui.json {
                bail!("a version argument is required with --json");
            }
            print!("{}", render_versions(&listing, ui.color, ui.unicode));
            let answer = prompt::input(ui, "Enter version number to switch to")?;
            answer.parse::<Version>()?
        }
    };

    let number = versions::select(&listing, requested)?;
    tracing::debug!(%requested, number, "resolved version");

    let reply = client
        .change_version(number)
        .await
        .context("failed to switch version")?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "switch",
            "version": number,
            "response": reply,
        }))?;
    } else {
        println!("Server response: {}", reply);
    }
    Ok(())
}
