//! Login command handler
//!
//! Exchanges team credentials for a token stored at the project root.

use anyhow::{bail, Context, Result};
use mm_cli::{ApiClient, TokenStore};

use super::load_project;
use crate::ui::context::UiContext;
use crate::ui::prompt;

pub async fn cmd_login(ui: &UiContext) -> Result<()> {
    let project = load_project(ui)?;

    let team = prompt::input(ui, "Enter team name").context("failed to read team name")?;
    let team = team.trim();
    if team.is_empty() {
        bail!("team name cannot be empty");
    }

    let password = prompt::password(ui, "Enter password").context("failed to read password")?;
    if password.is_empty() {
        bail!("password cannot be empty");
    }

    let client = ApiClient::new(project.config.api_base())?;
    let token = client.login(team, &password).await?;

    let store = TokenStore::new(&project.root);
    store.save(&token).context("failed to save auth token")?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "login",
            "team": team,
            "token_path": store.path().display().to_string(),
        }))?;
    } else {
        println!("login successful for team: {}", team);
    }
    Ok(())
}
