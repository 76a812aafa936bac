//! Engine command handler: direct passthrough to the match engine.

use anyhow::{Context, Result};
use mm_cli::engine::{self, ArgConfig, MatchOutcome};

use crate::ui::context::UiContext;
use crate::ui::views::engine::render_outcome;

/// Run a match and report its outcome. Shared with `mm run`.
///
/// Under `--json`, echoed bot lines move to stderr so stdout carries only events.
pub(crate) async fn run_match(ui: &UiContext, mut args: ArgConfig) -> Result<MatchOutcome> {
    args.echo_to_stderr |= ui.json;
    let outcome = engine::run(args).await.context("fatal engine error")?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "match_end",
            "result": outcome.result(),
            "bot_a": outcome.bot_a,
            "bot_b": outcome.bot_b,
        }))?;
    } else {
        print!("{}", render_outcome(&outcome, ui.color, ui.unicode));
    }
    Ok(outcome)
}

pub async fn cmd_engine(ui: &UiContext, args: ArgConfig) -> Result<()> {
    tracing::debug!(?args, "engine ArgConfig");
    run_match(ui, args).await?;
    Ok(())
}
