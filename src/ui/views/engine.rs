use mm_cli::engine::{BotExit, MatchOutcome, MatchResult};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn exit_text(exit: BotExit) -> String {
    match exit.code {
        Some(code) => format!("exit {}", code),
        None => "killed".to_string(),
    }
}

/// One-line match summary.
pub fn render_outcome(outcome: &MatchOutcome, supports_color: bool, supports_unicode: bool) -> String {
    let result = outcome.result();
    let (icon, text) = match result {
        MatchResult::Completed => (Icon::Success, ColoredText::success(result.as_str())),
        MatchResult::BotError => (Icon::Error, ColoredText::error(result.as_str())),
        MatchResult::Timeout => (Icon::Warning, ColoredText::warning(result.as_str())),
    };
    format!(
        "{} match {} (bot-a: {}, bot-b: {})\n",
        icon.colored(supports_color, supports_unicode),
        text.render(supports_color),
        exit_text(outcome.bot_a),
        exit_text(outcome.bot_b),
    )
}
