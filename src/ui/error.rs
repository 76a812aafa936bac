use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;

pub const HELP_HINT: &str = "for help, please reach out to us on discord";

/// Full context chain, one cause per `: ` segment.
pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    format!(
        "{}\n{}\n",
        ColoredText::error(format!("{:#}", err)).render(supports_color),
        HELP_HINT
    )
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color));
}
