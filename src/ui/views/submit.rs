use mm_cli::api::Compilation;

use crate::ui::error::HELP_HINT;
use crate::ui::primitives::text::ColoredText;

/// Final report once a submission leaves the pending state.
pub fn render_compilation(compilation: &Compilation, supports_color: bool) -> String {
    let result = &compilation.result;
    if result.success {
        return format!(
            "{}\n",
            ColoredText::success("submission success")
                .bold()
                .render(supports_color)
        );
    }

    let mut out = format!(
        "{}\n",
        ColoredText::error("submission failed").render(supports_color)
    );
    if let Some(reason) = &result.error_message {
        out.push_str(&format!("reason: {}\n", reason));
    }
    out.push_str(&format!("build log: \n\n{}\n", result.build_log));
    out.push_str(HELP_HINT);
    out.push('\n');
    out
}
