use mm_cli::update::UpdateStatus;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Result line for `mm update --check`; empty when up to date.
pub fn render_check(status: &UpdateStatus, supports_color: bool) -> String {
    match status.notice() {
        Some(notice) => format!("{}\n", ColoredText::warning(notice).render(supports_color)),
        None => String::new(),
    }
}

pub fn render_step_start(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Pending.colored(supports_color, supports_unicode),
        ColoredText::info(message).render(supports_color)
    )
}

pub fn render_step_done(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(message).render(supports_color)
    )
}
