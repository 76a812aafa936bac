use mm_cli::api::{CompileStatus, VersionListing};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

fn status_cell(status: CompileStatus, supports_color: bool) -> String {
    let text = match status {
        CompileStatus::Success => ColoredText::success(status.as_str()),
        CompileStatus::Failure => ColoredText::error(status.as_str()),
        CompileStatus::Pending => ColoredText::warning(status.as_str()),
    };
    text.render(supports_color)
}

/// Version table followed by the active and `latest` lines.
pub fn render_versions(
    listing: &VersionListing,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = Table::new([
        "",
        "version",
        "language",
        "compile status",
        "compiled at",
        "submitted at",
    ]);

    for v in &listing.versions {
        let marker = if listing.active_version == Some(v.number) {
            Icon::Active.colored(supports_color, supports_unicode)
        } else {
            String::new()
        };
        table.add_row([
            marker,
            v.number.to_string(),
            v.language.clone(),
            status_cell(v.compile_status, supports_color),
            v.compiled_at.clone(),
            v.submitted_at.clone(),
        ]);
    }

    let mut out = table.render(supports_unicode);
    match listing.active_version {
        Some(v) => out.push_str(&format!("Active version is {}\n", v)),
        None => out.push_str("No active version set\n"),
    }
    if let Some(latest) = listing.latest() {
        out.push_str(&format!("'latest' resolves to version {}\n", latest));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mm_cli::api::BotVersion;

    fn listing(active: Option<u32>) -> VersionListing {
        VersionListing {
            versions: vec![
                BotVersion {
                    number: 1,
                    language: "rust".to_string(),
                    compile_status: CompileStatus::Success,
                    compiled_at: "2026-10-01 12:00".to_string(),
                    submitted_at: "2026-10-01 11:59".to_string(),
                },
                BotVersion {
                    number: 2,
                    language: "rust".to_string(),
                    compile_status: CompileStatus::Failure,
                    compiled_at: "2026-10-02 08:30".to_string(),
                    submitted_at: "2026-10-02 08:29".to_string(),
                },
            ],
            active_version: active,
        }
    }

    #[test]
    fn marks_active_version() {
        let out = render_versions(&listing(Some(1)), false, false);
        assert!(out.contains("| [*] | 1 "), "{}", out);
        assert!(out.contains("Active version is 1\n"));
        assert!(out.ends_with("'latest' resolves to version 2\n"));
    }

    #[test]
    fn reports_missing_active_version() {
        let out = render_versions(&listing(None), false, true);
        assert!(out.contains("failure"));
        assert!(out.contains("No active version set\n"));
    }

    #[test]
    fn empty_listing_has_no_latest_line() {
        let empty = VersionListing {
            versions: Vec::new(),
            active_version: None,
        };
        let out = render_versions(&empty, false, false);
        assert!(out.ends_with("No active version set\n"));
        assert!(!out.contains("latest"));
    }
}
