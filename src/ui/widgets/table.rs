use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;

/// Bordered table; cells may carry ANSI color, widths ignore it.
#[derive(Debug, Default, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| visible_width(&r[i]))
                    .chain(std::iter::once(visible_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let widths = self.widths();
        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = BorderChar::Vertical.render(supports_unicode);

        let rule = |left: BorderChar, mid: BorderChar, right: BorderChar| {
            let segments: Vec<String> = widths.iter().map(|w| h.repeat(w + 2)).collect();
            format!(
                "{}{}{}\n",
                left.render(supports_unicode),
                segments.join(mid.render(supports_unicode)),
                right.render(supports_unicode)
            )
        };

        let line = |cells: &[String]| {
            let mut out = String::from(v);
            for (cell, w) in cells.iter().zip(&widths) {
                out.push(' ');
                out.push_str(cell);
                out.push_str(&" ".repeat(w.saturating_sub(visible_width(cell)) + 1));
                out.push_str(v);
            }
            out.push('\n');
            out
        };

        let mut out = rule(BorderChar::TopLeft, BorderChar::TeeDown, BorderChar::TopRight);
        out.push_str(&line(&self.headers));
        out.push_str(&rule(BorderChar::TeeLeft, BorderChar::Cross, BorderChar::TeeRight));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out.push_str(&rule(BorderChar::BottomLeft, BorderChar::TeeUp, BorderChar::BottomRight));
        out
    }
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip ANSI escape sequence: ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}
