//! Small text helpers shared by the widgets.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// An empty line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `key` in key style followed by `description`.
pub fn key_hint(key: &str, description: &str, key_style: Style, desc_style: Style) -> Vec<Span<'static>> {
    vec![
        Span::styled(key.to_string(), key_style),
        Span::styled(format!(" {description}  "), desc_style),
    ]
}

/// Truncate `text` to at most `max_width` display columns, ending with `…`
/// when something was cut.
///
/// Width is measured in terminal columns, so wide (CJK, emoji) characters
/// count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Tags as `[a] [b]` spans in the given style.
pub fn tag_spans<'a, I>(tags: I, style: Style) -> Vec<Span<'static>>
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .flat_map(|tag| [Span::styled(format!("[{tag}]"), style), Span::raw(" ")])
        .collect()
}
