//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use crate::view::ViewStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar of a view whose query has search text.
///
/// While typing, shows the box contents with a block cursor. Otherwise shows
/// the applied search text, or a hint when there is none.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    applied: &'a str,
    styles: &'a ViewStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, applied: &'a str, styles: &'a ViewStyles) -> Self {
        Self {
            search_state,
            applied,
            styles,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
                let after_text: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(cursor_char, self.styles.selected),
                    Span::raw(after_text),
                ]);
                Paragraph::new(line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(self.styles.focus_border)
                            .title(" Search "),
                    )
                    .render(area, buf);
            }
            SearchState::Inactive => {
                let line = if self.applied.is_empty() {
                    Line::from(Span::styled("Press / to search titles", self.styles.muted))
                } else {
                    Line::from(self.applied.to_string())
                };
                Paragraph::new(line)
                    .block(Block::default().borders(Borders::ALL).title(" Search "))
                    .render(area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &SearchState, applied: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());
        terminal
            .draw(|frame| {
                frame.render_widget(SearchInput::new(state, applied, &styles), frame.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn typing_state_shows_query() {
        let state = SearchState::Typing {
            query: "godot".to_string(),
            cursor: 2,
        };
        let out = render(&state, "godot");
        assert!(out.contains("godot"));
        assert!(out.contains("Search"));
    }

    #[test]
    fn typing_state_handles_multibyte_cursor() {
        let state = SearchState::Typing {
            query: "café".to_string(),
            cursor: 4,
        };
        let out = render(&state, "café");
        assert!(out.contains("café"));
    }

    #[test]
    fn inactive_without_text_shows_hint() {
        let out = render(&SearchState::Inactive, "");
        assert!(out.contains("Press / to search titles"));
    }

    #[test]
    fn inactive_with_text_shows_applied_query() {
        let out = render(&SearchState::Inactive, "vulkan");
        assert!(out.contains("vulkan"));
        assert!(!out.contains("Press /"));
    }
}
