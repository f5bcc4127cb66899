//! View tab bar widget.
//!
//! Displays one tab per view using ratatui's Tabs widget. Selection state is
//! `AppState::active_view`.

use crate::state::ActiveView;
use crate::view::ViewStyles;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the view tab bar with the active view highlighted.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: ActiveView, styles: &ViewStyles) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .map(|view| Line::from(view.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" folio "))
        .highlight_style(styles.selected)
        .select(active.index());

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(active: ActiveView) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());
        terminal
            .draw(|frame| render_tab_bar(frame, frame.area(), active, &styles))
            .unwrap();
        terminal
    }

    #[test]
    fn tab_bar_lists_every_view() {
        let terminal = render(ActiveView::Blog);
        let buffer_str: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();

        for title in ["Blog", "Projects", "Videos"] {
            assert!(buffer_str.contains(title), "missing tab {title}");
        }
    }

    #[test]
    fn active_tab_is_highlighted() {
        let terminal = render(ActiveView::Projects);
        let buffer = terminal.backend().buffer();
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());

        // Row 1 holds the titles; find the 'P' of "Projects".
        let x = (0..buffer.area.width)
            .find(|&x| buffer[(x, 1)].symbol() == "P")
            .expect("Projects tab rendered");

        assert!(buffer[(x, 1)]
            .modifier
            .contains(styles.selected.add_modifier));
    }
}
