//! Pagination controls: `‹ Prev  1 2 3  Next ›`.

use crate::state::Pagination;
use crate::view::ViewStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Page buttons for a reconciled pagination state.
///
/// The current page is highlighted; arrows that lead nowhere are dimmed.
pub struct PaginationBar<'a> {
    pagination: &'a Pagination,
    styles: &'a ViewStyles,
}

impl<'a> PaginationBar<'a> {
    /// Create a bar for `pagination`.
    pub fn new(pagination: &'a Pagination, styles: &'a ViewStyles) -> Self {
        Self { pagination, styles }
    }

    fn line(&self) -> Line<'static> {
        let arrow_style = |enabled: bool| {
            if enabled {
                self.styles.key
            } else {
                self.styles.disabled
            }
        };

        let mut spans = vec![
            Span::styled("‹ Prev", arrow_style(self.pagination.has_previous())),
            Span::raw("  "),
        ];
        for page in self.pagination.page_numbers() {
            let label = format!(" {page} ");
            if page == self.pagination.current_page() {
                spans.push(Span::styled(label, self.styles.selected));
            } else {
                spans.push(Span::raw(label));
            }
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Next ›",
            arrow_style(self.pagination.has_next()),
        ));
        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PageSize;
    use crate::view::ColorConfig;
    use ratatui::style::Modifier;

    fn pagination(count: usize, page: usize) -> Pagination {
        let mut p = Pagination::new(PageSize::from_count(3));
        p.reconcile(count);
        p.go_to_page(page);
        p.reconcile(count);
        p
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lists_every_page_number() {
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());
        let p = pagination(7, 1);
        let line = PaginationBar::new(&p, &styles).line();
        assert_eq!(text(&line), "‹ Prev   1  2  3   Next ›");
    }

    #[test]
    fn highlights_current_page() {
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());
        let p = pagination(7, 2);
        let line = PaginationBar::new(&p, &styles).line();

        let current = line
            .spans
            .iter()
            .find(|s| s.content == " 2 ")
            .expect("page 2 rendered");
        assert_eq!(current.style, styles.selected);
    }

    #[test]
    fn prev_disabled_on_first_page_and_next_on_last() {
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());

        let first = pagination(7, 1);
        let line = PaginationBar::new(&first, &styles).line();
        assert!(line.spans[0].style.add_modifier.contains(Modifier::DIM));
        assert!(!line.spans.last().unwrap().style.add_modifier.contains(Modifier::DIM));

        let last = pagination(7, 3);
        let line = PaginationBar::new(&last, &styles).line();
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::DIM));
        assert!(line.spans.last().unwrap().style.add_modifier.contains(Modifier::DIM));
    }
}
