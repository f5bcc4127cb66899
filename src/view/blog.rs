//! Blog index: one card per post on the current page.

use crate::model::{BlogPost, Item};
use crate::state::RenderView;
use crate::view::constants::BLOG_CARD_HEIGHT;
use crate::view::helpers::{tag_spans, truncate_to_width};
use crate::view::ViewStyles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Date as shown on a card, e.g. `Nov 02, 2024`.
pub const CARD_DATE_FORMAT: &str = "%b %d, %Y";

/// Render the posts of the current page, or the empty placeholder.
pub fn render_blog_list(
    frame: &mut Frame,
    area: Rect,
    view: &RenderView<'_, BlogPost>,
    styles: &ViewStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Blog ({} posts) ", view.filtered_count));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.is_empty {
        render_no_results(frame, inner, "No results found", styles);
        return;
    }

    let width = usize::from(inner.width);
    let lines: Vec<Line> = view
        .visible_items
        .iter()
        .flat_map(|item| card_lines(item, width, styles))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Lines of one card: tags, title, author, date and a spacer.
fn card_lines(item: &Item<BlogPost>, width: usize, styles: &ViewStyles) -> Vec<Line<'static>> {
    let post = item.payload();
    let lines = vec![
        Line::from(tag_spans(&post.tags, styles.tag)),
        Line::from(Span::styled(
            truncate_to_width(&post.title, width),
            styles.title,
        )),
        Line::from(Span::styled(truncate_to_width(&post.author, width), styles.muted)),
        Line::from(Span::styled(
            post.date.format(CARD_DATE_FORMAT).to_string(),
            styles.muted,
        )),
        Line::from(""),
    ];
    debug_assert_eq!(lines.len(), usize::from(BLOG_CARD_HEIGHT));
    lines
}

/// Centered placeholder shown instead of a grid.
pub fn render_no_results(frame: &mut Frame, area: Rect, message: &str, styles: &ViewStyles) {
    let top_padding = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(message.to_string(), styles.muted)));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
