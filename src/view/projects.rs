//! Project gallery: result count and project list.

use crate::model::{Item, Project};
use crate::state::RenderView;
use crate::view::blog::render_no_results;
use crate::view::helpers::{tag_spans, truncate_to_width};
use crate::view::ViewStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// `Showing X of Y projects`.
pub fn results_info(view: &RenderView<'_, Project>) -> String {
    format!(
        "Showing {} of {} projects",
        view.filtered_count, view.total_count
    )
}

/// Render the filtered projects, or the empty placeholder.
pub fn render_project_list(
    frame: &mut Frame,
    area: Rect,
    view: &RenderView<'_, Project>,
    styles: &ViewStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", results_info(view)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.is_empty {
        render_no_results(frame, inner, "No projects found", styles);
        return;
    }

    let width = usize::from(inner.width);
    let lines: Vec<Line> = view
        .visible_items
        .iter()
        .flat_map(|item| project_lines(item, width, styles))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn project_lines(item: &Item<Project>, width: usize, styles: &ViewStyles) -> Vec<Line<'static>> {
    let project = item.payload();
    let mut badges = tag_spans(&project.tags, styles.tag);
    badges.extend(tag_spans(&project.technologies, styles.technology));
    vec![
        Line::from(Span::styled(
            truncate_to_width(&project.title, width),
            styles.title,
        )),
        Line::from(badges),
        Line::from(truncate_to_width(&project.description, width)),
        Line::from(Span::styled(
            truncate_to_width(&project.slug, width),
            styles.muted,
        )),
        Line::from(""),
    ]
}
