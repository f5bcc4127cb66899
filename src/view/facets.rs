//! Facet widgets shared by every view whose query has facets: the
//! one-line selection summary and the picker panel.

use crate::state::{FacetPanel, FacetSelection};
use crate::view::helpers::truncate_to_width;
use crate::view::ViewStyles;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One-line summary of the facet selection.
pub fn facet_summary_line(selected: &FacetSelection, styles: &ViewStyles) -> Line<'static> {
    if selected.is_empty() {
        return Line::from(vec![
            Span::styled("No filters", styles.muted),
            Span::styled("  f", styles.key),
            Span::styled(" choose filters", styles.muted),
        ]);
    }
    let names: Vec<&str> = selected.iter().collect();
    Line::from(vec![
        Span::styled(format!("Filters ({}): ", selected.len()), styles.heading),
        Span::raw(names.join(", ")),
        Span::styled("  c", styles.key),
        Span::styled(" clear all", styles.muted),
    ])
}

/// Render the facet picker: group headings, then one checkbox per value.
pub fn render_facet_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &FacetPanel,
    selected: &FacetSelection,
    styles: &ViewStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.focus_border)
        .title(" Filter by ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let lines = facet_lines(panel, selected, width, styles);

    // Keep the cursor row on screen.
    let cursor_row = cursor_line_index(panel);
    let height = usize::from(inner.height);
    let scroll = (cursor_row + 1).saturating_sub(height);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn facet_lines(
    panel: &FacetPanel,
    selected: &FacetSelection,
    width: usize,
    styles: &ViewStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut flat = 0;
    for group in panel.catalog().groups() {
        lines.push(Line::from(Span::styled(group.name().to_string(), styles.heading)));
        for value in group.values() {
            let checked = selected.contains(value);
            let mark = if checked { "[x] " } else { "[ ] " };
            let label = truncate_to_width(&format!("{mark}{value}"), width);
            let style = if flat == panel.cursor() {
                styles.selected
            } else if checked {
                styles.checked
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(label, style)));
            flat += 1;
        }
    }
    lines
}

/// Line index of the cursor value, counting group headings.
fn cursor_line_index(panel: &FacetPanel) -> usize {
    let mut remaining = panel.cursor();
    let mut line = 0;
    for group in panel.catalog().groups() {
        line += 1;
        if remaining < group.values().len() {
            return line + remaining;
        }
        remaining -= group.values().len();
        line += group.values().len();
    }
    line
}
