//! Screen layout.
//!
//! Tab bar on top, the active view in the middle, status bar at the bottom
//! and the help overlay over everything when it is open.

use crate::state::{ActiveView, AppState, QueryState};
use crate::view::constants::{
    FACET_PANEL_WIDTH, FACET_SUMMARY_HEIGHT, PAGINATION_BAR_HEIGHT, SEARCH_INPUT_HEIGHT,
    STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT,
};
use crate::view::helpers::key_hint;
use crate::view::{
    blog, carousel, facets, help, projects, tabs, PaginationBar, SearchInput, ViewStyles,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ViewStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    tabs::render_tab_bar(frame, chunks[0], state.active_view, styles);

    match state.active_view {
        ActiveView::Blog => render_blog_view(frame, chunks[1], state, styles),
        ActiveView::Projects => render_projects_view(frame, chunks[1], state, styles),
        ActiveView::Videos => {
            carousel::render_carousel(frame, chunks[1], &state.carousel, state.videos(), styles)
        }
    }

    render_status_bar(frame, chunks[2], state, styles);

    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

/// Split `area` into a header, a flexible body and an optional pagination bar.
fn split_with_pagination(area: Rect, header_height: u16, shows_pagination: bool) -> [Rect; 3] {
    let pagination_height = if shows_pagination {
        PAGINATION_BAR_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(pagination_height),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn render_blog_view(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let session = state.blog();
    let view = session.view();
    let [query_area, main_area, pagination_area] =
        split_with_pagination(area, query_header_height(session.query()), view.shows_pagination);

    let list_area =
        render_query_widgets(frame, query_area, main_area, state, session.query(), styles);
    blog::render_blog_list(frame, list_area, &view, styles);

    if view.shows_pagination {
        frame.render_widget(
            PaginationBar::new(session.pagination(), styles),
            pagination_area,
        );
    }
}

fn render_projects_view(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let session = state.projects();
    let view = session.view();
    let [query_area, main_area, pagination_area] =
        split_with_pagination(area, query_header_height(session.query()), view.shows_pagination);

    let list_area =
        render_query_widgets(frame, query_area, main_area, state, session.query(), styles);
    projects::render_project_list(frame, list_area, &view, styles);

    if view.shows_pagination {
        frame.render_widget(
            PaginationBar::new(session.pagination(), styles),
            pagination_area,
        );
    }
}

/// Rows above the list: a search box if the query has text, a facet
/// summary if it has facets.
fn query_header_height(query: &QueryState) -> u16 {
    let search = if query.search_text().is_some() {
        SEARCH_INPUT_HEIGHT
    } else {
        0
    };
    let facets = if query.selected_facets().is_some() {
        FACET_SUMMARY_HEIGHT
    } else {
        0
    };
    search + facets
}

/// Draw the search box, facet summary and (when open) facet panel that
/// `query` calls for. Returns the area left for the result list.
fn render_query_widgets(
    frame: &mut Frame,
    header_area: Rect,
    main_area: Rect,
    state: &AppState,
    query: &QueryState,
    styles: &ViewStyles,
) -> Rect {
    let search_height = if query.search_text().is_some() {
        SEARCH_INPUT_HEIGHT
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(search_height), Constraint::Min(0)])
        .split(header_area);

    if let Some(applied) = query.search_text() {
        frame.render_widget(SearchInput::new(&state.search, applied, styles), rows[0]);
    }

    let Some(selected) = query.selected_facets() else {
        return main_area;
    };
    frame.render_widget(
        Paragraph::new(facets::facet_summary_line(selected, styles)),
        rows[1],
    );

    let panel = state.facet_panel();
    if !panel.is_visible() {
        return main_area;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FACET_PANEL_WIDTH), Constraint::Min(0)])
        .split(main_area);
    facets::render_facet_panel(frame, columns[0], panel, selected, styles);
    columns[1]
}

/// Left-hand status text for the active view.
pub fn status_text(state: &AppState) -> String {
    match state.active_view {
        ActiveView::Blog => {
            let pagination = state.blog().pagination();
            match pagination.item_range() {
                Some((first, last)) => format!(
                    "Page {} of {} · posts {}-{} of {}",
                    pagination.current_page(),
                    pagination.total_pages(),
                    first,
                    last,
                    pagination.filtered_count()
                ),
                None => "No posts match".to_string(),
            }
        }
        ActiveView::Projects => projects::results_info(&state.projects().view()),
        ActiveView::Videos if state.carousel.is_empty() => "No videos".to_string(),
        ActiveView::Videos => format!(
            "Video {} of {}",
            state.carousel.index() + 1,
            state.carousel.len()
        ),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ViewStyles) {
    let mut spans = vec![Span::raw(format!(" {} ", status_text(state)))];

    if state.malformed_count() > 0 {
        spans.push(Span::styled(
            format!(" {} records skipped ", state.malformed_count()),
            styles.warning,
        ));
    }

    spans.push(Span::raw("  "));
    spans.extend(key_hint("?", "help", styles.key, styles.muted));
    spans.extend(key_hint("q", "quit", styles.key, styles.muted));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
