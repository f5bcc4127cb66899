//! Application state and transitions.
//!
//! AppState is the root state type of the terminal browser. It owns one
//! discovery session per discoverable view plus the purely presentational
//! state around them (search box, facet panel, carousel, help overlay).

use crate::model::{BlogPost, ContentDocument, FacetCatalog, Project, Video};
use crate::state::discovery::{DiscoveryEvent, DiscoveryPolicy, DiscoverySession};
use crate::state::filter::QueryState;
use crate::state::search_input::{self, SearchState};
use crate::state::Carousel;
use std::sync::Arc;
use tracing::debug;

// ===== ActiveView =====

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    /// Paginated, searchable blog index.
    #[default]
    Blog,
    /// Facet-filtered project gallery.
    Projects,
    /// Featured video carousel.
    Videos,
}

impl ActiveView {
    /// Views in tab order.
    pub const ALL: [ActiveView; 3] = [ActiveView::Blog, ActiveView::Projects, ActiveView::Videos];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Blog => "Blog",
            ActiveView::Projects => "Projects",
            ActiveView::Videos => "Videos",
        }
    }

    /// Position in tab order.
    pub fn index(&self) -> usize {
        match self {
            ActiveView::Blog => 0,
            ActiveView::Projects => 1,
            ActiveView::Videos => 2,
        }
    }

    /// Next view, wrapping.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous view, wrapping.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ===== FacetPanel =====

/// Facet picker: the catalog plus a cursor over its flattened values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetPanel {
    visible: bool,
    cursor: usize,
    catalog: FacetCatalog,
}

impl FacetPanel {
    /// Hidden panel over `catalog`, cursor on the first value.
    pub fn new(catalog: FacetCatalog) -> Self {
        Self {
            visible: false,
            cursor: 0,
            catalog,
        }
    }

    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the panel.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Hide the panel.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Flat cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selectable facets.
    pub fn catalog(&self) -> &FacetCatalog {
        &self.catalog
    }

    /// Move the cursor down, stopping at the last value.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor up, stopping at the first value.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Facet value under the cursor.
    pub fn value_under_cursor(&self) -> Option<&str> {
        self.catalog.value_at(self.cursor)
    }
}

// ===== StartupQuery =====

/// View and query to open with, as given on the command line.
///
/// Everything applies to `view`. Events the view's query can't take are
/// ignored. On the video view `page` picks the slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupQuery {
    /// View to open.
    pub view: ActiveView,
    /// Search text to apply.
    pub search: Option<String>,
    /// Facets to select.
    pub facets: Vec<String>,
    /// 1-based page (or slide) to show.
    pub page: Option<usize>,
}

// ===== ViewPolicies =====

/// Discovery policies of the two discoverable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPolicies {
    /// Blog index policy.
    pub blog: DiscoveryPolicy,
    /// Project gallery policy.
    pub projects: DiscoveryPolicy,
}

impl Default for ViewPolicies {
    fn default() -> Self {
        Self {
            blog: DiscoveryPolicy::blog(),
            projects: DiscoveryPolicy::projects(),
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **View**: Blog → Projects → Videos → Blog (via `next_view` / `prev_view`)
/// - **Search box**: Inactive → Typing → Inactive. Every edit while typing is
///   applied to the active session immediately, so results track the box.
/// - **Facet panel**: hidden ⇄ visible, only on views whose query has facets.
///   Each discoverable view has its own panel over its own catalog.
#[derive(Debug, Clone)]
pub struct AppState {
    /// View on screen.
    pub active_view: ActiveView,
    blog: DiscoverySession<BlogPost>,
    projects: DiscoverySession<Project>,
    videos: Arc<[Video]>,
    /// Video carousel position.
    pub carousel: Carousel,
    /// Search box state.
    pub search: SearchState,
    blog_panel: FacetPanel,
    project_panel: FacetPanel,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
    malformed_count: usize,
}

impl AppState {
    /// Build state from a loaded document.
    pub fn new(document: ContentDocument, policies: ViewPolicies) -> Self {
        let blog_catalog =
            FacetCatalog::from_posts(document.posts.iter().map(|item| item.payload()));
        let project_catalog = FacetCatalog::project_defaults().merge(
            FacetCatalog::from_projects(document.projects.iter().map(|item| item.payload())),
        );
        let carousel = Carousel::new(document.videos.len());
        Self {
            active_view: ActiveView::default(),
            blog: DiscoverySession::new(document.posts.into(), policies.blog),
            projects: DiscoverySession::new(document.projects.into(), policies.projects),
            videos: document.videos.into(),
            carousel,
            search: SearchState::Inactive,
            blog_panel: FacetPanel::new(blog_catalog),
            project_panel: FacetPanel::new(project_catalog),
            help_visible: false,
            malformed_count: document.malformed.len(),
        }
    }

    /// Blog index session.
    pub fn blog(&self) -> &DiscoverySession<BlogPost> {
        &self.blog
    }

    /// Project gallery session.
    pub fn projects(&self) -> &DiscoverySession<Project> {
        &self.projects
    }

    /// Carousel slides.
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Facet picker of the active view.
    ///
    /// The video view has no facets; it reports the project panel, which
    /// view switching always leaves hidden.
    pub fn facet_panel(&self) -> &FacetPanel {
        match self.active_view {
            ActiveView::Blog => &self.blog_panel,
            ActiveView::Projects | ActiveView::Videos => &self.project_panel,
        }
    }

    /// Mutable facet picker of the active view.
    pub fn facet_panel_mut(&mut self) -> &mut FacetPanel {
        match self.active_view {
            ActiveView::Blog => &mut self.blog_panel,
            ActiveView::Projects | ActiveView::Videos => &mut self.project_panel,
        }
    }

    /// Number of content records skipped while loading.
    pub fn malformed_count(&self) -> usize {
        self.malformed_count
    }

    /// Query of the active view, `None` on the video view.
    pub fn active_query(&self) -> Option<&QueryState> {
        match self.active_view {
            ActiveView::Blog => Some(self.blog.query()),
            ActiveView::Projects => Some(self.projects.query()),
            ActiveView::Videos => None,
        }
    }

    /// Whether the active view can be searched by text.
    pub fn accepts_search(&self) -> bool {
        self.active_query()
            .is_some_and(|query| query.search_text().is_some())
    }

    /// Whether the active view can be filtered by facets.
    pub fn accepts_facets(&self) -> bool {
        self.active_query()
            .is_some_and(|query| query.selected_facets().is_some())
    }

    /// Route a discovery event to the active view's session.
    ///
    /// No-op on the video view.
    pub fn apply(&mut self, event: DiscoveryEvent) {
        match self.active_view {
            ActiveView::Blog => self.blog.apply(event),
            ActiveView::Projects => self.projects.apply(event),
            ActiveView::Videos => debug!(?event, "Discovery event ignored on video view"),
        }
    }

    /// Open on the startup view and apply its query.
    ///
    /// The page is applied last, since every query change resets to page 1.
    pub fn apply_startup(&mut self, startup: StartupQuery) {
        self.switch_view(startup.view);
        if let Some(text) = startup.search {
            self.apply(DiscoveryEvent::SearchTextChanged(text));
        }
        for facet in startup.facets {
            self.apply(DiscoveryEvent::FacetToggled(facet));
        }
        match (startup.page, self.active_view) {
            (Some(page), ActiveView::Videos) => self.carousel.select(page.saturating_sub(1)),
            (Some(page), _) => self.apply(DiscoveryEvent::PageRequested(page)),
            (None, _) => {}
        }
    }

    // ===== View switching =====

    /// Switch to the next view. Closes the search box and facet panel.
    pub fn next_view(&mut self) {
        self.switch_view(self.active_view.next());
    }

    /// Switch to the previous view. Closes the search box and facet panel.
    pub fn prev_view(&mut self) {
        self.switch_view(self.active_view.prev());
    }

    fn switch_view(&mut self, view: ActiveView) {
        self.search = SearchState::Inactive;
        self.blog_panel.hide();
        self.project_panel.hide();
        self.active_view = view;
    }

    // ===== Search box =====

    /// Open the search box seeded with the applied text. No-op if the view
    /// has no text search.
    pub fn start_search(&mut self) {
        let current = match self.active_query().and_then(QueryState::search_text) {
            Some(text) => text.to_string(),
            None => return,
        };
        self.search = search_input::activate_search_input(self.search.clone(), &current);
    }

    /// Type one character into the search box.
    pub fn search_char(&mut self, ch: char) {
        self.search = search_input::handle_char_input(self.search.clone(), ch);
        self.sync_search_text();
    }

    /// Delete the character before the search cursor.
    pub fn search_backspace(&mut self) {
        self.search = search_input::handle_backspace(self.search.clone());
        self.sync_search_text();
    }

    /// Move the search cursor left.
    pub fn search_cursor_left(&mut self) {
        self.search = search_input::handle_cursor_left(self.search.clone());
    }

    /// Move the search cursor right.
    pub fn search_cursor_right(&mut self) {
        self.search = search_input::handle_cursor_right(self.search.clone());
    }

    /// Close the search box keeping the text applied.
    pub fn submit_search(&mut self) {
        self.search = search_input::submit_search(self.search.clone());
    }

    /// Close the search box and clear the applied text.
    pub fn cancel_search(&mut self) {
        self.search = SearchState::Inactive;
        let has_text = self
            .active_query()
            .and_then(QueryState::search_text)
            .is_some_and(|text| !text.is_empty());
        if has_text {
            self.apply(DiscoveryEvent::SearchTextChanged(String::new()));
        }
    }

    fn sync_search_text(&mut self) {
        if let Some(query) = self.search.query() {
            let text = query.to_string();
            self.apply(DiscoveryEvent::SearchTextChanged(text));
        }
    }

    // ===== Facet panel =====

    /// Show or hide the facet panel. No-op if the view has no facets.
    pub fn toggle_facet_panel(&mut self) {
        if self.accepts_facets() {
            self.facet_panel_mut().toggle_visible();
        }
    }

    /// Toggle the facet under the panel cursor.
    pub fn toggle_facet_under_cursor(&mut self) {
        if !self.facet_panel().is_visible() {
            return;
        }
        if let Some(value) = self.facet_panel().value_under_cursor() {
            let value = value.to_string();
            self.apply(DiscoveryEvent::FacetToggled(value));
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
