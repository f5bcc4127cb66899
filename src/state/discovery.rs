//! Discovery engine: filter, paginate, slice.
//!
//! `render` is the whole algorithm. `DiscoverySession` owns one query and one
//! pagination state over a shared item collection and re-runs the algorithm
//! after every event, so a filter change and the page reconciliation it
//! forces are a single transition. Nothing is cached between events.

use crate::model::Item;
use crate::state::filter::{matches, FilterMode, QueryState};
use crate::state::pagination::{PageSize, Pagination};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

// ===== DiscoveryPolicy =====

/// Per-instance configuration of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryPolicy {
    /// Query shape.
    pub mode: FilterMode,
    /// Items per page.
    pub page_size: PageSize,
}

impl DiscoveryPolicy {
    /// Blog index: title search, three posts per page.
    pub fn blog() -> Self {
        Self {
            mode: FilterMode::Text,
            page_size: PageSize::from_count(PageSize::BLOG_DEFAULT),
        }
    }

    /// Project gallery: facet filter, every match on one page.
    pub fn projects() -> Self {
        Self {
            mode: FilterMode::Facets,
            page_size: PageSize::Unbounded,
        }
    }
}

// ===== DiscoveryEvent =====

/// User-driven input to a discovery session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryEvent {
    /// Search box contents changed.
    SearchTextChanged(String),
    /// A facet was clicked: select it if unselected, deselect otherwise.
    FacetToggled(String),
    /// "Clear filters".
    FacetsCleared,
    /// A page button was clicked (1-based).
    PageRequested(usize),
    /// "Previous" arrow.
    Previous,
    /// "Next" arrow.
    Next,
    /// Jump to the first page.
    FirstPage,
    /// Jump to the last page.
    LastPage,
}

// ===== RenderView =====

/// Render-ready projection of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderView<'a, P> {
    /// Items on the current page, in collection order.
    pub visible_items: Vec<&'a Item<P>>,
    /// Page count (at least 1).
    pub total_pages: usize,
    /// Reconciled 1-based current page.
    pub current_page: usize,
    /// No item passed the filter; render a placeholder instead of a grid.
    pub is_empty: bool,
    /// Number of items that passed the filter.
    pub filtered_count: usize,
    /// Number of items in the collection.
    pub total_count: usize,
    /// Whether navigation controls should be rendered.
    pub shows_pagination: bool,
}

/// Filter `items`, reconcile `pagination` against the result and slice it.
///
/// Mutates `pagination` as part of rendering: this is the step that keeps a
/// page from ever being observably out of range after the filter changes.
pub fn render<'a, P>(
    items: &'a [Item<P>],
    query: &QueryState,
    pagination: &mut Pagination,
) -> RenderView<'a, P> {
    let filtered = filter_items(items, query);
    pagination.reconcile(filtered.len());
    project(items.len(), filtered, pagination)
}

fn filter_items<'a, P>(items: &'a [Item<P>], query: &QueryState) -> Vec<&'a Item<P>> {
    items.iter().filter(|item| matches(item, query)).collect()
}

fn project<'a, P>(
    total_count: usize,
    filtered: Vec<&'a Item<P>>,
    pagination: &Pagination,
) -> RenderView<'a, P> {
    let is_empty = filtered.is_empty();
    RenderView {
        visible_items: pagination.visible_slice(&filtered).to_vec(),
        total_pages: pagination.total_pages(),
        current_page: pagination.current_page(),
        is_empty,
        filtered_count: filtered.len(),
        total_count,
        shows_pagination: !is_empty && pagination.shows_controls(),
    }
}

// ===== DiscoverySession =====

/// One mounted discovery view: exclusive query and pagination state over a
/// shared, read-only item collection.
#[derive(Debug, Clone)]
pub struct DiscoverySession<P> {
    items: Arc<[Item<P>]>,
    query: QueryState,
    pagination: Pagination,
}

impl<P> DiscoverySession<P> {
    /// Start a session with an empty query on page 1.
    pub fn new(items: Arc<[Item<P>]>, policy: DiscoveryPolicy) -> Self {
        let mut pagination = Pagination::new(policy.page_size);
        pagination.reconcile(items.len());
        Self {
            items,
            query: QueryState::empty(policy.mode),
            pagination,
        }
    }

    /// Apply one event and reconcile pagination in the same step.
    ///
    /// Any change to the query resets to page 1 before the new page count is
    /// considered. Events that don't fit the query shape (toggling a facet in
    /// a text-only session) leave the state untouched.
    pub fn apply(&mut self, event: DiscoveryEvent) {
        match &event {
            DiscoveryEvent::SearchTextChanged(text) => match self.query.search_text_mut() {
                Some(search_text) => {
                    search_text.clone_from(text);
                    self.pagination.reset();
                }
                None => trace!(?event, "search text ignored by facet-only session"),
            },
            DiscoveryEvent::FacetToggled(facet) => match self.query.selected_facets_mut() {
                Some(selected) => {
                    selected.toggle(facet);
                    self.pagination.reset();
                }
                None => trace!(?event, "facet ignored by text-only session"),
            },
            DiscoveryEvent::FacetsCleared => match self.query.selected_facets_mut() {
                Some(selected) => {
                    selected.clear();
                    self.pagination.reset();
                }
                None => trace!(?event, "facet clear ignored by text-only session"),
            },
            DiscoveryEvent::PageRequested(n) => self.pagination.go_to_page(*n),
            DiscoveryEvent::Previous => self.pagination.previous(),
            DiscoveryEvent::Next => self.pagination.next(),
            DiscoveryEvent::FirstPage => self.pagination.first(),
            DiscoveryEvent::LastPage => self.pagination.last(),
        }

        let filtered_count = filter_items(&self.items, &self.query).len();
        self.pagination.reconcile(filtered_count);

        debug!(
            ?event,
            filtered_count,
            current_page = self.pagination.current_page(),
            total_pages = self.pagination.total_pages(),
            "Discovery event applied"
        );
    }

    /// Render-ready projection of the current state.
    pub fn view(&self) -> RenderView<'_, P> {
        let filtered = filter_items(&self.items, &self.query);
        project(self.items.len(), filtered, &self.pagination)
    }

    /// Replace the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.apply(DiscoveryEvent::SearchTextChanged(text.into()));
    }

    /// Toggle one facet.
    pub fn toggle_facet(&mut self, facet: impl Into<String>) {
        self.apply(DiscoveryEvent::FacetToggled(facet.into()));
    }

    /// Deselect every facet.
    pub fn clear_facets(&mut self) {
        self.apply(DiscoveryEvent::FacetsCleared);
    }

    /// Jump to page `n` (clamped).
    pub fn go_to_page(&mut self, n: usize) {
        self.apply(DiscoveryEvent::PageRequested(n));
    }

    /// One page back.
    pub fn previous(&mut self) {
        self.apply(DiscoveryEvent::Previous);
    }

    /// One page forward.
    pub fn next(&mut self) {
        self.apply(DiscoveryEvent::Next);
    }

    /// The full collection.
    pub fn items(&self) -> &[Item<P>] {
        &self.items
    }

    /// Active query.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Pagination state, already reconciled.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
