//! Filter predicate.
//!
//! QueryState is a sum type over the query shapes a discovery session can
//! hold. `matches` is the single predicate both the blog search and the
//! project facet filter go through.

use crate::model::{FacetTags, Item};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ===== FilterMode =====

/// Which query shape a discovery session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Free-text search over the searchable text.
    #[default]
    Text,
    /// Multi-select facet filter.
    Facets,
    /// Text search AND facet filter.
    Combined,
}

// ===== FacetSelection =====

/// Set of selected facet values.
///
/// Empty selection means no facet filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FacetSelection(BTreeSet<String>);

impl FacetSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the facet if absent, remove it if present.
    ///
    /// Returns true if the facet is selected afterwards.
    pub fn toggle(&mut self, facet: &str) -> bool {
        if self.0.remove(facet) {
            false
        } else {
            self.0.insert(facet.to_string());
            true
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether the facet is selected.
    pub fn contains(&self, facet: &str) -> bool {
        self.0.contains(facet)
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected facets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Selected facets in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether the item carries ANY of the selected facets.
    ///
    /// Empty selection passes everything, malformed tags pass nothing else.
    pub fn admits(&self, tags: &FacetTags) -> bool {
        if self.0.is_empty() {
            return true;
        }
        match tags {
            FacetTags::Tags(tags) => !self.0.is_disjoint(tags),
            FacetTags::Malformed => false,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FacetSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ===== QueryState =====

/// Active query of a discovery session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum QueryState {
    /// Case-insensitive substring search.
    Text {
        /// Raw search text as typed.
        search_text: String,
    },
    /// OR-across-selected facet filter.
    Facets {
        /// Selected facets.
        selected: FacetSelection,
    },
    /// Both predicates must hold.
    Combined {
        /// Raw search text as typed.
        search_text: String,
        /// Selected facets.
        selected: FacetSelection,
    },
}

impl QueryState {
    /// Empty query of the given mode: matches every item.
    pub fn empty(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Text => QueryState::Text {
                search_text: String::new(),
            },
            FilterMode::Facets => QueryState::Facets {
                selected: FacetSelection::new(),
            },
            FilterMode::Combined => QueryState::Combined {
                search_text: String::new(),
                selected: FacetSelection::new(),
            },
        }
    }

    /// Mode of this query.
    pub fn mode(&self) -> FilterMode {
        match self {
            QueryState::Text { .. } => FilterMode::Text,
            QueryState::Facets { .. } => FilterMode::Facets,
            QueryState::Combined { .. } => FilterMode::Combined,
        }
    }

    /// Current search text, if this query shape has one.
    pub fn search_text(&self) -> Option<&str> {
        match self {
            QueryState::Text { search_text } | QueryState::Combined { search_text, .. } => {
                Some(search_text)
            }
            QueryState::Facets { .. } => None,
        }
    }

    /// Current facet selection, if this query shape has one.
    pub fn selected_facets(&self) -> Option<&FacetSelection> {
        match self {
            QueryState::Facets { selected } | QueryState::Combined { selected, .. } => {
                Some(selected)
            }
            QueryState::Text { .. } => None,
        }
    }

    /// Mutable search text, if this query shape has one.
    pub(crate) fn search_text_mut(&mut self) -> Option<&mut String> {
        match self {
            QueryState::Text { search_text } | QueryState::Combined { search_text, .. } => {
                Some(search_text)
            }
            QueryState::Facets { .. } => None,
        }
    }

    /// Mutable facet selection, if this query shape has one.
    pub(crate) fn selected_facets_mut(&mut self) -> Option<&mut FacetSelection> {
        match self {
            QueryState::Facets { selected } | QueryState::Combined { selected, .. } => {
                Some(selected)
            }
            QueryState::Text { .. } => None,
        }
    }

    /// Whether this query filters nothing out.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text().is_none_or(str::is_empty)
            && self.selected_facets().is_none_or(FacetSelection::is_empty)
    }
}

// ===== Predicate =====

/// Whether `text` contains `query`, ignoring case. Empty query matches.
///
/// Substring semantics: no tokenizing, no trimming.
pub fn text_matches(text: &str, query: &str) -> bool {
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

/// Decide whether an item passes the query. Pure.
pub fn matches<P>(item: &Item<P>, query: &QueryState) -> bool {
    match query {
        QueryState::Text { search_text } => text_matches(item.searchable_text(), search_text),
        QueryState::Facets { selected } => selected.admits(item.facet_tags()),
        QueryState::Combined {
            search_text,
            selected,
        } => {
            text_matches(item.searchable_text(), search_text)
                && selected.admits(item.facet_tags())
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
