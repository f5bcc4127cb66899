//! Discoverable items.
//!
//! The discovery engine only ever looks at two projections of an item:
//! its searchable text and its facet tags. Everything else rides along in
//! the typed payload and is handed back untouched to the rendering layer.

use crate::model::ItemId;
use serde::Serialize;
use std::collections::BTreeSet;

// ===== FacetTags =====

/// Facet tags carried by an item.
///
/// Sum type so the degraded case is an explicit branch: an item whose source
/// record had no usable tag sequence is `Malformed`, not silently empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetTags {
    /// Well-formed tag set (possibly empty).
    Tags(BTreeSet<String>),
    /// No tag sequence could be read from the source record.
    Malformed,
}

impl FacetTags {
    /// Build a tag set from any iterator of tag strings.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tags(tags.into_iter().map(Into::into).collect())
    }

    /// Whether this item carries the given tag.
    ///
    /// Always false for `Malformed`.
    pub fn contains(&self, tag: &str) -> bool {
        match self {
            FacetTags::Tags(tags) => tags.contains(tag),
            FacetTags::Malformed => false,
        }
    }

    /// Whether the tag data was unusable in the source record.
    pub fn is_malformed(&self) -> bool {
        matches!(self, FacetTags::Malformed)
    }

    /// Iterate the tags (empty for `Malformed`).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let tags = match self {
            FacetTags::Tags(tags) => Some(tags),
            FacetTags::Malformed => None,
        };
        tags.into_iter().flat_map(|t| t.iter().map(String::as_str))
    }
}

impl Default for FacetTags {
    fn default() -> Self {
        Self::Tags(BTreeSet::new())
    }
}

// ===== Item =====

/// A discoverable item: the two queryable projections plus a typed payload.
///
/// Items are immutable once built; collections of them are shared between
/// sessions behind an `Arc<[Item<P>]>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item<P> {
    id: ItemId,
    searchable_text: String,
    facet_tags: FacetTags,
    payload: P,
}

impl<P> Item<P> {
    /// Create a new item.
    pub fn new(
        id: ItemId,
        searchable_text: impl Into<String>,
        facet_tags: FacetTags,
        payload: P,
    ) -> Self {
        Self {
            id,
            searchable_text: searchable_text.into(),
            facet_tags,
            payload,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Text matched by free-text search (the title).
    pub fn searchable_text(&self) -> &str {
        &self.searchable_text
    }

    /// Tags matched by facet filtering.
    pub fn facet_tags(&self) -> &FacetTags {
        &self.facet_tags
    }

    /// The typed content record.
    pub fn payload(&self) -> &P {
        &self.payload
    }
}
