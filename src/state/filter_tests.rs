//! Tests for the filter predicate.

use super::*;
use crate::model::ItemId;

fn item(title: &str, tags: FacetTags) -> Item<()> {
    Item::new(ItemId::new(format!("id-{title}")).expect("valid id"), title, tags, ())
}

fn tagged(title: &str, tags: &[&str]) -> Item<()> {
    item(title, FacetTags::from_tags(tags.iter().copied()))
}

fn text(q: &str) -> QueryState {
    QueryState::Text {
        search_text: q.to_string(),
    }
}

fn facets(selected: &[&str]) -> QueryState {
    QueryState::Facets {
        selected: selected.iter().copied().collect(),
    }
}

// ===== Text mode =====

#[test]
fn empty_search_text_matches_everything() {
    assert!(matches(&tagged("Hush Engine", &[]), &text("")));
    assert!(matches(&tagged("", &[]), &text("")));
}

#[test]
fn text_search_is_case_insensitive() {
    let tiles = tagged("3D Tiles For Godot", &[]);
    assert!(matches(&tiles, &text("GODOT")));
    assert!(matches(&tiles, &text("godot")));
    assert!(matches(&tiles, &text("tiles for")));
}

#[test]
fn text_search_is_substring_not_word() {
    let tiles = tagged("3D Tiles For Godot", &[]);
    assert!(matches(&tiles, &text("odo")));
    assert!(matches(&tiles, &text("s fo")));
}

#[test]
fn text_search_does_not_trim() {
    let tiles = tagged("3D Tiles For Godot", &[]);
    assert!(!matches(&tiles, &text(" godot ")));
    assert!(matches(&tiles, &text(" godot")));
}

#[test]
fn text_search_rejects_non_matching_title() {
    assert!(!matches(&tagged("Gripshot", &[]), &text("zzz-no-match")));
}

#[test]
fn text_mode_ignores_malformed_tags() {
    let broken = item("FuzzKill", FacetTags::Malformed);
    assert!(matches(&broken, &text("")));
    assert!(matches(&broken, &text("fuzz")));
}

// ===== Facet mode =====

#[test]
fn empty_selection_matches_everything() {
    assert!(matches(&tagged("Aspis.NET", &["C#"]), &facets(&[])));
    assert!(matches(&tagged("Untagged", &[]), &facets(&[])));
}

#[test]
fn selection_is_or_across_facets() {
    let query = facets(&["Open Source", "Desktop"]);
    let open_only = tagged("Hush Engine", &["Open Source", "Vulkan"]);
    let desktop_only = tagged("Some App", &["Desktop"]);
    let both = tagged("FuzzKill", &["Open Source", "Desktop"]);
    let neither = tagged("Gripshot", &["Game Development"]);

    assert!(matches(&open_only, &query));
    assert!(matches(&desktop_only, &query));
    assert!(matches(&both, &query));
    assert!(!matches(&neither, &query));
}

#[test]
fn facet_match_is_exact_value() {
    let item = tagged("Gripshot", &["Game Development"]);
    assert!(!matches(&item, &facets(&["game development"])));
    assert!(!matches(&item, &facets(&["Game"])));
}

#[test]
fn malformed_tags_never_match_a_selection() {
    let broken = item("Broken", FacetTags::Malformed);
    assert!(!matches(&broken, &facets(&["Open Source"])));
}

#[test]
fn malformed_tags_pass_empty_selection() {
    let broken = item("Broken", FacetTags::Malformed);
    assert!(matches(&broken, &facets(&[])));
}

// ===== Combined mode =====

#[test]
fn combined_requires_both_predicates() {
    let query = QueryState::Combined {
        search_text: "engine".to_string(),
        selected: ["Vulkan"].into_iter().collect(),
    };
    assert!(matches(&tagged("Hush Engine", &["Vulkan"]), &query));
    assert!(!matches(&tagged("Hush Engine", &["C++"]), &query));
    assert!(!matches(&tagged("Gripshot", &["Vulkan"]), &query));
}

#[test]
fn combined_empty_is_unfiltered() {
    let query = QueryState::empty(FilterMode::Combined);
    assert!(query.is_unfiltered());
    assert!(matches(&item("Broken", FacetTags::Malformed), &query));
}

// ===== QueryState accessors =====

#[test]
fn empty_query_has_mode_shape() {
    assert_eq!(QueryState::empty(FilterMode::Text).search_text(), Some(""));
    assert!(QueryState::empty(FilterMode::Text).selected_facets().is_none());
    assert!(QueryState::empty(FilterMode::Facets).search_text().is_none());
    assert_eq!(QueryState::empty(FilterMode::Facets).mode(), FilterMode::Facets);
}

#[test]
fn is_unfiltered_tracks_content() {
    assert!(text("").is_unfiltered());
    assert!(!text("a").is_unfiltered());
    assert!(facets(&[]).is_unfiltered());
    assert!(!facets(&["C++"]).is_unfiltered());
}

// ===== FacetSelection =====

#[test]
fn toggle_adds_then_removes() {
    let mut selection = FacetSelection::new();
    assert!(selection.toggle("Godot"));
    assert!(selection.contains("Godot"));
    assert!(!selection.toggle("Godot"));
    assert!(selection.is_empty());
}

#[test]
fn clear_empties_selection() {
    let mut selection: FacetSelection = ["C++", "Vulkan"].into_iter().collect();
    assert_eq!(selection.len(), 2);
    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn iter_is_sorted() {
    let selection: FacetSelection = ["Vulkan", "C++", "Desktop"].into_iter().collect();
    assert_eq!(
        selection.iter().collect::<Vec<_>>(),
        vec!["C++", "Desktop", "Vulkan"]
    );
}
