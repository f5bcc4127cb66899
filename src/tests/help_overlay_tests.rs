//! Tests for help overlay functionality
//!
//! Verifies that pressing '?' toggles the help overlay and Escape dismisses it.

use crate::test_harness::{AcceptanceTestHarness, PORTFOLIO_FIXTURE};
use crossterm::event::{KeyCode, KeyModifiers};

fn harness() -> AcceptanceTestHarness {
    AcceptanceTestHarness::from_fixture_with_size(PORTFOLIO_FIXTURE, 100, 40)
        .expect("Failed to load fixture")
}

#[test]
fn test_question_mark_toggles_help_overlay() {
    // GIVEN: Application with initial state
    let mut harness = harness();
    assert!(!harness.state().help_visible);

    // WHEN: User presses '?' once
    harness.send_key_with_mods(KeyCode::Char('?'), KeyModifiers::NONE);

    // THEN: Help visible and drawn
    assert!(harness.state().help_visible, "First '?' should show help");
    let screen = harness.render_to_string();
    assert!(screen.contains("Keyboard Shortcuts"));

    // WHEN: User presses '?' again
    harness.send_key_with_mods(KeyCode::Char('?'), KeyModifiers::NONE);

    // THEN: Help hidden (toggle behavior)
    assert!(!harness.state().help_visible, "Second '?' should toggle help off");
}

#[test]
fn test_escape_closes_help_when_visible() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('?'));

    harness.send_key(KeyCode::Esc);

    assert!(!harness.state().help_visible);
}

#[test]
fn test_escape_on_help_keeps_search_text() {
    // GIVEN: A committed search, then help opened
    let mut harness = harness();
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("godot");
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('?'));

    // WHEN: Esc dismisses help
    harness.send_key(KeyCode::Esc);

    // THEN: The search is untouched
    assert_eq!(harness.state().blog().query().search_text(), Some("godot"));
}

#[test]
fn test_help_blocks_navigation() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('?'));

    harness.send_keys(&[KeyCode::Char('n'), KeyCode::Tab, KeyCode::Char('/')]);

    let state = harness.state();
    assert_eq!(state.blog().view().current_page, 1);
    assert_eq!(state.active_view, crate::state::ActiveView::Blog);
    assert!(!state.search.is_typing());
}

#[test]
fn test_quit_works_while_help_open() {
    let mut harness = harness();
    harness.send_key(KeyCode::Char('?'));

    assert!(harness.send_key(KeyCode::Char('q')));
}
