//! Keyboard action handler.
//!
//! Maps a `KeyAction` onto AppState. Quitting is left to the shell.

use crate::model::KeyAction;
use crate::state::discovery::DiscoveryEvent;
use crate::state::{ActiveView, AppState};

/// Apply a keyboard action to the application state.
///
/// Page navigation on the video view moves the carousel instead.
pub fn handle_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::StartSearch => state.start_search(),
        KeyAction::SubmitSearch => state.submit_search(),
        KeyAction::CancelSearch => state.cancel_search(),

        KeyAction::NextPage if state.active_view == ActiveView::Videos => state.carousel.next(),
        KeyAction::PrevPage if state.active_view == ActiveView::Videos => {
            state.carousel.previous()
        }
        KeyAction::NextPage => state.apply(DiscoveryEvent::Next),
        KeyAction::PrevPage => state.apply(DiscoveryEvent::Previous),
        KeyAction::FirstPage => state.apply(DiscoveryEvent::FirstPage),
        KeyAction::LastPage => state.apply(DiscoveryEvent::LastPage),
        KeyAction::GoToPage(n) => state.apply(DiscoveryEvent::PageRequested(n)),

        KeyAction::ToggleFacetPanel => state.toggle_facet_panel(),
        KeyAction::FacetCursorDown if state.facet_panel().is_visible() => {
            state.facet_panel_mut().cursor_down()
        }
        KeyAction::FacetCursorUp if state.facet_panel().is_visible() => {
            state.facet_panel_mut().cursor_up()
        }
        KeyAction::ToggleFacet => state.toggle_facet_under_cursor(),
        KeyAction::ClearFacets if state.accepts_facets() => {
            state.apply(DiscoveryEvent::FacetsCleared)
        }

        KeyAction::NextView => state.next_view(),
        KeyAction::PrevView => state.prev_view(),

        KeyAction::CarouselNext => state.carousel.next(),
        KeyAction::CarouselPrev => state.carousel.previous(),

        KeyAction::Help => state.help_visible = !state.help_visible,

        KeyAction::FacetCursorDown
        | KeyAction::FacetCursorUp
        | KeyAction::ClearFacets
        | KeyAction::Quit => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
