//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Bind a key, replacing any previous action for it.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    fn plain(&mut self, code: KeyCode, action: KeyAction) {
        self.bind(KeyEvent::new(code, KeyModifiers::NONE), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Search
        keys.plain(KeyCode::Char('/'), KeyAction::StartSearch);
        keys.plain(KeyCode::Enter, KeyAction::SubmitSearch);
        keys.plain(KeyCode::Esc, KeyAction::CancelSearch);

        // Pages
        keys.plain(KeyCode::Char('n'), KeyAction::NextPage);
        keys.plain(KeyCode::Right, KeyAction::NextPage);
        keys.plain(KeyCode::Char('p'), KeyAction::PrevPage);
        keys.plain(KeyCode::Left, KeyAction::PrevPage);
        keys.plain(KeyCode::Char('g'), KeyAction::FirstPage);
        keys.plain(KeyCode::Home, KeyAction::FirstPage);
        keys.bind(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::LastPage,
        );
        keys.plain(KeyCode::Char('G'), KeyAction::LastPage);
        keys.plain(KeyCode::End, KeyAction::LastPage);
        for (ch, page) in ('1'..='9').zip(1..) {
            keys.plain(KeyCode::Char(ch), KeyAction::GoToPage(page));
        }

        // Facets
        keys.plain(KeyCode::Char('f'), KeyAction::ToggleFacetPanel);
        keys.plain(KeyCode::Char('j'), KeyAction::FacetCursorDown);
        keys.plain(KeyCode::Down, KeyAction::FacetCursorDown);
        keys.plain(KeyCode::Char('k'), KeyAction::FacetCursorUp);
        keys.plain(KeyCode::Up, KeyAction::FacetCursorUp);
        keys.plain(KeyCode::Char(' '), KeyAction::ToggleFacet);
        keys.plain(KeyCode::Char('c'), KeyAction::ClearFacets);

        // Views
        keys.plain(KeyCode::Tab, KeyAction::NextView);
        keys.bind(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevView,
        );
        keys.plain(KeyCode::BackTab, KeyAction::PrevView);

        // Carousel
        keys.plain(KeyCode::Char(']'), KeyAction::CarouselNext);
        keys.plain(KeyCode::Char('['), KeyAction::CarouselPrev);

        // Application
        keys.plain(KeyCode::Char('?'), KeyAction::Help);
        keys.plain(KeyCode::Char('q'), KeyAction::Quit);
        keys.bind(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        keys
    }
}
