//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::source::ContentSource;
use crate::state::{AppState, ViewPolicies};
use crate::view::{ColorConfig, TuiApp, TuiError, ViewStyles};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

/// Path of the shared portfolio fixture.
pub const PORTFOLIO_FIXTURE: &str = "tests/fixtures/portfolio.json";

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load fixture into test app with default terminal size (80x24)
    #[allow(dead_code)]
    pub fn from_fixture(path: &str) -> Result<Self, TuiError> {
        Self::from_fixture_with_size(path, 80, 24)
    }

    /// Load fixture with custom terminal size
    ///
    /// `path` is relative to the crate root. Colors are disabled so
    /// rendered output is stable.
    pub fn from_fixture_with_size(path: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        Self::from_fixture_with_policies(path, width, height, ViewPolicies::default())
    }

    /// Load fixture with custom terminal size and discovery policies
    pub fn from_fixture_with_policies(
        path: &str,
        width: u16,
        height: u16,
        policies: ViewPolicies,
    ) -> Result<Self, TuiError> {
        let full_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path);
        let document = ContentSource::File(full_path).load()?;

        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let app_state = AppState::new(document, policies);
        let styles = ViewStyles::with_color_config(ColorConfig::disabled());

        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default(), styles);

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let key_event = KeyEvent::new(key, mods);
        let quit = self.app.handle_key_test(key_event);

        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    #[allow(dead_code)]
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Type text (sends individual character key events)
    #[allow(dead_code)]
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }

    /// Assert that the current render matches a snapshot
    #[allow(dead_code)]
    pub fn assert_snapshot(&mut self, snapshot_name: &str) {
        let output = self.render_to_string();
        insta::assert_snapshot!(snapshot_name, output);
    }
}
