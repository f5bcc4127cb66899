//! View styling configuration.
//!
//! Every widget takes its colors from one `ViewStyles` value so `--no-color`
//! and `NO_COLOR` are honored in a single place.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ViewStyles =====

/// Styles shared by all widgets.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so
/// selection and disabled controls stay distinguishable on a mono terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyles {
    /// Item titles.
    pub title: Style,
    /// Secondary text: author, date, counts.
    pub muted: Style,
    /// Topic tags.
    pub tag: Style,
    /// Technology tags.
    pub technology: Style,
    /// Group and section headings.
    pub heading: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Active tab, current page, facet cursor.
    pub selected: Style,
    /// Selected facet that is not under the cursor.
    pub checked: Style,
    /// Prev/next controls that lead nowhere.
    pub disabled: Style,
    /// Borders of focused panels.
    pub focus_border: Style,
    /// Warnings in the status bar.
    pub warning: Style,
}

impl ViewStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                tag: Style::default().fg(Color::Magenta),
                technology: Style::default().fg(Color::Cyan),
                heading: bold.fg(Color::Yellow),
                key: bold.fg(Color::Yellow),
                selected: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                checked: bold.fg(Color::Green),
                disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                focus_border: Style::default().fg(Color::Cyan),
                warning: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                title: bold,
                muted: Style::default(),
                tag: Style::default(),
                technology: Style::default(),
                heading: bold,
                key: bold,
                selected: Style::default().add_modifier(Modifier::REVERSED),
                checked: bold,
                disabled: Style::default().add_modifier(Modifier::DIM),
                focus_border: Style::default(),
                warning: bold,
            }
        }
    }
}

impl Default for ViewStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
