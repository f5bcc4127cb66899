//! Row and column sizes shared by the view widgets.

/// Height of the view tab bar in lines (border + titles).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search box in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the selected-facets summary line.
pub const FACET_SUMMARY_HEIGHT: u16 = 1;

/// Width of the facet panel in columns, borders included.
pub const FACET_PANEL_WIDTH: u16 = 30;

/// Lines taken by one blog card: tags, title, author, date, spacer.
pub const BLOG_CARD_HEIGHT: u16 = 5;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
