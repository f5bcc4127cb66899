//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Search
    /// Start editing the search text. Default: /
    StartSearch,
    /// Stop editing, keep the search text applied. Default: Enter
    SubmitSearch,
    /// Stop editing and clear the search text. Default: Esc
    CancelSearch,

    // Pagination
    /// Go to the next page. Default: n/→
    NextPage,
    /// Go to the previous page. Default: p/←
    PrevPage,
    /// Jump to the first page. Default: g/Home
    FirstPage,
    /// Jump to the last page. Default: G/End
    LastPage,
    /// Jump to a specific page by number. Field: 1-based page (1-9)
    GoToPage(usize),

    // Facets
    /// Show or hide the facet panel. Default: f
    ToggleFacetPanel,
    /// Move the facet cursor down. Default: j/↓
    FacetCursorDown,
    /// Move the facet cursor up. Default: k/↑
    FacetCursorUp,
    /// Select or deselect the facet under the cursor. Default: Space
    ToggleFacet,
    /// Deselect every facet. Default: c
    ClearFacets,

    // Views
    /// Switch to the next view (Blog → Projects → Videos). Default: Tab
    NextView,
    /// Switch to the previous view. Default: Shift+Tab
    PrevView,

    // Carousel
    /// Show the next video, wrapping around. Default: ]
    CarouselNext,
    /// Show the previous video, wrapping around. Default: [
    CarouselPrev,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
