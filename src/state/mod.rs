//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod carousel;
pub mod discovery;
pub mod filter;
pub mod pagination;
pub mod search_input;

// Re-export for convenience
pub use action_handler::handle_action;
pub use app_state::{ActiveView, AppState, FacetPanel, StartupQuery, ViewPolicies};
pub use carousel::Carousel;
pub use discovery::{render, DiscoveryEvent, DiscoveryPolicy, DiscoverySession, RenderView};
pub use filter::{matches, text_matches, FacetSelection, FilterMode, QueryState};
pub use pagination::{PageRegion, PageSize, Pagination};
pub use search_input::SearchState;
