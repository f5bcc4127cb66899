//! folio
//!
//! Content discovery engine and terminal browser for a personal portfolio:
//! a paginated, searchable blog index, a facet-filtered project gallery and
//! a video carousel.
//!
//! The engine (`state`) is pure and testable without a terminal; `view` is
//! the impure shell drawing it with ratatui.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
