//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the full application through the acceptance harness
//! or reach into crate-private rendering helpers.

mod help_overlay_tests;
