//! Shared test utilities
//!
//! - Question list and database fixtures
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
