//! Integration tests for question-review
//!
//! These tests drive the review session, storage, export and UI together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod rendering;
pub mod review_flow;
