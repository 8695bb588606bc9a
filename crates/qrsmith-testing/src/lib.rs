//! Testing infrastructure for qrsmith integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `fixtures`: Sample template and value-map generation and placement

pub mod fixtures;

pub use fixtures::{sample_values, till_template, write_template_file};
