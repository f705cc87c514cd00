//! Core utilities and types for the modforge module generator.
//!
//! This crate provides the file-writing primitive and naming helpers
//! shared by the rest of the workspace.

mod file;
mod utils;

// File operations
pub use file::{File, GeneratedFile, WriteError, write_file};
// String utilities
pub use utils::{capitalize, humanize, py_quote, to_words};
