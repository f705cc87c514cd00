//! Text building blocks for rendered files.

mod code_builder;

pub use code_builder::{CodeBuilder, PYTHON_INDENT};
