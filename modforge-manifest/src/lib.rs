//! Module description types, parsing and validation.
//!
//! A description is the immutable input of the generator: a module, its
//! models and their ordered fields. It can be built in code or loaded from
//! a `modforge.toml` file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod blueprint;
mod config;
mod description;
mod error;
mod validate;

pub use blueprint::{BLUEPRINT_FILE, Blueprint, BlueprintFile, parse_blueprint};
pub use config::{GenerateConfig, ManifestValues};
pub use description::{FieldDescription, ModelDescription, ModuleDescription};
pub use error::{Error, Result};
pub use validate::{NameKind, ValidationError, validate, validate_identifier};
