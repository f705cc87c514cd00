//! Rendering and generation of Odoo addon modules.
//!
//! [`ModuleGenerator`] turns a module description into the addon tree:
//!
//! ```text
//! {module}/__init__.py
//! {module}/__manifest__.py
//! {module}/models/__init__.py
//! {module}/models/{model}.py
//! {module}/views/{model}_views.xml
//! {module}/security/ir.model.access.csv
//! ```

mod error;
mod generator;
mod layout;

pub mod builder;
pub mod files;

pub use error::{ErrorKind, GenerateError, GenerateFailure, Step};
pub use generator::{
    FailureInfo, GenerateReport, GenerationResult, GeneratorOptions, ModuleGenerator,
};
pub use layout::{DirectoryLayout, SUBDIRECTORIES};
pub use modforge_core::GeneratedFile;
