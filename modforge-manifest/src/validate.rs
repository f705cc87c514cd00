//! Validation of module descriptions before anything touches the disk.

use std::{collections::HashSet, fmt};

use miette::SourceSpan;
use thiserror::Error;

use crate::{ModelDescription, ModuleDescription};

/// What kind of name a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Module,
    Model,
    Field,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Module => write!(f, "module"),
            NameKind::Model => write!(f, "model"),
            NameKind::Field => write!(f, "field"),
        }
    }
}

/// A description that cannot produce a well-formed module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {kind} name '{name}': {reason}")]
    InvalidName {
        kind: NameKind,
        name: String,
        reason: &'static str,
    },

    #[error("{kind} name '{name}' is a Python reserved keyword")]
    ReservedKeyword { kind: NameKind, name: String },

    #[error("model '{name}' is declared more than once")]
    DuplicateModel { name: String },

    #[error("field '{name}' is declared more than once in model '{model}'")]
    DuplicateField { model: String, name: String },

    #[error("field '{field}' in model '{model}' has no type")]
    EmptyFieldType { model: String, field: String },

    #[error("model name '{name}' collides with the models package init file")]
    ReservedModelName { name: String },

    #[error("field '{name}' in model '{model}' shadows the odoo '{name}' import")]
    ShadowedImport { model: String, name: String },
}

impl ValidationError {
    /// The offending name, used to locate the error in source text.
    pub fn name(&self) -> &str {
        match self {
            ValidationError::InvalidName { name, .. }
            | ValidationError::ReservedKeyword { name, .. }
            | ValidationError::DuplicateModel { name }
            | ValidationError::DuplicateField { name, .. }
            | ValidationError::ReservedModelName { name }
            | ValidationError::ShadowedImport { name, .. } => name,
            ValidationError::EmptyFieldType { field, .. } => field,
        }
    }

    /// Suggested fix.
    pub fn help(&self) -> String {
        match self {
            ValidationError::InvalidName { .. } => "use only ASCII letters, digits and \
                 underscores, starting with a letter or underscore"
                .to_string(),
            ValidationError::ReservedKeyword { name, .. } => {
                format!("rename '{name}' to something else, e.g. '{name}_value'")
            }
            ValidationError::DuplicateModel { .. } => {
                "each model renders its own files, so model names must be unique".to_string()
            }
            ValidationError::DuplicateField { .. } => {
                "rename or remove one of the fields".to_string()
            }
            ValidationError::EmptyFieldType { .. } => {
                "set a field type such as \"Char\", \"Text\" or \"Many2one\"".to_string()
            }
            ValidationError::ReservedModelName { .. } => {
                "model files live next to models/__init__.py; pick another model name".to_string()
            }
            ValidationError::ShadowedImport { name, .. } => {
                format!("model files import '{name}' from odoo; rename the field, e.g. '{name}_ids'")
            }
        }
    }
}

/// Python reserved keywords that cannot be used as identifiers
pub(crate) const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Model names whose file would overwrite another generated file
const RESERVED_MODEL_NAMES: &[&str] = &["__init__"];

/// Names every model file imports from odoo
const IMPORTED_NAMES: &[&str] = &["fields", "models"];

/// Check if a name is a Python reserved keyword
pub(crate) fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Validate that a name is a plain identifier.
/// Returns None if valid, Some(reason) if invalid
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let first = match chars.next() {
        None => return Some("name is empty"),
        Some(c) => c,
    };

    if first.is_ascii_digit() {
        return Some("name cannot start with a digit");
    }

    let valid_start = first.is_ascii_alphabetic() || first == '_';
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name contains invalid characters");
    }

    None
}

fn check_name(name: &str, kind: NameKind) -> Result<(), ValidationError> {
    if let Some(reason) = validate_identifier(name) {
        return Err(ValidationError::InvalidName {
            kind,
            name: name.to_string(),
            reason,
        });
    }

    if is_python_keyword(name) {
        return Err(ValidationError::ReservedKeyword {
            kind,
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validate a module and its models, stopping at the first problem.
///
/// Field types are only checked for presence; their vocabulary belongs to
/// the target framework.
pub fn validate(
    module: &ModuleDescription,
    models: &[ModelDescription],
) -> Result<(), ValidationError> {
    check_name(&module.name, NameKind::Module)?;

    let mut seen_models = HashSet::new();
    for model in models {
        check_name(&model.name, NameKind::Model)?;
        if RESERVED_MODEL_NAMES.contains(&model.name.as_str()) {
            return Err(ValidationError::ReservedModelName {
                name: model.name.clone(),
            });
        }
        if !seen_models.insert(model.name.as_str()) {
            return Err(ValidationError::DuplicateModel {
                name: model.name.clone(),
            });
        }

        let mut seen_fields = HashSet::new();
        for field in &model.fields {
            check_name(&field.name, NameKind::Field)?;
            if IMPORTED_NAMES.contains(&field.name.as_str()) {
                return Err(ValidationError::ShadowedImport {
                    model: model.name.clone(),
                    name: field.name.clone(),
                });
            }
            if !seen_fields.insert(field.name.as_str()) {
                return Err(ValidationError::DuplicateField {
                    model: model.name.clone(),
                    name: field.name.clone(),
                });
            }
            if field.field_type.trim().is_empty() {
                return Err(ValidationError::EmptyFieldType {
                    model: model.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Find the span of a name in the TOML source
/// Searches for `name = "value"` (or single-quoted) and falls back to nothing.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        for sep in [" = ", "="] {
            let pattern = format!("name{sep}{quote}{name}{quote}");
            if let Some(pos) = src.find(&pattern) {
                let start = pos + "name".len() + sep.len() + 1;
                return Some(SourceSpan::from((start, name.len())));
            }
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}
