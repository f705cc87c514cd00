use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use modforge_core::WriteError;
use modforge_manifest::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// A stage of module generation, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Validate,
    Layout,
    ModuleInit,
    ModelsInit,
    Manifest,
    Model(String),
    View(String),
    Access,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Validate => write!(f, "validate description"),
            Step::Layout => write!(f, "create directories"),
            Step::ModuleInit => write!(f, "write module __init__.py"),
            Step::ModelsInit => write!(f, "write models/__init__.py"),
            Step::Manifest => write!(f, "write __manifest__.py"),
            Step::Model(name) => write!(f, "write model '{}'", name),
            Step::View(name) => write!(f, "write view for '{}'", name),
            Step::Access => write!(f, "write access table"),
        }
    }
}

/// Why generation stopped.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to create directory '{}'", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<WriteError> for GenerateError {
    fn from(e: WriteError) -> Self {
        GenerateError::Write {
            path: e.path,
            source: e.source,
        }
    }
}

/// Machine-readable class of a [`GenerateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Directory,
    Write,
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Validation(_) => ErrorKind::Validation,
            GenerateError::Directory { .. } => ErrorKind::Directory,
            GenerateError::Write { .. } => ErrorKind::Write,
        }
    }

    /// The filesystem path involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            GenerateError::Validation(_) => None,
            GenerateError::Directory { path, .. } | GenerateError::Write { path, .. } => {
                Some(path)
            }
        }
    }

    /// The message with its underlying cause, e.g.
    /// "failed to write 'x/__init__.py': Permission denied (os error 13)".
    pub fn detailed_message(&self) -> String {
        match self {
            GenerateError::Validation(e) => e.to_string(),
            GenerateError::Directory { source, .. } | GenerateError::Write { source, .. } => {
                format!("{}: {}", self, source)
            }
        }
    }
}

/// A generation run that stopped part-way.
///
/// Files written before the failing step stay on disk.
#[derive(Debug, Error)]
#[error("could not {step}")]
pub struct GenerateFailure {
    pub step: Step,
    #[source]
    pub error: GenerateError,
    /// Files already written, in write order
    pub written: Vec<PathBuf>,
}
