use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ValidationError;

/// Result type for description loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The text being parsed and the name it is reported under.
///
/// Every diagnostic built from it carries its own copy of the source, so
/// errors outlive the buffer they were parsed from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub(crate) fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Wrap a TOML error, keeping the span toml reports.
    pub(crate) fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// Wrap a validation failure, pointing at the offending name when it
    /// appears in the source.
    pub(crate) fn validation_error(&self, error: ValidationError) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: crate::validate::find_name_span(self.src, error.name()),
            help: error.help(),
            error,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'modforge init <name>' to create a new description"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse module description")]
    #[diagnostic(code(modforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{error}")]
    #[diagnostic(code(modforge::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[help]
        help: String,
        error: ValidationError,
    },
}

impl Error {
    /// The validation failure behind this error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation { error, .. } => Some(error),
            _ => None,
        }
    }
}
