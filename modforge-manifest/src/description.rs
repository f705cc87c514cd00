//! Input description of the module to generate.
//!
//! These are plain values: the front end assembles them one model or field
//! at a time, then hands the generator a finished snapshot.

use serde::{Deserialize, Serialize};

/// Module identity and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDescription {
    /// Technical name, used verbatim as the root directory and addon name
    pub name: String,

    /// Module version (e.g. "17.0.1.0.0")
    pub version: Option<String>,

    /// Application category
    pub category: Option<String>,

    /// One-line summary
    pub summary: Option<String>,

    /// Addons this module depends on, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ModuleDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            category: None,
            summary: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}

/// A single field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescription {
    pub name: String,

    /// Framework field type tag (e.g. "Char", "Many2one"), never checked
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// A data model and its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelDescription {
    pub name: String,

    /// Field order is preserved in every rendered artifact
    #[serde(default)]
    pub fields: Vec<FieldDescription>,
}

impl ModelDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, field_type: impl Into<String>) -> Self {
        self.fields.push(FieldDescription::new(name, field_type));
        self
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
