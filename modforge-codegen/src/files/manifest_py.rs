use std::path::{Path, PathBuf};

use modforge_core::{GeneratedFile, py_quote};
use modforge_manifest::{ManifestValues, ModuleDescription};

use super::{ACCESS_FILE, view_file};
use crate::builder::CodeBuilder;

const PLACEHOLDER_VERSION: &str = "1.0";
const PLACEHOLDER_CATEGORY: &str = "Category";
const PLACEHOLDER_SUMMARY: &str = "Summary";

/// Dependencies declared when the description supplies none.
pub const PLACEHOLDER_DEPENDS: &[&str] = &["base", "contacts"];

/// The `__manifest__.py` addon descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPy {
    pub name: String,
    pub version: String,
    pub category: String,
    pub summary: String,
    pub depends: Vec<String>,
    /// Data files in load order: the access table, then one view per model
    pub data: Vec<String>,
}

impl ManifestPy {
    /// Manifest with the fixed placeholder metadata.
    pub fn placeholder(module: impl Into<String>, models: &[String]) -> Self {
        Self {
            name: module.into(),
            version: PLACEHOLDER_VERSION.to_string(),
            category: PLACEHOLDER_CATEGORY.to_string(),
            summary: PLACEHOLDER_SUMMARY.to_string(),
            depends: PLACEHOLDER_DEPENDS.iter().map(|d| d.to_string()).collect(),
            data: Self::data_files(models),
        }
    }

    /// Manifest for `module`, taking metadata from the description when
    /// `values` asks for it.
    pub fn new(module: &ModuleDescription, models: &[String], values: ManifestValues) -> Self {
        let manifest = Self::placeholder(&module.name, models);
        match values {
            ManifestValues::Placeholder => manifest,
            ManifestValues::Description => Self {
                version: module.version.clone().unwrap_or(manifest.version),
                category: module.category.clone().unwrap_or(manifest.category),
                summary: module.summary.clone().unwrap_or(manifest.summary),
                depends: if module.dependencies.is_empty() {
                    manifest.depends
                } else {
                    module.dependencies.clone()
                },
                ..manifest
            },
        }
    }

    fn data_files(models: &[String]) -> Vec<String> {
        std::iter::once(ACCESS_FILE.to_string())
            .chain(models.iter().map(|m| view_file(m)))
            .collect()
    }
}

impl GeneratedFile for ManifestPy {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.name).join("__manifest__.py")
    }

    fn render(&self) -> String {
        let depends: Vec<String> = self.depends.iter().map(|d| py_quote(d)).collect();

        CodeBuilder::python()
            .block_with_close("{", "}", |b| {
                b.line(&format!("'name': {},", py_quote(&self.name)))
                    .line(&format!("'version': {},", py_quote(&self.version)))
                    .line(&format!("'category': {},", py_quote(&self.category)))
                    .line(&format!("'summary': {},", py_quote(&self.summary)))
                    .line(&format!("'depends': [{}],", depends.join(", ")))
                    .block_with_close("'data': [", "],", |b| {
                        b.each(&self.data, |b, file| {
                            b.line(&format!("{},", py_quote(file)))
                        })
                    })
                    .line("'installable': True,")
                    .line("'application': True,")
            })
            .build()
    }
}
