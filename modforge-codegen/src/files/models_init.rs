use std::path::{Path, PathBuf};

use modforge_core::GeneratedFile;

use crate::builder::CodeBuilder;

/// The `models/__init__.py` file importing every model module
pub struct ModelsInit {
    pub module: String,
    pub models: Vec<String>,
}

impl ModelsInit {
    pub fn new(module: impl Into<String>, models: Vec<String>) -> Self {
        Self {
            module: module.into(),
            models,
        }
    }
}

impl GeneratedFile for ModelsInit {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.module).join("models").join("__init__.py")
    }

    fn render(&self) -> String {
        // Import order follows declaration order
        CodeBuilder::python()
            .each(&self.models, |b, model| {
                b.line(&format!("from . import {}", model))
            })
            .build()
    }
}
