use std::path::{Path, PathBuf};

use modforge_core::GeneratedFile;

use super::ACCESS_FILE;

/// Column header of `ir.model.access.csv`.
pub const ACCESS_HEADER: &str =
    "id,name,model_id:id,group_id:id,perm_read,perm_write,perm_create,perm_unlink";

/// The access table granting full CRUD on every model to the default group
pub struct AccessCsv {
    pub module: String,
    pub models: Vec<String>,
}

impl AccessCsv {
    pub fn new(module: impl Into<String>, models: Vec<String>) -> Self {
        Self {
            module: module.into(),
            models,
        }
    }

    fn row(model: &str) -> String {
        format!("access_{model},access_{model},model_{model},,1,1,1,1")
    }
}

impl GeneratedFile for AccessCsv {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.module).join(ACCESS_FILE)
    }

    fn render(&self) -> String {
        let mut out = String::from(ACCESS_HEADER);
        out.push('\n');
        for model in &self.models {
            out.push_str(&Self::row(model));
            out.push('\n');
        }
        out
    }
}
