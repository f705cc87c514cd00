//! Check command report data structures.

use std::path::PathBuf;

use modforge_manifest::ManifestValues;

use super::output::{Output, Report};

/// Report data from description validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the description file.
    pub config_path: PathBuf,
    pub module: String,
    pub manifest: ManifestValues,
    pub models: Vec<ModelSummary>,
}

/// One model and its fields as `(name, type)` pairs.
#[derive(Debug)]
pub struct ModelSummary {
    pub name: String,
    pub fields: Vec<(String, String)>,
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.text(&format!("✓ {} is valid", self.config_path.display()));
        out.blank();
        out.field("  module", &self.module);
        out.field("  manifest values", self.manifest.as_str());
        out.blank();

        out.text(&format!(
            "  {} model{}:",
            self.models.len(),
            plural(self.models.len())
        ));
        for model in &self.models {
            out.text(&format!(
                "    {} ({} field{})",
                model.name,
                model.fields.len(),
                plural(model.fields.len())
            ));
            for (name, field_type) in &model.fields {
                out.text(&format!("      {}: {}", name, field_type));
            }
        }
    }
}
