//! Generate command report data structures.

use std::path::PathBuf;

use modforge_codegen::GenerationResult;
use modforge_manifest::ManifestValues;
use serde::Serialize;

use super::output::{Bullet, Output, Report};

/// Report data from module generation.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Module name from the description.
    pub module: String,
    /// Directory the module is generated under.
    pub output_dir: PathBuf,
    /// Where the manifest metadata came from.
    pub manifest: ManifestValues,
    /// Files written, or the dry-run preview.
    pub outcome: Outcome,
}

/// What the run produced.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Outcome {
    /// Files were written to disk, or the run stopped part way.
    Written(GenerationResult),
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

/// A file in preview mode.
#[derive(Debug, Serialize)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    /// Whether the run finished without error.
    pub fn is_success(&self) -> bool {
        match &self.outcome {
            Outcome::Written(result) => result.success,
            Outcome::Preview { .. } => true,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            Outcome::Written(result) => self.render_written(out, result),
            Outcome::Preview { files } => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, result: &GenerationResult) {
        if !result.success {
            out.problem(&format!("error: {}", result.message));
            if let Some(failure) = &result.failure {
                out.problem(&format!("  while trying to {}", failure.step));
            }
            if !result.written.is_empty() {
                out.heading(&format!("Written before the failure ({})", result.written.len()));
                for path in &result.written {
                    out.item(Bullet::Plain, &path.display().to_string());
                }
            }
            return;
        }

        out.text(&result.message);
        out.blank();
        out.field("Manifest values", self.manifest.as_str());
        out.heading(&format!("Files ({})", result.written.len()));
        for path in &result.written {
            out.item(Bullet::Added, &path.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.text(file.content.trim_end_matches('\n'));
        }

        out.divider("Summary");
        out.text(&format!(
            "{} files would be generated under {}",
            files.len(),
            self.output_dir.display()
        ));
    }
}

#[cfg(test)]
mod tests {
    use modforge_codegen::{ErrorKind, FailureInfo, Step};

    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(outcome: Outcome) -> GenerateReport {
        GenerateReport {
            module: "crm".to_string(),
            output_dir: PathBuf::from("addons"),
            manifest: ManifestValues::Placeholder,
            outcome,
        }
    }

    #[test]
    fn test_render_success() {
        let report = report(Outcome::Written(GenerationResult {
            success: true,
            message: "Module crm has been created successfully.".to_string(),
            written: vec![PathBuf::from("addons/crm/__init__.py")],
            failure: None,
        }));
        let mut out = BufferOutput::buffered();
        report.render(&mut out);

        assert!(report.is_success());
        assert_eq!(
            out.stdout(),
            "Module crm has been created successfully.\n\n\
             Manifest values: placeholder\n\
             Files (1):\n  + addons/crm/__init__.py\n"
        );
    }

    #[test]
    fn test_render_failure() {
        let report = report(Outcome::Written(GenerationResult {
            success: false,
            message: "failed to write 'addons/crm/__manifest__.py': disk full".to_string(),
            written: vec![PathBuf::from("addons/crm/__init__.py")],
            failure: Some(FailureInfo {
                kind: ErrorKind::Write,
                step: Step::Manifest,
                path: Some(PathBuf::from("addons/crm/__manifest__.py")),
            }),
        }));
        let mut out = BufferOutput::buffered();
        report.render(&mut out);

        assert!(!report.is_success());
        assert!(out.stderr().contains("while trying to write __manifest__.py"));
        assert_eq!(
            out.stdout(),
            "Written before the failure (1):\n  - addons/crm/__init__.py\n"
        );
    }

    #[test]
    fn test_preview_serializes_with_mode() {
        let report = report(Outcome::Preview {
            files: vec![PreviewFile {
                path: "crm/__init__.py".to_string(),
                content: "from . import models\n".to_string(),
            }],
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["mode"], "preview");
        assert_eq!(json["outcome"]["files"][0]["path"], "crm/__init__.py");
        assert_eq!(json["manifest"], "placeholder");
    }
}
