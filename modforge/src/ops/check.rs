//! Check operation - description validation.

use modforge_manifest::BlueprintFile;

use crate::reports::{CheckReport, ModelSummary};

/// Summarize an opened description.
///
/// Parsing and validation already happened in [`BlueprintFile::open`].
pub fn check(file: &BlueprintFile) -> CheckReport {
    let blueprint = file.blueprint();

    CheckReport {
        config_path: file.path().to_path_buf(),
        module: blueprint.module.name.clone(),
        manifest: blueprint.generate.manifest,
        models: blueprint
            .models
            .iter()
            .map(|model| ModelSummary {
                name: model.name.clone(),
                fields: model
                    .fields
                    .iter()
                    .map(|f| (f.name.clone(), f.field_type.clone()))
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_summarizes_models() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("modforge.toml");
        fs::write(
            &path,
            r#"
[module]
name = "crm_followup"

[[models]]
name = "followup_note"
fields = [{ name = "partner_id", type = "Many2one" }]
"#,
        )
        .unwrap();

        let file = BlueprintFile::open(&path).unwrap();
        let report = check(&file);

        assert_eq!(report.module, "crm_followup");
        assert_eq!(report.config_path, path);
        assert_eq!(report.models.len(), 1);
        assert_eq!(
            report.models[0].fields,
            [("partner_id".to_string(), "Many2one".to_string())]
        );
    }
}
