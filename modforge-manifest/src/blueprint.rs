//! The `modforge.toml` file: a module description plus generation settings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, GenerateConfig, ModelDescription, ModuleDescription, Result, error::SourceContext,
    validate,
};

/// Default description file name.
pub const BLUEPRINT_FILE: &str = "modforge.toml";

/// Root of a `modforge.toml` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Blueprint {
    pub module: ModuleDescription,

    #[serde(default)]
    pub generate: GenerateConfig,

    /// Models in declaration order
    #[serde(default)]
    pub models: Vec<ModelDescription>,
}

impl Blueprint {
    pub fn new(module: ModuleDescription, models: Vec<ModelDescription>) -> Self {
        Self {
            module,
            generate: GenerateConfig::default(),
            models,
        }
    }

    /// Total number of fields across all models.
    pub fn field_count(&self) -> usize {
        self.models.iter().map(|m| m.fields.len()).sum()
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl FromStr for Blueprint {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_blueprint(s, BLUEPRINT_FILE)
    }
}

/// Parse and validate a description from content.
pub fn parse_blueprint(content: &str, filename: &str) -> Result<Blueprint> {
    let source_ctx = SourceContext::new(content, filename);
    let blueprint: Blueprint =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    validate(&blueprint.module, &blueprint.models)
        .map_err(|e| source_ctx.validation_error(e))?;

    Ok(blueprint)
}

/// A description file with both raw content and the parsed blueprint.
pub struct BlueprintFile {
    path: PathBuf,
    content: String,
    blueprint: Blueprint,
}

impl BlueprintFile {
    /// Open and parse a description file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let blueprint = parse_blueprint(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            blueprint,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed blueprint.
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Take the parsed blueprint.
    pub fn into_blueprint(self) -> Blueprint {
        self.blueprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManifestValues, ValidationError};

    const SAMPLE: &str = r#"
[module]
name = "crm_followup"
version = "1.0"
category = "Sales"
summary = "Follow-up notes"
dependencies = ["base", "contacts"]

[generate]
manifest = "description"

[[models]]
name = "followup_note"
fields = [
  { name = "description", type = "Text" },
  { name = "partner_id", type = "Many2one" },
]

[[models]]
name = "followup_stage"
"#;

    #[test]
    fn test_parse_sample() {
        let blueprint = Blueprint::from_str(SAMPLE).unwrap();

        assert_eq!(blueprint.module.name, "crm_followup");
        assert_eq!(blueprint.module.category.as_deref(), Some("Sales"));
        assert_eq!(blueprint.generate.manifest, ManifestValues::Description);
        assert_eq!(blueprint.models.len(), 2);
        assert_eq!(
            blueprint.models[0].field_names().collect::<Vec<_>>(),
            ["description", "partner_id"]
        );
        assert!(blueprint.models[1].fields.is_empty());
        assert_eq!(blueprint.field_count(), 2);
    }

    #[test]
    fn test_minimal_defaults() {
        let blueprint = Blueprint::from_str("[module]\nname = \"bare\"\n").unwrap();

        assert!(blueprint.models.is_empty());
        assert!(blueprint.module.dependencies.is_empty());
        assert_eq!(blueprint.generate.manifest, ManifestValues::Placeholder);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Blueprint::from_str("[module]\nname = \n").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Blueprint::from_str("[module]\nname = \"x\"\nauthor = \"me\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_validation_error_points_at_name() {
        let src = "[module]\nname = \"crm\"\n\n[[models]]\nname = \"sale.order\"\n";
        let err = Blueprint::from_str(src).unwrap_err();

        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::InvalidName { .. })
        ));
        match *err {
            Error::Validation { span: Some(span), .. } => {
                assert_eq!(
                    &src[span.offset()..span.offset() + span.len()],
                    "sale.order"
                );
            }
            other => panic!("expected validation error with span, got {other:?}"),
        }
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let blueprint = Blueprint::from_str(SAMPLE).unwrap();
        let text = blueprint.to_toml().unwrap();
        assert_eq!(Blueprint::from_str(&text).unwrap(), blueprint);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = BlueprintFile::open(temp.path().join(BLUEPRINT_FILE))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(BLUEPRINT_FILE);
        std::fs::write(&path, SAMPLE).unwrap();

        let file = BlueprintFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.content(), SAMPLE);
        assert_eq!(file.into_blueprint().models.len(), 2);
    }
}
