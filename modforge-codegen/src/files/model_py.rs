use std::path::{Path, PathBuf};

use modforge_core::{GeneratedFile, capitalize, humanize, to_words};
use modforge_manifest::{FieldDescription, ModelDescription};

use crate::builder::CodeBuilder;

/// A `models/<model>.py` file declaring one transient model
pub struct ModelPy<'a> {
    pub module: &'a str,
    pub model: &'a ModelDescription,
}

impl<'a> ModelPy<'a> {
    pub fn new(module: &'a str, model: &'a ModelDescription) -> Self {
        Self { module, model }
    }

    /// Python class name, e.g. `followup_note` -> `Followup_note`.
    pub fn class_name(&self) -> String {
        capitalize(&self.model.name)
    }

    fn field_line(field: &FieldDescription) -> String {
        format!(
            "{} = fields.{}(string='{}')",
            field.name,
            field.field_type,
            capitalize(&field.name)
        )
    }
}

impl GeneratedFile for ModelPy<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.module)
            .join("models")
            .join(format!("{}.py", self.model.name))
    }

    fn render(&self) -> String {
        let name = &self.model.name;

        CodeBuilder::python()
            .line("from odoo import fields, models")
            .blank()
            .blank()
            .block(
                &format!("class {}(models.TransientModel):", self.class_name()),
                |b| {
                    b.line(&format!(
                        "\"\"\"This model is used for {}.\"\"\"",
                        to_words(name)
                    ))
                    .line(&format!("_name = '{}'", name))
                    .line(&format!("_description = \"{}\"", humanize(name)))
                    .when(!self.model.fields.is_empty(), |b| {
                        b.blank()
                            .each(&self.model.fields, |b, field| b.line(&Self::field_line(field)))
                    })
                },
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        let model = ModelDescription::new("followup_note");
        assert_eq!(ModelPy::new("crm", &model).class_name(), "Followup_note");
    }

    #[test]
    fn test_field_order_preserved() {
        let model = ModelDescription::new("note")
            .field("zulu", "Char")
            .field("alpha", "Integer")
            .field("mike", "Boolean");

        let rendered = ModelPy::new("crm", &model).render();
        let zulu = rendered.find("zulu = fields.Char").unwrap();
        let alpha = rendered.find("alpha = fields.Integer").unwrap();
        let mike = rendered.find("mike = fields.Boolean").unwrap();

        assert!(zulu < alpha && alpha < mike);
    }

    #[test]
    fn test_field_type_is_opaque() {
        let model = ModelDescription::new("note").field("x", "Whatever2many");
        let rendered = ModelPy::new("crm", &model).render();
        assert!(rendered.contains("    x = fields.Whatever2many(string='X')\n"));
    }

    #[test]
    fn test_empty_fields() {
        let model = ModelDescription::new("note");
        let rendered = ModelPy::new("crm", &model).render();

        assert!(rendered.ends_with("    _description = \"Note\"\n"));
        assert!(!rendered.contains("fields."));
    }

    #[test]
    fn test_path() {
        let model = ModelDescription::new("followup_note");
        assert_eq!(
            ModelPy::new("crm", &model).path(Path::new("out")),
            Path::new("out/crm/models/followup_note.py")
        );
    }
}
