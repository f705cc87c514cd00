use std::path::{Path, PathBuf};

use modforge_core::{GeneratedFile, humanize};
use modforge_manifest::ModelDescription;

use super::view_file;
use crate::builder::CodeBuilder;

/// Priority of every generated form view.
pub const VIEW_PRIORITY: u32 = 8;

/// A `views/<model>_views.xml` file holding the model's form view
pub struct ViewXml<'a> {
    pub module: &'a str,
    pub model: &'a ModelDescription,
}

impl<'a> ViewXml<'a> {
    pub fn new(module: &'a str, model: &'a ModelDescription) -> Self {
        Self { module, model }
    }

    /// XML id of the form view record.
    pub fn record_id(&self) -> String {
        format!("{}_view_form", self.model.name)
    }
}

impl GeneratedFile for ViewXml<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.module).join(view_file(&self.model.name))
    }

    fn render(&self) -> String {
        let name = &self.model.name;

        CodeBuilder::python()
            .line(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
            .block_with_close("<odoo>", "</odoo>", |b| {
                b.block_with_close(
                    &format!(
                        r#"<record id="{}" model="ir.ui.view">"#,
                        self.record_id()
                    ),
                    "</record>",
                    |b| {
                        b.line(&format!(r#"<field name="name">{}.view.form</field>"#, name))
                            .line(&format!(r#"<field name="model">{}</field>"#, name))
                            .line(&format!(
                                r#"<field name="priority" eval="{}"/>"#,
                                VIEW_PRIORITY
                            ))
                            .block_with_close(r#"<field name="arch" type="xml">"#, "</field>", |b| {
                                b.block_with_close(
                                    &format!(r#"<form string="{}">"#, humanize(name)),
                                    "</form>",
                                    |b| self.render_form_body(b),
                                )
                            })
                    },
                )
            })
            .build()
    }
}

impl ViewXml<'_> {
    fn render_form_body(&self, b: CodeBuilder) -> CodeBuilder {
        b.block_with_close("<group>", "</group>", |b| {
            b.each(self.model.field_names(), |b, field| {
                b.line(&format!(r#"<field name="{}"/>"#, field))
            })
        })
        .block_with_close("<footer>", "</footer>", |b| {
            b.line(r#"<button name="action_confirm" string="Confirm" type="object" class="btn-primary"/>"#)
                .line(r#"<button name="cancel" string="Cancel" special="cancel" class="btn-secondary"/>"#)
        })
    }
}
