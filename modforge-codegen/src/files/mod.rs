//! One type per generated artifact.
//!
//! Each type implements [`GeneratedFile`](modforge_core::GeneratedFile):
//! `render` is pure, `path` resolves the artifact under the output directory
//! (the parent of the module directory).

mod access_csv;
mod manifest_py;
mod model_py;
mod models_init;
mod module_init;
mod view_xml;

pub use access_csv::{ACCESS_HEADER, AccessCsv};
pub use manifest_py::{ManifestPy, PLACEHOLDER_DEPENDS};
pub use model_py::ModelPy;
pub use models_init::ModelsInit;
pub use module_init::ModuleInit;
pub use view_xml::{VIEW_PRIORITY, ViewXml};

/// Access table path, relative to the module root.
pub const ACCESS_FILE: &str = "security/ir.model.access.csv";

/// View file path for a model, relative to the module root.
pub fn view_file(model: &str) -> String {
    format!("views/{}_views.xml", model)
}
