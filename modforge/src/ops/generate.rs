//! Generate operation - module scaffolding from a description.

use std::path::Path;

use eyre::{Context, Result};
use modforge_codegen::ModuleGenerator;

use crate::reports::{GenerateReport, Outcome, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the module directory is created under.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// A failed write is not an `Err` here: it is reported through the
/// returned report, which still lists the files written before it.
pub fn generate(generator: &ModuleGenerator, opts: GenerateOptions) -> Result<GenerateReport> {
    let outcome = if opts.dry_run {
        let files = generator
            .preview()
            .wrap_err("Failed to render module")?
            .into_iter()
            .map(|(path, content)| PreviewFile { path, content })
            .collect();
        Outcome::Preview { files }
    } else {
        Outcome::Written(generator.generate(opts.output_dir))
    };

    Ok(GenerateReport {
        module: generator.module().name.clone(),
        output_dir: opts.output_dir.to_path_buf(),
        manifest: generator.options().manifest,
        outcome,
    })
}
