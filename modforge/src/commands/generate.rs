use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use modforge_codegen::ModuleGenerator;
use modforge_manifest::{BLUEPRINT_FILE, BlueprintFile, ManifestValues};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

/// How the generation report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the module description
    #[arg(short, long, default_value = BLUEPRINT_FILE)]
    pub config: PathBuf,

    /// Directory to create the module in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Where manifest metadata comes from (overrides the [generate] table)
    #[arg(long)]
    pub manifest_values: Option<ManifestValues>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = BlueprintFile::open(&self.config).unwrap_or_exit();
        tracing::debug!(config = %file.path().display(), "description loaded");

        let mut generator = ModuleGenerator::from_blueprint(file.into_blueprint());
        if let Some(values) = self.manifest_values {
            generator = generator.with_manifest_values(values);
        }

        let report = ops::generate(
            &generator,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        match self.format {
            OutputFormat::Text => report.render(&mut TerminalOutput::new()),
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
                println!("{}", json);
            }
        }

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }
}
