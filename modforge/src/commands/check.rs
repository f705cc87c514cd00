use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modforge_manifest::{BLUEPRINT_FILE, BlueprintFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the module description
    #[arg(short, long, default_value = BLUEPRINT_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = BlueprintFile::open(&self.config).unwrap_or_exit();
        ops::check(&file).render(&mut TerminalOutput::new());
        Ok(())
    }
}
