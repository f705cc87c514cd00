use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};
use modforge_core::{File, humanize};
use modforge_manifest::{BLUEPRINT_FILE, ModuleDescription, validate};

#[derive(Args)]
pub struct InitCommand {
    /// Module name (defaults to the current directory's name)
    #[arg(default_value = ".")]
    pub name: String,

    /// Directory to write modforge.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite an existing modforge.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let name = Self::resolve_name(&self.name)?;
        let path = write_starter(&self.output, &name, self.force)?;

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  edit the [module] table and [[models]] entries");
        println!("  modforge generate -c {}", path.display());

        Ok(())
    }

    fn resolve_name(name: &str) -> Result<String> {
        if name != "." {
            return Ok(name.to_string());
        }

        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let dir_name = cwd
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?;
        Ok(dir_name.replace(['-', ' ', '.'], "_").to_lowercase())
    }
}

/// Write a starter description for `name` into `dir`.
fn write_starter(dir: &Path, name: &str, force: bool) -> Result<PathBuf> {
    if let Err(e) = validate(&ModuleDescription::new(name), &[]) {
        bail!("'{}' is not a valid module name: {}", name, e);
    }

    let file = File::new(dir.join(BLUEPRINT_FILE), starter(name));
    if file.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            file.path().display()
        );
    }

    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
    file.write()?;
    Ok(file.path().to_path_buf())
}

fn starter(name: &str) -> String {
    format!(
        r#"[module]
name = "{name}"
version = "1.0"
category = "Uncategorized"
summary = "{title}"
dependencies = ["base"]

[generate]
# "placeholder" writes fixed manifest values, "description" takes them from [module]
manifest = "placeholder"

[[models]]
name = "{name}_note"
fields = [
  {{ name = "name", type = "Char" }},
  {{ name = "description", type = "Text" }},
]
"#,
        name = name,
        title = humanize(name),
    )
}
