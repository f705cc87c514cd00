//! The fixed directory skeleton of a generated module.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Subdirectories created under the module root.
pub const SUBDIRECTORIES: [&str; 3] = ["models", "views", "security"];

/// Directory skeleton of one module under an output directory.
#[derive(Debug, Clone)]
pub struct DirectoryLayout {
    root: PathBuf,
}

impl DirectoryLayout {
    pub fn new(base: &Path, module: &str) -> Self {
        Self {
            root: base.join(module),
        }
    }

    /// The module root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every directory of the skeleton, root first.
    pub fn directories(&self) -> Vec<PathBuf> {
        std::iter::once(self.root.clone())
            .chain(SUBDIRECTORIES.iter().map(|d| self.root.join(d)))
            .collect()
    }

    /// Create the skeleton. Existing directories are left alone.
    ///
    /// On failure, returns the directory that could not be created.
    pub fn create(&self) -> Result<(), (PathBuf, io::Error)> {
        for dir in self.directories() {
            fs::create_dir_all(&dir).map_err(|e| (dir.clone(), e))?;
            tracing::debug!(dir = %dir.display(), "directory ready");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_create_layout() {
        let temp = TempDir::new().unwrap();
        let layout = DirectoryLayout::new(temp.path(), "crm_followup");

        layout.create().unwrap();

        for sub in SUBDIRECTORIES {
            assert!(temp.path().join("crm_followup").join(sub).is_dir());
        }
    }

    #[test]
    fn test_create_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let layout = DirectoryLayout::new(temp.path(), "crm_followup");

        layout.create().unwrap();
        fs::write(layout.root().join("models").join("keep.py"), "x").unwrap();
        layout.create().unwrap();

        assert!(layout.root().join("models").join("keep.py").exists());
    }

    #[test]
    fn test_create_fails_when_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("crm_followup"), "not a dir").unwrap();
        let layout = DirectoryLayout::new(temp.path(), "crm_followup");

        let (path, _) = layout.create().unwrap_err();

        assert_eq!(path, temp.path().join("crm_followup"));
    }

    #[test]
    fn test_directories_order() {
        let layout = DirectoryLayout::new(Path::new("out"), "m");
        assert_eq!(
            layout.directories(),
            vec![
                PathBuf::from("out/m"),
                PathBuf::from("out/m/models"),
                PathBuf::from("out/m/views"),
                PathBuf::from("out/m/security"),
            ]
        );
    }
}
