use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Failure to put a file on disk, tagged with the path involved.
#[derive(Debug, Error)]
#[error("failed to write '{}'", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the rendered file under `base`, returning the path written.
    ///
    /// The parent directory must already exist.
    fn write(&self, base: &Path) -> Result<PathBuf, WriteError> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path`, truncating any existing file.
///
/// The handle is flushed and synced before it is dropped. Parent
/// directories are not created.
pub fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(wrap)?;
    file.write_all(content.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    file.sync_all().map_err(wrap)?;
    Ok(())
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, overwriting whatever is there
    pub fn write(&self) -> Result<(), WriteError> {
        write_file(&self.path, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Hello;

    impl GeneratedFile for Hello {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("hello.txt")
        }

        fn render(&self) -> String {
            "hello\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_does_not_create_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        let err = write_file(&path, "nested").unwrap_err();

        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert!(!temp.path().join("a").exists());
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "a much longer first version").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_write_returns_path() {
        let temp = TempDir::new().unwrap();

        let written = Hello.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("hello.txt"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "hello\n");
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        file.write().unwrap();
        assert!(file.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_error_message_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("x.txt");

        let err = write_file(&path, "x").unwrap_err();

        assert!(err.to_string().contains("x.txt"));
    }
}
