//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use pyhatch_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PyhatchError, PyhatchResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> PyhatchResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PyhatchResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn touch(&self, path: &Path) -> PyhatchResult<()> {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| map_io_error(path, e, "create file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_non_empty_dir(&self, path: &Path) -> PyhatchResult<bool> {
        if !path.is_dir() {
            return Ok(false);
        }
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_some())
    }

    fn list_files(&self, dir: &Path) -> PyhatchResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))? {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn symlink(&self, target: &Path, link: &Path) -> PyhatchResult<()> {
        #[cfg(unix)]
        let result = std::os::unix::fs::symlink(target, link);
        #[cfg(windows)]
        let result = std::os::windows::fs::symlink_file(target, link);
        #[cfg(not(any(unix, windows)))]
        let result: io::Result<()> = {
            let _ = target;
            Err(io::Error::new(io::ErrorKind::Unsupported, "symlinks unsupported"))
        };

        result.map_err(|e| map_io_error(link, e, "create symlink"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PyhatchError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
