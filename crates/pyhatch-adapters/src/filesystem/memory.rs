//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use pyhatch_core::{
    application::{ApplicationError, ports::Filesystem},
    error::PyhatchResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can keep one handle and give
/// another to the services under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    symlinks: HashMap<PathBuf, PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Where the symlink at `link` points (testing helper).
    pub fn read_link(&self, link: &Path) -> Option<PathBuf> {
        let inner = self.inner.read().ok()?;
        inner.symlinks.get(link).cloned()
    }

    /// Every file path, sorted.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut paths: Vec<_> = inner.files.keys().cloned().collect();
        paths.sort();
        paths
    }

    fn read(&self, path: &Path) -> PyhatchResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned(path))
    }

    fn write(&self, path: &Path) -> PyhatchResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned(path))
    }
}

fn poisoned(path: &Path) -> pyhatch_core::error::PyhatchError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

impl MemoryFilesystemInner {
    fn has_parent(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) => parent.as_os_str().is_empty() || self.directories.contains(parent),
            None => true,
        }
    }

    fn occupied(&self, path: &Path) -> bool {
        self.files.contains_key(path)
            || self.directories.contains(path)
            || self.symlinks.contains_key(path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> PyhatchResult<()> {
        let mut inner = self.write(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "Not a directory".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> PyhatchResult<()> {
        let mut inner = self.write(path)?;

        if !inner.has_parent(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn touch(&self, path: &Path) -> PyhatchResult<()> {
        if self.is_file(path) {
            return Ok(());
        }
        self.write_file(path, "")
    }

    fn exists(&self, path: &Path) -> bool {
        self.read(path).map(|inner| inner.occupied(path)).unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read(path)
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.read(path)
            .map(|inner| inner.files.contains_key(path))
            .unwrap_or(false)
    }

    fn is_non_empty_dir(&self, path: &Path) -> PyhatchResult<bool> {
        let inner = self.read(path)?;
        if !inner.directories.contains(path) {
            return Ok(false);
        }
        let is_child = |p: &PathBuf| p.parent() == Some(path);
        Ok(inner.files.keys().any(is_child)
            || inner.directories.iter().any(is_child)
            || inner.symlinks.keys().any(is_child))
    }

    fn list_files(&self, dir: &Path) -> PyhatchResult<Vec<PathBuf>> {
        let inner = self.read(dir)?;
        if !inner.directories.contains(dir) {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }
        let mut files: Vec<_> = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();
        files.sort();
        Ok(files)
    }

    fn symlink(&self, target: &Path, link: &Path) -> PyhatchResult<()> {
        let mut inner = self.write(link)?;

        if inner.occupied(link) {
            return Err(ApplicationError::FilesystemError {
                path: link.to_path_buf(),
                reason: "File exists".into(),
            }
            .into());
        }

        inner.symlinks.insert(link.to_path_buf(), target.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/p/a.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.write_file(Path::new("/p/a.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/p/a.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn touch_creates_but_never_truncates() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).unwrap();

        fs.touch(Path::new("/p/Pipfile")).unwrap();
        assert_eq!(fs.read_file(Path::new("/p/Pipfile")).as_deref(), Some(""));

        fs.write_file(Path::new("/p/Pipfile"), "[packages]").unwrap();
        fs.touch(Path::new("/p/Pipfile")).unwrap();
        assert_eq!(
            fs.read_file(Path::new("/p/Pipfile")).as_deref(),
            Some("[packages]")
        );
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("/p")).unwrap();
        assert!(handle.is_dir(Path::new("/p")));
    }

    #[test]
    fn non_empty_counts_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/dist")).unwrap();

        assert!(fs.is_non_empty_dir(Path::new("/p")).unwrap());
        assert!(!fs.is_non_empty_dir(Path::new("/p/dist")).unwrap());
        assert!(!fs.is_non_empty_dir(Path::new("/missing")).unwrap());
    }

    #[test]
    fn list_files_skips_subdirectories() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p/dist/sub")).unwrap();
        fs.write_file(Path::new("/p/dist/z.whl"), "").unwrap();
        fs.write_file(Path::new("/p/dist/a.tar.gz"), "").unwrap();
        fs.write_file(Path::new("/p/dist/sub/x"), "").unwrap();

        assert_eq!(
            fs.list_files(Path::new("/p/dist")).unwrap(),
            vec![PathBuf::from("/p/dist/a.tar.gz"), PathBuf::from("/p/dist/z.whl")]
        );
    }

    #[test]
    fn symlink_refuses_occupied_path() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/p")).unwrap();
        fs.symlink(Path::new("venv/bin/activate"), Path::new("/p/activate-venv"))
            .unwrap();

        assert!(fs.exists(Path::new("/p/activate-venv")));
        assert!(
            fs.symlink(Path::new("x"), Path::new("/p/activate-venv"))
                .is_err()
        );
        assert_eq!(
            fs.read_link(Path::new("/p/activate-venv")),
            Some(PathBuf::from("venv/bin/activate"))
        );
    }
}
