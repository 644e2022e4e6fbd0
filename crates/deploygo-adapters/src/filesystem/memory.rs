//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use deploygo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DeployResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying state, so a test can hand one clone to a
/// service and inspect the other afterwards. Failures can be injected per
/// path to exercise error propagation.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    fail_create: HashSet<PathBuf>,
    fail_remove: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (and its parent directories).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_dir_chain(parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Make `create_file` fail for this exact path.
    pub fn fail_create_for(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_create.insert(path.into());
        }
        self
    }

    /// Make `remove_all` fail for this exact path.
    pub fn fail_remove_for(self, path: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_remove.insert(path.into());
        }
        self
    }

    /// Read a file's content as UTF-8 (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let bytes = inner.files.get(path)?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `path` was created as a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

impl MemoryFilesystemInner {
    fn insert_dir_chain(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> DeployResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.files.contains_key(path) {
            return Err(ApplicationError::DirectoryCreateFailed {
                path: path.to_path_buf(),
                reason: "a file exists at this path".into(),
            }
            .into());
        }

        inner.insert_dir_chain(path);
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> DeployResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if inner.fail_remove.contains(path) {
            return Err(ApplicationError::RemovalFailed {
                path: path.to_path_buf(),
                reason: "injected removal failure".into(),
            }
            .into());
        }
        if !inner.files.contains_key(path) && !inner.directories.contains(path) {
            return Err(ApplicationError::RemovalFailed {
                path: path.to_path_buf(),
                reason: "no such file or directory".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn create_file(&self, path: &Path) -> DeployResult<Box<dyn Write>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let create_failed = |reason: &str| ApplicationError::FileCreateFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        if inner.fail_create.contains(path) {
            return Err(create_failed("injected create failure").into());
        }
        let parent_missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        if parent_missing {
            return Err(create_failed("parent directory does not exist").into());
        }
        if inner.directories.contains(path) {
            return Err(create_failed("a directory exists at this path").into());
        }

        inner.files.insert(path.to_path_buf(), Vec::new());
        Ok(Box::new(MemoryFile {
            path: path.to_path_buf(),
            inner: Arc::clone(&self.inner),
        }))
    }
}

/// Write handle that appends straight into the shared file map.
struct MemoryFile {
    path: PathBuf,
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

impl Write for MemoryFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))?;
        let file = inner
            .files
            .get_mut(&self.path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file was removed"))?;
        file.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_file_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_file(Path::new("demo/main.go")).is_err());

        fs.create_dir_all(Path::new("demo")).unwrap();
        let mut file = fs.create_file(Path::new("demo/main.go")).unwrap();
        file.write_all(b"package main").unwrap();
        drop(file);

        assert_eq!(
            fs.read_file(Path::new("demo/main.go")).as_deref(),
            Some("package main")
        );
    }

    #[test]
    fn create_file_truncates_existing_content() {
        let fs = MemoryFilesystem::new().with_file("demo/app.py", "old");
        let mut file = fs.create_file(Path::new("demo/app.py")).unwrap();
        file.write_all(b"new").unwrap();
        drop(file);

        assert_eq!(fs.read_file(Path::new("demo/app.py")).as_deref(), Some("new"));
    }

    #[test]
    fn remove_all_drops_everything_below() {
        let fs = MemoryFilesystem::new()
            .with_file("demo/a.txt", "a")
            .with_file("demo/nested/b.txt", "b")
            .with_file("other/c.txt", "c");

        fs.remove_all(Path::new("demo")).unwrap();

        assert!(!fs.exists(Path::new("demo")));
        assert!(!fs.exists(Path::new("demo/nested")));
        assert_eq!(fs.list_files(), vec![PathBuf::from("other/c.txt")]);
    }

    #[test]
    fn remove_all_of_missing_path_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_all(Path::new("ghost")).is_err());
    }

    #[test]
    fn injected_failures_fire() {
        let fs = MemoryFilesystem::new()
            .with_file("demo/keep.txt", "k")
            .fail_create_for("demo/Dockerfile")
            .fail_remove_for("demo");

        assert!(fs.create_file(Path::new("demo/Dockerfile")).is_err());
        assert!(fs.remove_all(Path::new("demo")).is_err());
        assert!(fs.exists(Path::new("demo/keep.txt")));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("a/b")).unwrap();

        assert!(other.is_dir(Path::new("a")));
        assert!(other.is_dir(Path::new("a/b")));
    }
}
