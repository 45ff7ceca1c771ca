//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use luafile_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirectorySnapshot,
    error::{LuafileError, LuafileResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give another to
/// the service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Add a file (and its parent directories).
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        let this = match path.parent() {
            Some(parent) => self.with_dir(parent),
            None => self,
        };
        if let Ok(mut inner) = this.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        this
    }

    /// Make writes into `dir` fail.
    pub fn with_read_only(self, dir: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> LuafileResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| lock_poisoned())?;

        if inner.directories.contains(path) {
            Ok(true)
        } else if inner.files.contains_key(path) {
            Ok(false)
        } else {
            Err(not_found(path))
        }
    }

    fn list_entries(&self, dir: &Path) -> LuafileResult<DirectorySnapshot> {
        let inner = self
            .inner
            .read()
            .map_err(|_| lock_poisoned())?;

        if !inner.directories.contains(dir) {
            return Err(not_found(dir));
        }

        let files = inner.files.keys();
        let dirs = inner.directories.iter();
        Ok(files
            .chain(dirs)
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .filter_map(|n| n.to_str())
            .collect())
    }

    fn write_new_file(&self, path: &Path, content: &str) -> LuafileResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_poisoned())?;

        let parent = path.parent().unwrap_or(Path::new(""));
        if !inner.directories.contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }
        if inner.read_only.contains(parent) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }
        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn lock_poisoned() -> LuafileError {
    LuafileError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn not_found(path: &Path) -> LuafileError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
    .into()
}
