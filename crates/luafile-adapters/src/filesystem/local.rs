//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use luafile_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::DirectorySnapshot,
    error::{LuafileError, LuafileResult},
};
use tracing::{debug, warn};

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
    fn is_dir(&self, path: &Path) -> LuafileResult<bool> {
        fs::metadata(path)
            .map(|meta| meta.is_dir())
            .map_err(|e| map_io_error(path, e, "stat"))
    }

    fn list_entries(&self, dir: &Path) -> LuafileResult<DirectorySnapshot> {
        let entries = fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))?;

        let mut snapshot = DirectorySnapshot::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            // Non-UTF-8 names can never equal a generated name
            if let Ok(name) = entry.file_name().into_string() {
                snapshot.insert(name);
            }
        }

        debug!(dir = %dir.display(), entries = snapshot.len(), "Directory listed");
        Ok(snapshot)
    }

    fn write_new_file(&self, path: &Path, content: &str) -> LuafileResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    LuafileError::from(ApplicationError::FileExists {
                        path: path.to_path_buf(),
                    })
                } else {
                    map_io_error(path, e, "create file")
                }
            })?;

        let written = file
            .write_all(content.as_bytes())
            .and_then(|()| file.sync_all());
        drop(file);

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %cleanup, "Failed to remove partial file");
            }
            return Err(map_io_error(path, e, "write file"));
        }

        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> LuafileError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
