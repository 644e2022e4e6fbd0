//! Local filesystem adapter using std::fs.

use std::fs::{self, DirBuilder, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use deploygo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DeployResult,
};

/// Production filesystem implementation using `std::fs`.
///
/// Directories are created with mode `0o755` on unix; files get the
/// process default (normally `0o644` after umask).
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
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as occupied
        path.symlink_metadata().is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> DeployResult<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }

        builder.create(path).map_err(|e| {
            ApplicationError::DirectoryCreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn remove_all(&self, path: &Path) -> DeployResult<()> {
        let removal_failed = |e: std::io::Error| ApplicationError::RemovalFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let metadata = path.symlink_metadata().map_err(removal_failed)?;
        if metadata.is_dir() {
            debug!(path = %path.display(), "Removing directory tree");
            fs::remove_dir_all(path).map_err(removal_failed)?;
        } else {
            debug!(path = %path.display(), "Removing file");
            fs::remove_file(path).map_err(removal_failed)?;
        }
        Ok(())
    }

    fn create_file(&self, path: &Path) -> DeployResult<Box<dyn Write>> {
        let file = File::create(path).map_err(|e| ApplicationError::FileCreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
