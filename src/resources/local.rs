//! Resources from a local folder or file.

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ClusteradmError, Result};
use crate::resources::resource::Resource;

/// A local folder or file where the resources for deploying cluster API,
/// infrastructure providers or bootstrap providers are stored.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    path: PathBuf,
}

impl LocalRepository {
    /// Create a repository rooted at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every `.yaml`/`.yml` file below the repository root.
    ///
    /// If the root is a folder, sub-folders are read recursively in file
    /// name order. Resource paths are relative to the parent of the root as
    /// given, so the root's own name is kept as the first path component
    /// even when the root is a symlink.
    ///
    /// # Errors
    ///
    /// Returns `LocalRepository` if the root cannot be walked or any file
    /// cannot be read; no partial result is returned.
    pub fn resources(&self) -> Result<Vec<Resource>> {
        // symlinks are kept so paths stay relative to the folder the user named
        let root = std::path::absolute(&self.path)
            .map(|path| clean(&path))
            .map_err(|e| self.io_error(&self.path, e))?;
        let base = root.parent().unwrap_or(&root).to_path_buf();

        let mut paths = Vec::new();
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&root).to_path_buf();
                self.io_error(&path, e.into())
            })?;

            if entry.file_type().is_dir() || !is_yaml(entry.path()) {
                continue;
            }
            paths.push(entry.into_path());
        }

        paths
            .into_iter()
            .map(|path| {
                tracing::trace!("Reading {}", path.display());
                let content = fs::read(&path).map_err(|e| self.io_error(&path, e))?;
                let relative = path.strip_prefix(&base).unwrap_or(&path);
                Ok(Resource::new(relative.to_string_lossy(), content))
            })
            .collect()
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> ClusteradmError {
        ClusteradmError::LocalRepository {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for LocalRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Drop `.` and resolve `..` lexically, without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yml" || e == "yaml")
        .unwrap_or(false)
}

/// Resolve the resources stored in a local folder or file.
pub fn resolve(path: impl Into<PathBuf>) -> Result<Vec<Resource>> {
    let repository = LocalRepository::new(path);
    tracing::info!(
        "reading resources from {:?} local repository...",
        repository.to_string()
    );
    repository.resources()
}
