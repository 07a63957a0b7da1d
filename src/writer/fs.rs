//! Filesystem-backed store rooted at the export directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::ArtifactStore;
use crate::error::CompileError;

#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactStore for FsStore {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), CompileError> {
        let full = self.root.join(path);
        fs::create_dir_all(&full).map_err(|source| CompileError::CreateDir { path: full, source })
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), CompileError> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).map_err(|source| CompileError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&full, contents).map_err(|source| CompileError::WriteFile { path: full, source })
    }
}
