//! Persists a rendered `PackArtifact` through an `ArtifactStore`.
pub mod fs;

pub use fs::FsStore;

use std::path::Path;

use tracing::info;

use crate::error::CompileError;
use crate::model::PackArtifact;

/// Where artifacts end up. Paths are relative to the store's root.
pub trait ArtifactStore {
    /// Create a directory and its parents. Must succeed if it already exists.
    fn create_dir_all(&mut self, path: &Path) -> Result<(), CompileError>;

    /// Write the full contents of a file, creating parent directories.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), CompileError>;
}

/// Create the directory tree, then write every file in artifact order.
/// Stops at the first failure; files already written stay in place.
pub fn emit<S: ArtifactStore + ?Sized>(
    artifact: &PackArtifact,
    store: &mut S,
) -> Result<(), CompileError> {
    for dir in &artifact.directories {
        store.create_dir_all(dir)?;
    }

    for file in &artifact.files {
        store.write_file(&file.path, &file.contents)?;
        info!("wrote {}", file.path.display());
    }

    Ok(())
}
