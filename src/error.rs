use std::io;
use std::path::PathBuf;

/// I/O failures around the pipeline. The translation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("cannot read source file {}", .path.display())]
    ReadSource { path: PathBuf, source: io::Error },

    #[error("cannot create directory {}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot write {}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("failed to read from stdin")]
    Prompt(#[source] io::Error),

    #[error("no {0} given")]
    EmptyPath(&'static str),
}

impl CompileError {
    /// True for failures that happened before anything was written.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CompileError::ReadSource { .. } | CompileError::Prompt(_) | CompileError::EmptyPath(_)
        )
    }
}
