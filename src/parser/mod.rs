use std::path::Path;

use tracing::debug;

use crate::error::CompileError;
use crate::model::{RawSource, SourceLine};

/// Read the whole `.mc` file and split it into lines.
///
/// Fails before any output exists if the path is missing or unreadable.
pub fn load(path: &Path) -> Result<RawSource, CompileError> {
    let text = std::fs::read_to_string(path).map_err(|source| CompileError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("source loaded, size: {} bytes", text.len());

    Ok(load_from_str(&text))
}

/// Split already-loaded source text. Lines end in `\n`, `\r\n` or a bare `\r`.
pub fn load_from_str(text: &str) -> RawSource {
    let lines: Vec<SourceLine> = split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, raw)| SourceLine {
            number: i + 1,
            raw: raw.to_string(),
            trimmed: trim_line(raw).to_string(),
        })
        .collect();

    debug!("found {} source lines", lines.len());
    RawSource { lines }
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = text
        .split("\r\n")
        .flat_map(|l| l.split(['\n', '\r']))
        .collect();
    // a final terminator does not start another line
    if text.ends_with(['\n', '\r']) {
        lines.pop();
    }
    lines
}

/// Strip leading and trailing control characters and spaces (`<= U+0020`).
/// Other Unicode whitespace is kept.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}
