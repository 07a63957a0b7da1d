use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

// compiled-in identifiers that every generated artifact refers to
pub const NAMESPACE: &str = "mynamespace";
pub const PACK_FORMAT: u32 = 10;
pub const PACK_DESCRIPTION: &str = "Custom .mc Language Datapack";

/// Body written to `load.mcfunction` whenever the source declares `load`.
pub const LOAD_OVERRIDE_COMMAND: &str = "say \"Loading datapack...\"";

/// Function tags that are always emitted, each pointing at the namespaced
/// function of the same name.
pub const TAGGED_FUNCTIONS: &[&str] = &["load", "update"];

/// One line of the input file, exactly as read plus its trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number, only used for diagnostics.
    pub number: usize,
    pub raw: String,
    pub trimmed: String,
}

/// Immediately-after-load representation of a `.mc` file.
#[derive(Debug, Clone, Default)]
pub struct RawSource {
    pub lines: Vec<SourceLine>,
}

/// Finalized function name → ordered command lines.
///
/// Names are case-sensitive. Re-opening a name replaces the earlier body.
pub type FunctionMap = BTreeMap<String, Vec<String>>;

/// A single rendered file, path relative to the pack root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Everything that makes up one datapack, ready to be handed to a store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackArtifact {
    /// Directories that must exist even when no file lands in them.
    pub directories: Vec<PathBuf>,
    pub files: Vec<ArtifactFile>,
}

impl PackArtifact {
    pub fn file(&self, path: impl Into<PathBuf>) -> Option<&ArtifactFile> {
        let path = path.into();
        self.files.iter().find(|f| f.path == path)
    }
}

/// Fully processed output handed to `writer`.
#[derive(Debug, Clone)]
pub struct ProcessedPack {
    pub functions: FunctionMap,
    pub artifact: PackArtifact,
}

// ─────────────────────────────────────────────────────
// JSON shapes
// ─────────────────────────────────────────────────────

/// `data/<ns>/tags/functions/<tag>.json`
#[derive(Debug, Serialize)]
pub struct TagManifest {
    pub values: Vec<String>,
}

/// `pack.mcmeta`
#[derive(Debug, Serialize)]
pub struct PackMeta {
    pub pack: PackSection,
}

#[derive(Debug, Serialize)]
pub struct PackSection {
    pub pack_format: u32,
    pub description: String,
}
