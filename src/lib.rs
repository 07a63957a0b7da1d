pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::error::CompileError;
use crate::model::ProcessedPack;
use crate::writer::{ArtifactStore, FsStore};

pub fn run(args: cli::Cli) -> anyhow::Result<()> {
    let (source, target) = args.resolve_paths().context("Resolving input/output paths")?;

    compile_to_datapack(&source, &target)
        .with_context(|| format!("Compiling {}", source.display()))?;

    println!("Datapack created successfully at: {}", target.display());
    Ok(())
}

/// Read, translate and write a datapack into `target`.
pub fn compile_to_datapack(source: &Path, target: &Path) -> Result<ProcessedPack, CompileError> {
    let mut store = FsStore::new(target);
    compile_into(source, &mut store)
}

/// Same as [`compile_to_datapack`] with any storage backend.
pub fn compile_into<S: ArtifactStore + ?Sized>(
    source: &Path,
    store: &mut S,
) -> Result<ProcessedPack, CompileError> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let raw = parser::load(source)?;

    // 2. ── Process ────────────────────────────────────────────────────
    let processed = processor::run(&raw);
    info!(
        "{} functions compiled from {} lines",
        processed.functions.len(),
        raw.lines.len()
    );

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::emit(&processed.artifact, store)?;

    Ok(processed)
}
