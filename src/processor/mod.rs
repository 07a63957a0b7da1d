//! The functional core: classify → track scope → render.
//!
//! Nothing in here touches the filesystem or fails.
pub mod assembler;
pub mod ast;
pub mod block_parser;
pub mod classifier;
pub mod conditions;

pub use assembler::render;
pub use block_parser::parse_source;
pub use classifier::classify;
pub use conditions::rewrite_conditions;

use crate::model::{ProcessedPack, RawSource};

/// Runs every processing pass and returns a read-only structure for writers.
pub fn run(raw: &RawSource) -> ProcessedPack {
    let functions = block_parser::parse_source(raw);
    let artifact = assembler::render(&functions);

    ProcessedPack {
        functions,
        artifact,
    }
}
