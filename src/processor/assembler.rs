//! Renders finalized functions into the datapack file layout.
//!
//! Layout, relative to the pack root:
//!
//!   pack.mcmeta
//!   data/<ns>/functions/<name>.mcfunction
//!   data/<ns>/tags/functions/{load,update}.json

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use crate::model::{
    ArtifactFile, FunctionMap, LOAD_OVERRIDE_COMMAND, NAMESPACE, PACK_DESCRIPTION, PACK_FORMAT,
    PackArtifact, PackMeta, PackSection, TAGGED_FUNCTIONS, TagManifest,
};

pub fn functions_dir() -> PathBuf {
    PathBuf::from("data").join(NAMESPACE).join("functions")
}

pub fn function_tags_dir() -> PathBuf {
    PathBuf::from("data")
        .join(NAMESPACE)
        .join("tags")
        .join("functions")
}

/// Build the complete artifact set. Never fails.
pub fn render(functions: &FunctionMap) -> PackArtifact {
    let mut files = Vec::<ArtifactFile>::with_capacity(functions.len() + 3);

    for (name, commands) in functions {
        let contents = if name == "load" {
            warn!(
                "function `load` body ({} commands) replaced by the load message",
                commands.len()
            );
            render_lines(&[LOAD_OVERRIDE_COMMAND])
        } else {
            render_lines(commands)
        };

        files.push(ArtifactFile {
            path: functions_dir().join(format!("{name}.mcfunction")),
            contents,
        });
    }

    for tag in TAGGED_FUNCTIONS {
        if !functions.contains_key(*tag) {
            warn!("tag `{tag}` references {NAMESPACE}:{tag}, which was never declared");
        }
        let manifest = TagManifest {
            values: vec![format!("{NAMESPACE}:{tag}")],
        };
        files.push(ArtifactFile {
            path: function_tags_dir().join(format!("{tag}.json")),
            contents: render_json(&manifest),
        });
    }

    let meta = PackMeta {
        pack: PackSection {
            pack_format: PACK_FORMAT,
            description: PACK_DESCRIPTION.to_string(),
        },
    };
    files.push(ArtifactFile {
        path: PathBuf::from("pack.mcmeta"),
        contents: render_json(&meta),
    });

    info!("rendered {} files for {} functions", files.len(), functions.len());

    PackArtifact {
        directories: vec![functions_dir(), function_tags_dir()],
        files,
    }
}

/// One command per line, each terminated by `\n`.
fn render_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line.as_ref());
        out.push('\n');
        out
    })
}

fn render_json<T: Serialize>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value).expect("manifest structs serialize");
    out.push('\n');
    out
}
