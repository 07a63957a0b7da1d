//! Scope tracker that turns classified lines into finalized function bodies.

use tracing::{debug, info, warn};

use super::ast::{Statement, ToCommand};
use super::classifier::classify;
use crate::model::{FunctionMap, RawSource};

/// Classify and parse every line of a loaded source file.
pub fn parse_source(source: &RawSource) -> FunctionMap {
    let mut parser = BlockParser::new();
    for line in &source.lines {
        let stmt = classify(&line.trimmed);
        debug!("line {}: {}", line.number, stmt.kind());
        if stmt == Statement::Unmatched && parser.in_block() && !line.trimmed.is_empty() {
            warn!("line {}: dropping unrecognised line `{}`", line.number, line.trimmed);
        }
        parser.feed(stmt);
    }
    parser.finish()
}

/// At most one block is open at a time.
#[derive(Debug, Default)]
enum Scope {
    #[default]
    Idle,
    InBlock {
        name: String,
        commands: Vec<String>,
    },
}

#[derive(Debug, Default)]
pub struct BlockParser {
    scope: Scope,
    functions: FunctionMap,
}

impl BlockParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_block(&self) -> bool {
        matches!(self.scope, Scope::InBlock { .. })
    }

    pub fn feed(&mut self, stmt: Statement) {
        match stmt {
            // a new header implicitly closes whatever is open
            Statement::FunctionStart { name } => {
                self.close();
                debug!("opening function `{name}`");
                self.scope = Scope::InBlock {
                    name,
                    commands: Vec::new(),
                };
            }
            Statement::End => self.close(),
            stmt => {
                // outside any block everything else is ignored
                if let Scope::InBlock { commands, .. } = &mut self.scope {
                    if let Some(cmd) = stmt.to_command() {
                        commands.push(cmd);
                    }
                }
            }
        }
    }

    /// Close a block left open at end of input and hand back the map.
    pub fn finish(mut self) -> FunctionMap {
        self.close();
        self.functions
    }

    fn close(&mut self) {
        if let Scope::InBlock { name, commands } = std::mem::take(&mut self.scope) {
            info!("function `{}` has {} commands", name, commands.len());
            // plain overwrite, the later body wins
            if self.functions.insert(name.clone(), commands).is_some() {
                warn!("function `{name}` declared more than once, keeping the last body");
            }
        }
    }
}
