use clap::{ArgAction, Parser};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::CompileError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile a .mc script into a datapack")]
pub struct Cli {
    /// Input .mc source file (prompted for when omitted)
    pub input: Option<PathBuf>,
    /// Datapack export directory (prompted for when omitted)
    pub output: Option<PathBuf>,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default filter directive for the log subscriber.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Input and output paths, asking on stdin for whichever is missing.
    pub fn resolve_paths(&self) -> Result<(PathBuf, PathBuf), CompileError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        self.resolve_paths_with(&mut input, &mut out)
    }

    pub fn resolve_paths_with<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<(PathBuf, PathBuf), CompileError> {
        let source = match &self.input {
            Some(p) => p.clone(),
            None => prompt(input, out, "Enter the path to the .mc file: ", "source path")?,
        };
        let target = match &self.output {
            Some(p) => p.clone(),
            None => prompt(
                input,
                out,
                "Enter the export path for the Minecraft datapack: ",
                "export path",
            )?,
        };
        Ok((source, target))
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    what: &'static str,
) -> Result<PathBuf, CompileError> {
    write!(out, "{question}").map_err(CompileError::Prompt)?;
    out.flush().map_err(CompileError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(CompileError::Prompt)?;
    let answer = line.trim();
    if answer.is_empty() {
        return Err(CompileError::EmptyPath(what));
    }
    Ok(PathBuf::from(answer))
}
