use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mcpack::compile_into;
use mcpack::compile_to_datapack;
use mcpack::error::CompileError;
use mcpack::writer::ArtifactStore;

const SCRIPT: &str = r#"
var outside = 1

function load(=> void)
    var ticks = 0
    say "this body is replaced"
end

function greet(player => void)
    say "Hello there"
    var counter = counter + 1
    execute (=>{as Player.all at current}, {give @s stick})
    this line is passed through
    garbage!
function tick(=> void)
    tp @s ~ ~1 ~
"#;

fn write_script(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("script.mc");
    fs::write(&path, contents).unwrap();
    path
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("reading {rel}: {e}"))
}

#[test]
fn compiles_full_pack() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = write_script(dir.path(), SCRIPT);
    let out = dir.path().join("pack");

    let processed = compile_to_datapack(&source, &out).expect("compile ok");
    let names: Vec<_> = processed.functions.keys().cloned().collect();
    assert_eq!(names, vec!["greet", "load", "tick"]);

    assert_eq!(
        read(&out, "data/mynamespace/functions/greet.mcfunction"),
        "say Hello there\n\
         scoreboard objectives add counter dummy\n\
         execute as @a run give @s stick\n\
         this line is passed through\n"
    );
    assert_eq!(
        read(&out, "data/mynamespace/functions/tick.mcfunction"),
        "tp @s ~ ~1 ~\n"
    );
    assert_eq!(
        read(&out, "data/mynamespace/functions/load.mcfunction"),
        "say \"Loading datapack...\"\n"
    );

    let load_tag: serde_json::Value =
        serde_json::from_str(&read(&out, "data/mynamespace/tags/functions/load.json")).unwrap();
    assert_eq!(load_tag["values"][0], "mynamespace:load");

    let update_tag: serde_json::Value =
        serde_json::from_str(&read(&out, "data/mynamespace/tags/functions/update.json")).unwrap();
    assert_eq!(update_tag["values"][0], "mynamespace:update");

    let meta: serde_json::Value = serde_json::from_str(&read(&out, "pack.mcmeta")).unwrap();
    assert_eq!(meta["pack"]["pack_format"], 10);
    assert_eq!(meta["pack"]["description"], "Custom .mc Language Datapack");
}

#[test]
fn empty_input_still_creates_layout() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = write_script(dir.path(), "");
    let out = dir.path().join("pack");

    let processed = compile_to_datapack(&source, &out).expect("compile ok");
    assert!(processed.functions.is_empty());

    assert!(out.join("data/mynamespace/functions").is_dir());
    assert!(out.join("pack.mcmeta").is_file());
    assert!(out.join("data/mynamespace/tags/functions/load.json").is_file());
    assert!(out.join("data/mynamespace/tags/functions/update.json").is_file());
    assert_eq!(fs::read_dir(out.join("data/mynamespace/functions")).unwrap().count(), 0);
}

#[test]
fn say_only_function_round_trips() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let messages = ["first", "second one", "  padded  ", "third"];
    let body: String = messages.iter().map(|m| format!("say \"{m}\"\n")).collect();
    let source = write_script(dir.path(), &format!("function chat(=> void)\n{body}end\n"));
    let out = dir.path().join("pack");

    compile_to_datapack(&source, &out).expect("compile ok");

    let written = read(&out, "data/mynamespace/functions/chat.mcfunction");
    let lines: Vec<&str> = written.lines().collect();
    let expected: Vec<String> = messages.iter().map(|m| format!("say {m}")).collect();
    assert_eq!(lines, expected);
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out = dir.path().join("pack");

    let err = compile_to_datapack(&dir.path().join("nope.mc"), &out).unwrap_err();
    assert!(matches!(err, CompileError::ReadSource { .. }));
    assert!(!out.exists());
}

/// Keeps everything in memory and can be told to reject one path.
#[derive(Default)]
struct MemoryStore {
    dirs: Vec<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    reject: Option<PathBuf>,
}

impl ArtifactStore for MemoryStore {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), CompileError> {
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), CompileError> {
        if self.reject.as_deref() == Some(path) {
            return Err(CompileError::WriteFile {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[test]
fn writes_through_custom_store() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = write_script(dir.path(), "function a(=> void)\nsay \"1\"\nfunction a(=> void)\nsay \"2\"\n");
    let mut store = MemoryStore::default();

    compile_into(&source, &mut store).expect("compile ok");

    assert_eq!(store.dirs.len(), 2);
    assert_eq!(store.files.len(), 4);
    assert_eq!(
        store.files[Path::new("data/mynamespace/functions/a.mcfunction")],
        "say 2\n"
    );
}

#[test]
fn output_failure_is_surfaced() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let source = write_script(dir.path(), "function f(=> void)\nend\n");
    let mut store = MemoryStore {
        reject: Some(PathBuf::from("pack.mcmeta")),
        ..Default::default()
    };

    let err = compile_into(&source, &mut store).unwrap_err();
    assert!(matches!(err, CompileError::WriteFile { .. }));
    assert!(!err.is_input_error());
    assert!(err.to_string().contains("pack.mcmeta"));
}
