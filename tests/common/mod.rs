use assert_cmd::Command;
use std::path::Path;

pub fn sideway_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sideway").unwrap();
    cmd.env_remove("SIDEWAY_ROOT");
    cmd.env_remove("SIDEWAY_LOG");
    cmd
}

/// Initialize a notepad in `dir` with the file backend
#[allow(dead_code)]
pub fn init_notepad(dir: &Path) {
    sideway_cmd().arg("init").arg(dir).assert().success();
}

/// Create a note through the CLI and return its id
#[allow(dead_code)]
pub fn new_note(dir: &Path, title: &str, content: &str) -> String {
    let output = sideway_cmd()
        .current_dir(dir)
        .args(["new", "--title", title, "--content", content])
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Created note ")
        .expect("unexpected output from new")
        .to_string()
}
