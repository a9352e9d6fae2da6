use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn pagediff(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pagediff"));
    command.current_dir(dir.path()).env("NO_COLOR", "1");
    command
}

#[test]
fn test_diff_command_prints_markup() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("post.txt"), "The cat sat. The dog ran.")?;
    fs::write(dir.path().join("page.txt"), "The cat sat.")?;

    let output = pagediff(&dir)
        .args(["diff", "post.txt", "page.txt", "--format", "markup"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "The cat sat. {+The dog ran.+}\n"
    );
    Ok(())
}

#[test]
fn test_diff_reads_new_side_from_stdin() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("page.txt"), "Hello world! Goodbye.")?;

    let mut child = pagediff(&dir)
        .args(["diff", "-", "page.txt", "--format", "markup"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"Hello world!")?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Hello world![-Goodbye.-]\n"
    );
    Ok(())
}

#[test]
fn test_diff_rejects_two_stdin_sides() -> Result<()> {
    let dir = TempDir::new()?;
    let output = pagediff(&dir).args(["diff", "-", "-"]).output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("stdin"));
    Ok(())
}

#[test]
fn test_stats_json() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("new.txt"), "Keep. Add one. Add two.")?;
    fs::write(dir.path().join("old.txt"), "Keep. Drop.")?;

    let output = pagediff(&dir)
        .args(["stats", "new.txt", "old.txt", "--json"])
        .output()?;

    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(stats["added"], 2);
    assert_eq!(stats["removed"], 1);
    assert_eq!(stats["unchanged"], 1);
    Ok(())
}

#[test]
fn test_init_and_config_roundtrip() -> Result<()> {
    let dir = TempDir::new()?;

    let output = pagediff(&dir).arg("init").output()?;
    assert!(output.status.success());
    assert!(dir.path().join(".pagediff/config.toml").exists());

    let output = pagediff(&dir)
        .args(["config", "set", "diff.granularity", "word"])
        .output()?;
    assert!(output.status.success());

    let output = pagediff(&dir)
        .args(["config", "get", "diff.granularity"])
        .output()?;
    assert!(String::from_utf8_lossy(&output.stdout).contains("word"));

    let output = pagediff(&dir)
        .args(["config", "set", "diff.granularity", "paragraph"])
        .output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_config_set_requires_init() -> Result<()> {
    let dir = TempDir::new()?;
    let output = pagediff(&dir)
        .args(["config", "set", "render.color", "false"])
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pagediff init"));
    Ok(())
}

#[test]
fn test_notebook_command_summarizes_pages() -> Result<()> {
    let dir = TempDir::new()?;
    let new_dir = dir.path().join("new");
    let old_dir = dir.path().join("old");
    fs::create_dir_all(&new_dir)?;
    fs::create_dir_all(&old_dir)?;
    fs::write(new_dir.join("kept.txt"), "Same page.")?;
    fs::write(old_dir.join("kept.txt"), "Same page.")?;
    fs::write(new_dir.join("edited.txt"), "First. Second.")?;
    fs::write(old_dir.join("edited.txt"), "First.")?;
    fs::write(new_dir.join("fresh.md"), "Brand new.")?;

    let output = pagediff(&dir)
        .args(["notebook", "new", "old", "--verbose"])
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 added, 0 removed, 1 modified, 1 unchanged"));
    assert!(stdout.contains("edited.txt"));
    Ok(())
}
