use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const DAY: Duration = Duration::from_secs(86_400);

fn zipsweep(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zipsweep"))
        .args(args)
        .output()
        .expect("Could not run zipsweep")
}

fn write_aged(dir: &Path, name: &str, age: Duration) {
    let path = dir.join(name);
    fs::write(&path, name.as_bytes()).expect("Could not write test file");
    File::options().write(true).open(&path).expect("Could not open test file")
        .set_modified(SystemTime::now() - age).expect("Could not set modification time");
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Temp paths should be UTF-8")
}

#[test]
fn archives_and_reports_completion() {
    let source = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    write_aged(source.path(), "a.txt", DAY);
    write_aged(source.path(), "b.txt", DAY * 10);

    let output = zipsweep(&["-d", path_arg(destination.path()), "-s", path_arg(source.path()),
                            "-t", "txt", "-m", "5"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File: b.txt"));
    assert!(stdout.contains("Deleted"));
    assert!(stdout.contains("Done (1 files archived)"));
    assert!(destination.path().join("b.txt.zip").exists());
    assert!(source.path().join("a.txt").exists());
}

#[test]
fn missing_source_exits_with_failure() {
    let parent = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    let missing = parent.path().join("missing");

    let output = zipsweep(&["-d", path_arg(destination.path()), "-s", path_arg(&missing),
                            "-t", "txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot find source folder"));
}

#[test]
fn negative_age_exits_with_failure() {
    let source = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();

    let output = zipsweep(&["-d", path_arg(destination.path()), "-s", path_arg(source.path()),
                            "-t", "txt", "-m", "-1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("-m value must be positive"));
}

#[test]
fn missing_flags_are_rejected() {
    let output = zipsweep(&["-t", "txt"]);
    assert!(!output.status.success());
}
