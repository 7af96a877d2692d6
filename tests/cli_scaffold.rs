use std::process::Command;

fn distzip_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_distzip"))
}

#[test]
fn version_flag_exits_0() {
    let output = distzip_cmd().arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("distzip "));
}

#[test]
fn help_flag_exits_0() {
    let output = distzip_cmd().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("build"));
}

#[test]
fn build_help_lists_exclusion_flags() {
    let output = distzip_cmd().args(["build", "--help"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("--exclude-ext"));
    assert!(stdout.contains("--plan"));
}

#[test]
fn no_command_exits_2() {
    let output = distzip_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn build_without_entries_exits_2() {
    let output = distzip_cmd().arg("build").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nothing to package"));
}

#[test]
fn nonexistent_root_exits_2() {
    let output = distzip_cmd()
        .args(["build", "src", "--root", "/nonexistent-root"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a directory"));
}
