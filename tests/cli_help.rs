use std::process::Command;

#[test]
fn test_help_lists_every_subcommand() {
    let bin = env!("CARGO_BIN_EXE_mm");

    let output = Command::new(bin).arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["login", "submit", "versions", "switch", "run", "engine", "update"] {
        assert!(
            stdout.contains(command),
            "help output should list '{}'; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_engine_help_documents_output_mapping() {
    let bin = env!("CARGO_BIN_EXE_mm");

    let output = Command::new(bin).args(["engine", "--help"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--bot-a"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("SRC[,SRC...]=PATH"));
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_mm");

    let output = Command::new(bin).arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("mm "));
}
