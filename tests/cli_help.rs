use std::process::Command;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pk3deploy"))
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

#[test]
fn help_lists_every_command() {
    let (ok, stdout) = run(&["--help"]);
    assert!(ok);
    for command in ["deploy", "build", "status", "restart"] {
        assert!(
            stdout.contains(command),
            "help should list '{}':\n{}",
            command,
            stdout
        );
    }
    assert!(stdout.contains("--build-dir"));
}

#[test]
fn version_prints_package_version() {
    let (ok, stdout) = run(&["--version"]);
    assert!(ok);
    assert_eq!(
        stdout.trim(),
        format!("pk3deploy {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn unknown_command_is_rejected() {
    let (ok, _) = run(&["publish"]);
    assert!(!ok);
}
