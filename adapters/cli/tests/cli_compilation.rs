use std::{path::Path, process::Command};

#[test]
fn lane_defence_binary_builds_and_checks() {
    let binary = Path::new(env!("CARGO_BIN_EXE_lane-defence"));
    assert!(
        binary.is_file(),
        "lane-defence binary missing at {}",
        binary.display()
    );

    let status = Command::new(env!("CARGO"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["check", "--quiet", "--bin", "lane-defence"])
        .status()
        .expect("failed to invoke cargo check for the lane-defence binary");

    assert!(
        status.success(),
        "cargo check --bin lane-defence should succeed for the headless runner"
    );
}

#[test]
fn help_lists_the_scripting_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_lane-defence"))
        .arg("--help")
        .output()
        .expect("failed to run lane-defence --help");

    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    for flag in ["--seconds", "--speed", "--seed", "--place", "--auto-collect", "--json"] {
        assert!(help.contains(flag), "--help is missing {flag}:\n{help}");
    }
}
