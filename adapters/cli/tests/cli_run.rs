use std::process::Command;

fn lane_defence(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_lane-defence"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run lane-defence binary")
}

#[test]
fn json_report_reflects_requested_placements() {
    let output = lane_defence(&[
        "--seconds",
        "2",
        "--seed",
        "7",
        "--place",
        "0,0,producer",
        "--place",
        "2,1,shooter",
        "--json",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let json_start = stdout.find('{').expect("report should contain JSON");
    let report: serde_json::Value =
        serde_json::from_str(&stdout[json_start..]).expect("report should be valid JSON");

    let defenders = report["snapshot"]["defenders"]
        .as_array()
        .expect("defenders array");
    assert_eq!(defenders.len(), 2);
    assert_eq!(report["snapshot"]["resource"], 350);
    assert_eq!(report["snapshot"]["wave"], 1);
    assert_eq!(report["tally"]["waves"], 1);
}

#[test]
fn malformed_placement_is_rejected() {
    let output = lane_defence(&["--seconds", "1", "--place", "0,0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ROW,COL,KIND"), "unexpected stderr: {stderr}");
}
