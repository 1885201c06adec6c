use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chordforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_cli_paths_and_accords_take_no_config_flags() {
    for args in [
        vec!["paths", "--accord-ms", "10"],
        vec!["accords", "--max-one-hand-size", "3", "0", "1"],
    ] {
        let output = run(&args);
        assert!(!output.status.success(), "{:?} should be rejected", args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("unexpected argument"), "stderr: {}", stderr);
    }

    let help = run(&["accords", "--help"]);
    let stdout = String::from_utf8_lossy(&help.stdout);
    assert!(!stdout.contains("--accord-ms"));
    assert!(!stdout.contains("--max-one-hand-size"));
}

#[test]
fn test_cli_accords_and_paths_run() {
    let output = run(&["accords", "0", "1", "5"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("accord groupings"));

    let output = run(&["paths", "--builtin", "two_key"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("LAYER PATHS"));
}

#[test]
fn test_cli_plan_accepts_cost_flags() {
    let output = run(&["plan", "--accord-ms", "100", ". a"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("TYPING PLAN"));
}
