use std::process::Command;

fn run(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_clumpcorr"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn correlate_prints_overview_and_results() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["correlate"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--- Data overview ---"));
    assert!(stdout.contains("--- Correlation analysis ---"));
    assert!(stdout.contains(
        "Project tags: Spearmanr(bicsUntilCommit, total_data_clumps): rho=0.520, p=0.0470"
    ));
    assert!(stdout.contains(
        "Global Spearmanr(bicsUntilCommit, total_data_clumps): rho=0.520, p=0.0470"
    ));
    // Five preview rows, the first and fifth release among them
    assert!(stdout.contains("v1.7.0"));
    assert!(stdout.contains("v1.8.2"));
    assert!(!stdout.contains("v1.8.3"));

    // No charts for the correlate subcommand
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn correlate_json_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["correlate", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rows"], 15);
    assert_eq!(value["projects"][0]["project"], "tags");
    assert_eq!(value["global"]["outcome"], "computed");
}

#[test]
fn preview_rows_come_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".clumpcorr.toml"),
        "[report]\npreview_rows = 2\n",
    )
    .unwrap();

    let output = run(dir.path(), &["correlate"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("v1.7.1"));
    assert!(!stdout.contains("v1.8.0"));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["correlate", "--config", "nope.toml"]);
    assert!(!output.status.success());
}

#[test]
fn full_run_writes_one_chart() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &[]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("--- Plots saved ---"));

    let files: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files, vec!["tags_metrics_over_time.png".to_string()]);
}
