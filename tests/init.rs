use std::process::Command;

#[test]
fn init_creates_valid_toml() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_clumpcorr"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "clumpcorr init failed: {}", String::from_utf8_lossy(&output.stderr));

    let config_path = dir.path().join(".clumpcorr.toml");
    assert!(config_path.exists(), ".clumpcorr.toml should exist");

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[report]"));
    assert!(content.contains("[plot]"));

    // The template must parse to the defaults
    let _raw: toml::Value = toml::from_str(&content).unwrap();
    let config = clumpcorr_core::ClumpConfig::from_toml(&content).unwrap();
    assert_eq!(config.report.preview_rows, 5);
    assert_eq!(config.plot.width, 1200);
}

#[test]
fn init_refuses_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".clumpcorr.toml"), "# existing").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_clumpcorr"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let content = std::fs::read_to_string(dir.path().join(".clumpcorr.toml")).unwrap();
    assert_eq!(content, "# existing");
}
