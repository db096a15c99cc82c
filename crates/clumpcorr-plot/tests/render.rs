use clumpcorr_core::{Dataset, PlotConfig, Project, ReleaseRecord};
use clumpcorr_plot::{chart_file_name, render_all, render_project};

fn config_in(dir: &std::path::Path) -> PlotConfig {
    PlotConfig {
        width: 640,
        height: 360,
        output_dir: dir.to_path_buf(),
    }
}

#[test]
fn embedded_dataset_writes_exactly_one_chart() {
    let dir = tempfile::tempdir().unwrap();
    let written = render_all(&Dataset::embedded(), &config_in(dir.path())).unwrap();

    assert_eq!(written.len(), 1);
    assert_eq!(written[0], dir.path().join("tags_metrics_over_time.png"));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let bytes = std::fs::read(&written[0]).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"), "not a PNG file");
}

#[test]
fn existing_chart_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(chart_file_name("tags"));
    std::fs::write(&target, b"stale").unwrap();

    render_all(&Dataset::embedded(), &config_in(dir.path())).unwrap();

    let bytes = std::fs::read(&target).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn missing_output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("charts").join("run-1");
    let written = render_all(&Dataset::embedded(), &config_in(&nested)).unwrap();
    assert!(written[0].starts_with(&nested));
    assert!(written[0].exists());
}

#[test]
fn single_release_project_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let project = Project::new("solo").with_record(ReleaseRecord {
        commit_hash: "0000000000000000000000000000000000000000".into(),
        tag: "v0.1.0".into(),
        timestamp: 1_600_000_000,
        field_field_data_clumps: 2,
        parameter_parameter_data_clumps: 5,
        parameter_field_data_clumps: 1,
        bics_until_commit: 12,
    });

    let path = render_project(&project, &config_in(dir.path()))
        .unwrap()
        .expect("one release is enough to draw");
    assert_eq!(path.file_name().unwrap(), "solo_metrics_over_time.png");
}
