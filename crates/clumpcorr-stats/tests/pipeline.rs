use clumpcorr_core::{build_table, Dataset, OutputFormat, EMBEDDED_PROJECT};
use clumpcorr_stats::analyzer::analyze;
use clumpcorr_stats::report::{global_line, project_line, render};

#[test]
fn embedded_history_correlates_over_all_rows() {
    let rows = build_table(&Dataset::embedded());
    let report = analyze(&rows);

    assert_eq!(report.rows, 15);
    assert_eq!(report.projects.len(), 1);
    assert_eq!(report.projects[0].project, EMBEDDED_PROJECT);
    assert_eq!(report.projects[0].points, 15);

    let (rho, p) = report.global.values().expect("embedded data varies");
    assert!((rho - 0.519_791_739_169_333_3).abs() < 1e-9, "rho = {rho}");
    assert!((p - 0.047_031_056_694_532_21).abs() < 1e-6, "p = {p}");
}

#[test]
fn single_project_matches_global_exactly() {
    let rows = build_table(&Dataset::embedded());
    let report = analyze(&rows);
    assert_eq!(report.projects[0].correlation, report.global);
}

#[test]
fn console_lines_match_expected_output() {
    let rows = build_table(&Dataset::embedded());
    let report = analyze(&rows);

    assert_eq!(
        project_line(&report.projects[0]),
        "Project tags: Spearmanr(bicsUntilCommit, total_data_clumps): rho=0.520, p=0.0470"
    );
    assert_eq!(
        global_line(&report.global),
        "Global Spearmanr(bicsUntilCommit, total_data_clumps): rho=0.520, p=0.0470"
    );

    let text = render(&report, OutputFormat::Text).unwrap();
    assert_eq!(text.lines().count(), 2);
}
