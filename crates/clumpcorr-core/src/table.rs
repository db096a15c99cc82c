//! Flattening of the per-project dataset into one row-oriented table.

use std::fmt::Write;

use serde::Serialize;

use crate::types::{Dataset, ReleaseRecord};

/// One release record tagged with the project it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Label of the owning project.
    pub project: String,
    /// The release metrics.
    #[serde(flatten)]
    pub record: ReleaseRecord,
}

/// Flatten `dataset` into rows: projects in dataset order, records in
/// insertion order.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::{build_table, Dataset};
///
/// let rows = build_table(&Dataset::embedded());
/// assert_eq!(rows.len(), 15);
/// assert!(rows.iter().all(|r| r.project == "tags"));
/// ```
pub fn build_table(dataset: &Dataset) -> Vec<TableRow> {
    dataset
        .projects()
        .iter()
        .flat_map(|project| {
            project.records.iter().map(|record| TableRow {
                project: project.name.clone(),
                record: record.clone(),
            })
        })
        .collect()
}

const HEADERS: [&str; 8] = [
    "project",
    "tag",
    "commitHash",
    "timestamp",
    "fieldField",
    "paramParam",
    "paramField",
    "bicsUntilCommit",
];

/// Render the first `n` rows as a fixed-width text table.
///
/// Commit hashes are shortened to 8 characters. Returns an empty string when
/// there are no rows or `n` is zero.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::{build_table, preview, Dataset};
///
/// let rows = build_table(&Dataset::embedded());
/// let text = preview(&rows, 2);
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.contains("v1.7.1"));
/// ```
pub fn preview(rows: &[TableRow], n: usize) -> String {
    let shown = &rows[..rows.len().min(n)];
    if shown.is_empty() {
        return String::new();
    }

    let cells: Vec<[String; 8]> = shown
        .iter()
        .map(|row| {
            let r = &row.record;
            [
                row.project.clone(),
                r.tag.clone(),
                r.commit_hash.chars().take(8).collect(),
                r.timestamp.to_string(),
                r.field_field_data_clumps.to_string(),
                r.parameter_parameter_data_clumps.to_string(),
                r.parameter_field_data_clumps.to_string(),
                r.bics_until_commit.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 8] = HEADERS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:>4}  {}", "", join_padded(&HEADERS, &widths));
    for (i, line) in cells.iter().enumerate() {
        let _ = writeln!(out, "{i:>4}  {}", join_padded(line, &widths));
    }
    out
}

fn join_padded<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Project;

    fn record(tag: &str) -> ReleaseRecord {
        ReleaseRecord {
            commit_hash: "0123456789abcdef".into(),
            tag: tag.into(),
            timestamp: 1_700_000_000,
            field_field_data_clumps: 1,
            parameter_parameter_data_clumps: 2,
            parameter_field_data_clumps: 3,
            bics_until_commit: 10,
        }
    }

    #[test]
    fn rows_follow_project_then_record_order() {
        let dataset = Dataset::from_projects([
            Project::new("b").with_record(record("v2")).with_record(record("v1")),
            Project::new("a").with_record(record("v9")),
        ]);
        let rows = build_table(&dataset);
        let labels: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.project.as_str(), r.record.tag.as_str()))
            .collect();
        assert_eq!(labels, vec![("b", "v2"), ("b", "v1"), ("a", "v9")]);
    }

    #[test]
    fn empty_dataset_gives_empty_table() {
        assert!(build_table(&Dataset::default()).is_empty());
    }

    #[test]
    fn row_serializes_flat() {
        let row = TableRow {
            project: "p".into(),
            record: record("v1"),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["project"], "p");
        assert_eq!(json["tag"], "v1");
        assert_eq!(json["bicsUntilCommit"], 10);
    }

    #[test]
    fn preview_limits_rows_and_shortens_hashes() {
        let dataset = Dataset::from_projects([Project::new("p")
            .with_record(record("v1"))
            .with_record(record("v2"))
            .with_record(record("v3"))]);
        let text = preview(&build_table(&dataset), 2);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("bicsUntilCommit"));
        assert!(lines[1].contains("01234567"));
        assert!(!text.contains("0123456789"));
        assert!(!text.contains("v3"));
    }

    #[test]
    fn preview_of_nothing_is_empty() {
        assert!(preview(&[], 5).is_empty());
        let rows = build_table(&Dataset::embedded());
        assert!(preview(&rows, 0).is_empty());
    }
}
