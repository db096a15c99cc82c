//! Per-project and global correlation between total data clumps and
//! bug-introducing changes.

use clumpcorr_core::TableRow;
use serde::Serialize;

use crate::spearman::{spearman, Correlation};

/// A table row with its clump total, computed for one analysis pass.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::{build_table, Dataset};
/// use clumpcorr_stats::analyzer::DerivedRow;
///
/// let rows = build_table(&Dataset::embedded());
/// let v191 = rows.iter().find(|r| r.record.tag == "v1.9.1").unwrap();
/// assert_eq!(DerivedRow::new(v191).total_data_clumps, 86);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DerivedRow<'a> {
    /// The source row.
    pub row: &'a TableRow,
    /// Field-field + parameter-parameter + parameter-field clumps.
    pub total_data_clumps: u64,
}

impl<'a> DerivedRow<'a> {
    /// Derive the clump total for `row`.
    pub fn new(row: &'a TableRow) -> Self {
        Self {
            row,
            total_data_clumps: row.record.total_data_clumps(),
        }
    }
}

/// Correlation result for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCorrelation {
    /// Project label.
    pub project: String,
    /// Number of rows in the group.
    pub points: usize,
    /// Correlation outcome.
    #[serde(flatten)]
    pub correlation: Correlation,
}

/// Full analysis result: one entry per project plus the global pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationReport {
    /// Rows in the combined table.
    pub rows: usize,
    /// Per-project results, in order of first appearance.
    pub projects: Vec<ProjectCorrelation>,
    /// Result over the combined table.
    pub global: Correlation,
}

/// Group rows by project label.
///
/// Groups appear in order of first appearance; each group keeps its rows'
/// original order.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::{build_table, Dataset};
/// use clumpcorr_stats::analyzer::group_by_project;
///
/// let rows = build_table(&Dataset::embedded());
/// let groups = group_by_project(&rows);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].0, "tags");
/// assert_eq!(groups[0].1.len(), 15);
/// ```
pub fn group_by_project(rows: &[TableRow]) -> Vec<(&str, Vec<&TableRow>)> {
    let mut groups: Vec<(&str, Vec<&TableRow>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(name, _)| *name == row.project) {
            Some((_, members)) => members.push(row),
            None => groups.push((row.project.as_str(), vec![row])),
        }
    }
    groups
}

/// Spearman correlation between BICs and total data clumps over `rows`.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::{build_table, Dataset};
/// use clumpcorr_stats::analyzer::correlate_rows;
///
/// let rows = build_table(&Dataset::embedded());
/// let refs: Vec<_> = rows.iter().collect();
/// let (rho, _) = correlate_rows(&refs).values().unwrap();
/// assert!((rho - 0.520).abs() < 5e-4);
/// ```
pub fn correlate_rows(rows: &[&TableRow]) -> Correlation {
    if rows.len() < 2 {
        return Correlation::InsufficientData;
    }
    let derived: Vec<DerivedRow<'_>> = rows.iter().map(|row| DerivedRow::new(row)).collect();
    let bics: Vec<f64> = derived
        .iter()
        .map(|d| d.row.record.bics_until_commit as f64)
        .collect();
    let totals: Vec<f64> = derived
        .iter()
        .map(|d| d.total_data_clumps as f64)
        .collect();
    spearman(&bics, &totals)
}

/// Run the per-project analysis followed by the global pass.
pub fn analyze(rows: &[TableRow]) -> CorrelationReport {
    let projects = group_by_project(rows)
        .into_iter()
        .map(|(project, members)| {
            let correlation = correlate_rows(&members);
            tracing::debug!(project, points = members.len(), ?correlation, "project analyzed");
            ProjectCorrelation {
                project: project.to_string(),
                points: members.len(),
                correlation,
            }
        })
        .collect();

    let all: Vec<&TableRow> = rows.iter().collect();
    let global = correlate_rows(&all);
    tracing::debug!(rows = rows.len(), ?global, "global correlation");

    CorrelationReport {
        rows: rows.len(),
        projects,
        global,
    }
}
