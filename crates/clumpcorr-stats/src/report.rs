//! Rendering of a [`CorrelationReport`] in the supported output formats.

use std::fmt::Write;

use clumpcorr_core::{ClumpError, OutputFormat};

use crate::analyzer::{CorrelationReport, ProjectCorrelation};
use crate::spearman::Correlation;

const STATISTIC: &str = "Spearmanr(bicsUntilCommit, total_data_clumps)";

/// Console line for one project.
///
/// # Examples
///
/// ```
/// use clumpcorr_stats::analyzer::ProjectCorrelation;
/// use clumpcorr_stats::report::project_line;
/// use clumpcorr_stats::spearman::Correlation;
///
/// let result = ProjectCorrelation {
///     project: "tags".into(),
///     points: 15,
///     correlation: Correlation::Computed { rho: 0.51979, p_value: 0.04703 },
/// };
/// assert_eq!(
///     project_line(&result),
///     "Project tags: Spearmanr(bicsUntilCommit, total_data_clumps): rho=0.520, p=0.0470"
/// );
/// ```
pub fn project_line(result: &ProjectCorrelation) -> String {
    let name = &result.project;
    match result.correlation {
        Correlation::Computed { rho, p_value } => {
            format!("Project {name}: {STATISTIC}: rho={rho:.3}, p={p_value:.4}")
        }
        Correlation::InsufficientVariation => {
            format!("Project {name}: Not enough variation for correlation analysis.")
        }
        Correlation::InsufficientData => {
            format!("Project {name}: Not enough data points for correlation analysis.")
        }
    }
}

/// Console line for the global pass.
///
/// # Examples
///
/// ```
/// use clumpcorr_stats::report::global_line;
/// use clumpcorr_stats::spearman::Correlation;
///
/// assert_eq!(
///     global_line(&Correlation::InsufficientVariation),
///     "Global correlation: Not enough variation in data for analysis."
/// );
/// ```
pub fn global_line(correlation: &Correlation) -> String {
    match *correlation {
        Correlation::Computed { rho, p_value } => {
            format!("Global {STATISTIC}: rho={rho:.3}, p={p_value:.4}")
        }
        Correlation::InsufficientVariation => {
            "Global correlation: Not enough variation in data for analysis.".into()
        }
        Correlation::InsufficientData => {
            "Global correlation: Not enough data points for analysis.".into()
        }
    }
}

/// Render `report` in `format`.
///
/// # Errors
///
/// Returns [`ClumpError::Serialization`] if JSON encoding fails.
pub fn render(report: &CorrelationReport, format: OutputFormat) -> Result<String, ClumpError> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(render_markdown(report)),
    }
}

fn render_text(report: &CorrelationReport) -> String {
    let mut out = String::new();
    for project in &report.projects {
        let _ = writeln!(out, "{}", project_line(project));
    }
    let _ = writeln!(out, "{}", global_line(&report.global));
    out
}

fn render_markdown(report: &CorrelationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Data Clumps vs. Bug-Introducing Changes\n");
    let _ = writeln!(out, "**Rows analyzed:** {}\n", report.rows);

    if report.projects.is_empty() {
        let _ = writeln!(out, "No projects to analyze.\n");
    } else {
        let _ = writeln!(out, "| Project | Points | rho | p |");
        let _ = writeln!(out, "|---------|--------|-----|---|");
        for project in &report.projects {
            let (rho, p) = markdown_cells(&project.correlation);
            let _ = writeln!(
                out,
                "| `{}` | {} | {rho} | {p} |",
                project.project, project.points
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "**Global:** {}", global_line(&report.global));
    out
}

fn markdown_cells(correlation: &Correlation) -> (String, String) {
    match *correlation {
        Correlation::Computed { rho, p_value } => (format!("{rho:.3}"), format!("{p_value:.4}")),
        Correlation::InsufficientVariation => ("n/a".into(), "not enough variation".into()),
        Correlation::InsufficientData => ("n/a".into(), "not enough data points".into()),
    }
}
