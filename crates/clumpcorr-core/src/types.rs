use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Metrics captured for one tagged release of a project.
///
/// Records are built once and never mutated. Serialized keys are camelCase
/// (`commitHash`, `fieldFieldDataClumps`, `bicsUntilCommit`, ...).
///
/// # Examples
///
/// ```
/// use clumpcorr_core::ReleaseRecord;
///
/// let record = ReleaseRecord {
///     commit_hash: "6a5a8260".into(),
///     tag: "v1.9.1".into(),
///     timestamp: 1388096659,
///     field_field_data_clumps: 0,
///     parameter_parameter_data_clumps: 72,
///     parameter_field_data_clumps: 14,
///     bics_until_commit: 1602,
/// };
/// assert_eq!(record.total_data_clumps(), 86);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    /// Full commit hash the release tag points at.
    pub commit_hash: String,
    /// Release tag, usually a semantic version label.
    pub tag: String,
    /// Commit time in Unix seconds.
    pub timestamp: i64,
    /// Field-to-field data clumps detected at this release.
    pub field_field_data_clumps: u64,
    /// Parameter-to-parameter data clumps detected at this release.
    pub parameter_parameter_data_clumps: u64,
    /// Parameter-to-field data clumps detected at this release.
    pub parameter_field_data_clumps: u64,
    /// Bug-introducing changes accumulated up to this commit.
    pub bics_until_commit: u64,
}

impl ReleaseRecord {
    /// Sum of the three data clump counts.
    pub fn total_data_clumps(&self) -> u64 {
        self.field_field_data_clumps
            + self.parameter_parameter_data_clumps
            + self.parameter_field_data_clumps
    }
}

/// A named group of release records, kept in insertion order.
///
/// Insertion order is not necessarily chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project label, also used to name output files.
    pub name: String,
    /// Records in the order they were added.
    pub records: Vec<ReleaseRecord>,
}

impl Project {
    /// Create an empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Builder-style append of one record.
    pub fn with_record(mut self, record: ReleaseRecord) -> Self {
        self.records.push(record);
        self
    }
}

/// Ordered mapping from project label to its records.
///
/// Labels are unique; projects keep the order they were inserted in.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::{Dataset, Project};
///
/// let mut dataset = Dataset::default();
/// dataset.insert(Project::new("alpha"));
/// dataset.insert(Project::new("beta"));
/// assert_eq!(dataset.len(), 2);
/// assert!(dataset.get("beta").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    projects: Vec<Project>,
}

impl Dataset {
    /// Build a dataset from projects. A later project with an already used
    /// label replaces the earlier one in place.
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut dataset = Self::default();
        for project in projects {
            dataset.insert(project);
        }
        dataset
    }

    /// Insert a project, replacing any existing project with the same label.
    pub fn insert(&mut self, project: Project) {
        match self.projects.iter_mut().find(|p| p.name == project.name) {
            Some(existing) => *existing = project,
            None => self.projects.push(project),
        }
    }

    /// Look up a project by label.
    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// `true` when no project is present.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Total number of records across all projects.
    pub fn record_count(&self) -> usize {
        self.projects.iter().map(|p| p.records.len()).sum()
    }
}

/// Output format for the correlation report.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::OutputFormat;
///
/// let fmt: OutputFormat = "json".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Json);
///
/// let fmt: OutputFormat = "md".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Markdown);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain console lines.
    #[default]
    Text,
    /// Machine-readable JSON with camelCase keys.
    Json,
    /// Markdown-formatted output.
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
