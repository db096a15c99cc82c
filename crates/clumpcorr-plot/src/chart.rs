//! Time-series chart of BICs and data clump counts per project.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use clumpcorr_core::{ClumpError, Dataset, PlotConfig, Project, ReleaseRecord};
use plotters::prelude::*;

use crate::timeline::{timeline, TimelinePoint};

/// Point marker drawn on each release of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled circle.
    Circle,
    /// Diagonal cross.
    Cross,
    /// Filled square.
    Square,
    /// Filled triangle.
    Triangle,
}

/// One plotted metric.
#[derive(Clone, Copy)]
pub struct Series {
    /// Legend entry.
    pub label: &'static str,
    /// Line and marker color.
    pub color: RGBColor,
    /// Marker shape.
    pub marker: Marker,
    /// Extracts the plotted value from a record.
    pub value: fn(&ReleaseRecord) -> u64,
}

/// The four series drawn on every chart, in legend order.
pub const SERIES: [Series; 4] = [
    Series {
        label: "BICs Until Commit",
        color: RGBColor(31, 119, 180),
        marker: Marker::Circle,
        value: |r| r.bics_until_commit,
    },
    Series {
        label: "Field-Field Data Clumps",
        color: RGBColor(255, 127, 14),
        marker: Marker::Cross,
        value: |r| r.field_field_data_clumps,
    },
    Series {
        label: "Parameter-Parameter Data Clumps",
        color: RGBColor(44, 160, 44),
        marker: Marker::Square,
        value: |r| r.parameter_parameter_data_clumps,
    },
    Series {
        label: "Parameter-Field Data Clumps",
        color: RGBColor(214, 39, 40),
        marker: Marker::Triangle,
        value: |r| r.parameter_field_data_clumps,
    },
];

const MARKER_SIZE: i32 = 4;

/// File name of the chart for `project`.
///
/// # Examples
///
/// ```
/// use clumpcorr_plot::chart::chart_file_name;
///
/// assert_eq!(chart_file_name("tags"), "tags_metrics_over_time.png");
/// ```
pub fn chart_file_name(project: &str) -> String {
    format!("{project}_metrics_over_time.png")
}

/// Render one chart per project of `dataset` into `config.output_dir`.
///
/// Returns the paths written, in dataset order. Projects without records
/// are skipped.
///
/// # Errors
///
/// Returns [`ClumpError::Io`] if the output directory cannot be created,
/// and propagates any error from [`render_project`]. The first failure
/// stops the remaining projects.
pub fn render_all(dataset: &Dataset, config: &PlotConfig) -> Result<Vec<PathBuf>, ClumpError> {
    std::fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::new();
    for project in dataset.projects() {
        if let Some(path) = render_project(project, config)? {
            written.push(path);
        }
    }
    Ok(written)
}

/// Render the metrics-over-time chart for `project`.
///
/// Overwrites an existing file of the same name. Returns `Ok(None)` when
/// the project has no records.
///
/// # Errors
///
/// Returns [`ClumpError::InvalidTimestamp`] for an unrepresentable release
/// time, or [`ClumpError::Plot`] if drawing or encoding the image fails.
pub fn render_project(project: &Project, config: &PlotConfig) -> Result<Option<PathBuf>, ClumpError> {
    let points = timeline(&project.records)?;
    if points.is_empty() {
        tracing::warn!(project = %project.name, "no releases, chart skipped");
        return Ok(None);
    }

    let path = config.output_dir.join(chart_file_name(&project.name));
    draw(&project.name, &points, &path, (config.width, config.height))?;
    tracing::info!(project = %project.name, path = %path.display(), "chart written");
    Ok(Some(path))
}

/// Draws into a bitmap scoped to this call; the image is flushed and the
/// drawing area dropped before returning.
fn draw(
    project: &str,
    points: &[TimelinePoint<'_>],
    path: &Path,
    size: (u32, u32),
) -> Result<(), ClumpError> {
    let (start, end) = date_range(points);
    let y_max = points
        .iter()
        .flat_map(|p| SERIES.iter().map(move |s| (s.value)(p.record)))
        .max()
        .unwrap_or(0) as f64;
    let y_max = (y_max * 1.05).max(1.0);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Metrics Over Time for {project}"), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(start..end, 0f64..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Count")
        .x_label_formatter(&|d: &DateTime<Utc>| d.format("%Y-%m").to_string())
        .draw()
        .map_err(plot_error)?;

    for series in &SERIES {
        let data: Vec<(DateTime<Utc>, f64)> = points
            .iter()
            .map(|p| (p.date, (series.value)(p.record) as f64))
            .collect();
        let color = series.color;

        chart
            .draw_series(LineSeries::new(data.iter().copied(), color.stroke_width(2)))
            .map_err(plot_error)?
            .label(series.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        let markers = match series.marker {
            Marker::Circle => chart.draw_series(
                data.iter()
                    .map(|&p| Circle::new(p, MARKER_SIZE, color.filled())),
            ),
            Marker::Cross => chart.draw_series(
                data.iter()
                    .map(|&p| Cross::new(p, MARKER_SIZE, color.stroke_width(2))),
            ),
            Marker::Square => chart.draw_series(data.iter().map(|&p| {
                EmptyElement::at(p)
                    + Rectangle::new(
                        [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                        color.filled(),
                    )
            })),
            Marker::Triangle => chart.draw_series(
                data.iter()
                    .map(|&p| TriangleMarker::new(p, MARKER_SIZE + 1, color.filled())),
            ),
        };
        markers.map_err(plot_error)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

/// X-axis bounds: the release span plus a small margin, widened to a day
/// either side when all releases share one instant.
fn date_range(points: &[TimelinePoint<'_>]) -> (DateTime<Utc>, DateTime<Utc>) {
    let first = points.first().map(|p| p.date).unwrap_or_default();
    let last = points.last().map(|p| p.date).unwrap_or_default();

    let margin = if last > first {
        (last - first) / 50
    } else {
        TimeDelta::days(1)
    };
    (first - margin, last + margin)
}

fn plot_error(err: impl Display) -> ClumpError {
    ClumpError::Plot(err.to_string())
}
