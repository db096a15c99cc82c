//! Chronological ordering of a project's releases.

use chrono::{DateTime, Utc};
use clumpcorr_core::{ClumpError, ReleaseRecord};

/// A release placed on the calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePoint<'a> {
    /// Release time in UTC.
    pub date: DateTime<Utc>,
    /// The release metrics.
    pub record: &'a ReleaseRecord,
}

/// Sort `records` ascending by timestamp and convert each to a UTC date.
///
/// The sort is stable, so releases sharing a timestamp keep their insertion
/// order.
///
/// # Errors
///
/// Returns [`ClumpError::InvalidTimestamp`] if a timestamp is outside the
/// range chrono can represent.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::Dataset;
/// use clumpcorr_plot::timeline::timeline;
///
/// let dataset = Dataset::embedded();
/// let points = timeline(&dataset.projects()[0].records).unwrap();
/// assert_eq!(points[0].date.format("%Y-%m-%d").to_string(), "2013-01-19");
/// ```
pub fn timeline(records: &[ReleaseRecord]) -> Result<Vec<TimelinePoint<'_>>, ClumpError> {
    let mut sorted: Vec<&ReleaseRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);

    sorted
        .into_iter()
        .map(|record| {
            let date = DateTime::from_timestamp(record.timestamp, 0)
                .ok_or(ClumpError::InvalidTimestamp(record.timestamp))?;
            Ok(TimelinePoint { date, record })
        })
        .collect()
}
