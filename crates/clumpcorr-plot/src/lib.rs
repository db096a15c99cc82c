//! Metrics-over-time charts for each tracked project.
//!
//! Orders a project's releases by timestamp and draws BICs alongside the
//! three data clump counts on a shared date axis, one PNG per project.

pub mod chart;
pub mod timeline;

pub use chart::{chart_file_name, render_all, render_project};
