//! Core types, configuration, and error handling for clumpcorr.
//!
//! This crate provides the shared foundation used by the other crates:
//! - [`ClumpError`]: unified error type using `thiserror`
//! - [`ClumpConfig`]: configuration loaded from `.clumpcorr.toml`
//! - Release data: [`ReleaseRecord`], [`Project`], [`Dataset`] and the
//!   embedded release history ([`Dataset::embedded`])
//! - The flat table: [`TableRow`], [`build_table`], [`preview`]

mod config;
mod dataset;
mod error;
mod table;
mod types;

pub use config::{ClumpConfig, PlotConfig, ReportConfig};
pub use dataset::EMBEDDED_PROJECT;
pub use error::ClumpError;
pub use table::{build_table, preview, TableRow};
pub use types::{Dataset, OutputFormat, Project, ReleaseRecord};

/// A convenience `Result` type for clumpcorr operations.
pub type Result<T> = std::result::Result<T, ClumpError>;
