use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ClumpError;

/// Top-level configuration loaded from `.clumpcorr.toml`.
///
/// Resolution order is CLI flags > config file > defaults. Every field is
/// optional in the file.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::ClumpConfig;
///
/// let config = ClumpConfig::default();
/// assert_eq!(config.report.preview_rows, 5);
/// assert_eq!(config.plot.width, 1200);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClumpConfig {
    /// Console report settings.
    #[serde(default)]
    pub report: ReportConfig,
    /// Chart rendering settings.
    #[serde(default)]
    pub plot: PlotConfig,
}

impl ClumpConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ClumpError::FileNotFound`] if `path` does not exist,
    /// [`ClumpError::Io`] if it cannot be read, or [`ClumpError::Toml`] /
    /// [`ClumpError::Config`] if the content is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use clumpcorr_core::ClumpConfig;
    /// use std::path::Path;
    ///
    /// let config = ClumpConfig::from_file(Path::new(".clumpcorr.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, ClumpError> {
        if !path.exists() {
            return Err(ClumpError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ClumpError::Toml`] if parsing fails, or
    /// [`ClumpError::Config`] if a chart dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use clumpcorr_core::ClumpConfig;
    ///
    /// let toml = r#"
    /// [plot]
    /// width = 800
    /// "#;
    /// let config = ClumpConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.plot.width, 800);
    /// assert_eq!(config.plot.height, 600);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, ClumpError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ClumpError> {
        if self.plot.width == 0 || self.plot.height == 0 {
            return Err(ClumpError::Config(format!(
                "plot dimensions must be non-zero, got {}x{}",
                self.plot.width, self.plot.height
            )));
        }
        Ok(())
    }
}

/// Console report configuration.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::ReportConfig;
///
/// assert_eq!(ReportConfig::default().preview_rows, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rows shown in the data overview dump (default: 5).
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_preview_rows() -> usize {
    5
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
        }
    }
}

/// Chart rendering configuration.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::PlotConfig;
/// use std::path::PathBuf;
///
/// let config = PlotConfig::default();
/// assert_eq!((config.width, config.height), (1200, 600));
/// assert_eq!(config.output_dir, PathBuf::from("."));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200).
    #[serde(default = "default_width")]
    pub width: u32,
    /// Image height in pixels (default: 600).
    #[serde(default = "default_height")]
    pub height: u32,
    /// Directory the chart images are written to (default: `.`).
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    600
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output_dir: default_output_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = ClumpConfig::default();
        assert_eq!(config.report.preview_rows, 5);
        assert_eq!(config.plot.width, 1200);
        assert_eq!(config.plot.height, 600);
        assert_eq!(config.plot.output_dir, PathBuf::from("."));
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
[report]
preview_rows = 10

[plot]
width = 1600
height = 900
output_dir = "charts"
"#;
        let config = ClumpConfig::from_toml(toml).unwrap();
        assert_eq!(config.report.preview_rows, 10);
        assert_eq!(config.plot.width, 1600);
        assert_eq!(config.plot.height, 900);
        assert_eq!(config.plot.output_dir, PathBuf::from("charts"));
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = ClumpConfig::from_toml("").unwrap();
        assert_eq!(config.report.preview_rows, 5);
        assert_eq!(config.plot.height, 600);
    }

    #[test]
    fn invalid_toml_returns_error() {
        let result = ClumpConfig::from_toml("{{invalid}}");
        assert!(matches!(result, Err(ClumpError::Toml(_))));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let result = ClumpConfig::from_toml("[plot]\nwidth = 0\n");
        assert!(matches!(result, Err(ClumpError::Config(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = ClumpConfig::from_file(Path::new("/nonexistent/.clumpcorr.toml"));
        assert!(matches!(result, Err(ClumpError::FileNotFound(_))));
    }
}
