use std::path::PathBuf;

/// Errors that can occur across the clumpcorr crates.
///
/// Library crates return this type directly; the binary hands it to
/// `miette` at the boundary, which is why it also derives
/// [`miette::Diagnostic`].
///
/// Degenerate statistical input is not an error. It is reported through
/// the analyzer's result type instead.
///
/// # Examples
///
/// ```
/// use clumpcorr_core::ClumpError;
///
/// let err = ClumpError::Config("preview_rows must be positive".into());
/// assert!(err.to_string().contains("preview_rows"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ClumpError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    #[diagnostic(code(clumpcorr::io))]
    Io(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    #[diagnostic(code(clumpcorr::config))]
    Config(String),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    #[diagnostic(
        code(clumpcorr::toml),
        help("check .clumpcorr.toml against the template written by `clumpcorr init`")
    )]
    Toml(#[from] toml::de::Error),

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    #[diagnostic(code(clumpcorr::serialization))]
    Serialization(#[from] serde_json::Error),

    /// Chart drawing or image encoding failure.
    #[error("plot error: {0}")]
    #[diagnostic(code(clumpcorr::plot))]
    Plot(String),

    /// A release timestamp that cannot be represented as a calendar date.
    #[error("timestamp {0} is out of range for a calendar date")]
    #[diagnostic(code(clumpcorr::timestamp))]
    InvalidTimestamp(i64),

    /// A required file was not found.
    #[error("file not found: {}", .0.display())]
    #[diagnostic(code(clumpcorr::file_not_found))]
    FileNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ClumpError = io_err.into();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = ClumpError::Config("bad value".into());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn invalid_timestamp_names_value() {
        let err = ClumpError::InvalidTimestamp(i64::MAX);
        assert!(err.to_string().contains(&i64::MAX.to_string()));
    }

    #[test]
    fn file_not_found_shows_path() {
        let err = ClumpError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert!(err.to_string().contains("/tmp/missing.toml"));
    }
}
