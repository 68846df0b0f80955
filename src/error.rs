use thiserror::Error;

/// Unified error type for branch-version operations
#[derive(Error, Debug)]
pub enum VersioningError {
    #[error("Branch name is required to build a version suffix")]
    MissingBranchName,

    #[error("Invalid release filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in branch-version
pub type Result<T> = std::result::Result<T, VersioningError>;

impl VersioningError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersioningError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersioningError::Version(msg.into())
    }
}
