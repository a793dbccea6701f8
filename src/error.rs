use thiserror::Error;

/// Unified error type for cmake-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Working tree has uncommitted changes. Commit or stash them before releasing.")]
    DirtyWorkingTree,

    #[error("Could not find a project VERSION declaration in {0}")]
    VersionNotFound(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in cmake-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version-not-found error for the given build file
    pub fn version_not_found(file: impl Into<String>) -> Self {
        ReleaseError::VersionNotFound(file.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}
