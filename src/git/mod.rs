//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of Git
//! operations the release pipeline needs, allowing for multiple
//! implementations including real Git repositories and mock implementations
//! for testing.
//!
//! The primary abstraction is the [GitBackend] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Backend]: A real implementation using the `git2` crate
//! - [mock::MockBackend]: An in-memory implementation for testing
//!
//! Most code should depend on the [GitBackend] trait rather than concrete
//! implementations so the pipeline can run against fake history in tests.

pub mod mock;
pub mod repository;

pub use mock::MockBackend;
pub use repository::Git2Backend;

use std::path::Path;

use crate::error::Result;

/// One commit as read from history: full identifier plus subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// The full commit hash
    pub id: String,
    /// The first line of the commit message
    pub subject: String,
}

impl CommitRecord {
    /// The 7-character abbreviated commit identifier used in change entries.
    pub fn short_id(&self) -> &str {
        if self.id.len() > 7 {
            &self.id[..7]
        } else {
            &self.id
        }
    }
}

/// The Git capabilities required by the release pipeline.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result] so git2 and application errors surface uniformly.
pub trait GitBackend: Send + Sync {
    /// Whether the working tree is free of tracked and untracked changes.
    fn is_working_tree_clean(&self) -> Result<bool>;

    /// The most recent tag reachable from HEAD, or `None` when no release
    /// has been tagged yet.
    fn last_tag(&self) -> Result<Option<String>>;

    /// Commits reachable from HEAD but not from `tag`, newest first.
    ///
    /// With `tag == None`, returns every commit reachable from HEAD. An empty
    /// result means there is nothing to release and is not an error.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>>;

    /// Stage the named files (paths relative to the repository root).
    fn stage(&self, paths: &[&Path]) -> Result<()>;

    /// Create a commit from the current index with the given message.
    fn commit(&self, message: &str) -> Result<()>;

    /// Create an annotated tag on HEAD with the given name and message.
    fn tag_annotated(&self, name: &str, message: &str) -> Result<()>;
}
