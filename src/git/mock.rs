use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::git::{CommitRecord, GitBackend};

/// Mock backend for testing the pipeline without a real git repository.
///
/// History is configured up front; mutating operations (stage, commit, tag)
/// are recorded so tests can assert on them afterwards.
pub struct MockBackend {
    clean: bool,
    last_tag: Option<String>,
    commits: Vec<CommitRecord>,
    staged: Mutex<Vec<PathBuf>>,
    commit_messages: Mutex<Vec<String>>,
    tags: Mutex<Vec<(String, String)>>,
}

impl MockBackend {
    /// Create a mock backend with a clean tree and no history.
    pub fn new() -> Self {
        MockBackend {
            clean: true,
            last_tag: None,
            commits: Vec::new(),
            staged: Mutex::new(Vec::new()),
            commit_messages: Mutex::new(Vec::new()),
            tags: Mutex::new(Vec::new()),
        }
    }

    /// Mark the working tree as dirty.
    pub fn set_dirty(&mut self) {
        self.clean = false;
    }

    /// Set the most recent release tag.
    pub fn set_last_tag(&mut self, tag: impl Into<String>) {
        self.last_tag = Some(tag.into());
    }

    /// Append a commit to the history returned by `commits_since`.
    /// Callers push newest first, matching real log order.
    pub fn add_commit(&mut self, id: impl Into<String>, subject: impl Into<String>) {
        self.commits.push(CommitRecord {
            id: id.into(),
            subject: subject.into(),
        });
    }

    /// Paths staged so far.
    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.staged.lock().unwrap().clone()
    }

    /// Messages of commits created so far.
    pub fn commit_messages(&self) -> Vec<String> {
        self.commit_messages.lock().unwrap().clone()
    }

    /// (name, message) pairs of annotated tags created so far.
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.tags.lock().unwrap().clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GitBackend for MockBackend {
    fn is_working_tree_clean(&self) -> Result<bool> {
        Ok(self.clean)
    }

    fn last_tag(&self) -> Result<Option<String>> {
        Ok(self.last_tag.clone())
    }

    fn commits_since(&self, _tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        Ok(self.commits.clone())
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let mut staged = self.staged.lock().unwrap();
        staged.extend(paths.iter().map(|p| p.to_path_buf()));
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.commit_messages.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn tag_annotated(&self, name: &str, message: &str) -> Result<()> {
        self.tags
            .lock()
            .unwrap()
            .push((name.to_string(), message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_backend_defaults() {
        let backend = MockBackend::default();
        assert!(backend.is_working_tree_clean().unwrap());
        assert_eq!(backend.last_tag().unwrap(), None);
        assert!(backend.commits_since(None).unwrap().is_empty());
    }

    #[test]
    fn test_mock_backend_history() {
        let mut backend = MockBackend::new();
        backend.set_last_tag("v1.0.0");
        backend.add_commit("abc1234def", "feat: new thing");

        assert_eq!(backend.last_tag().unwrap(), Some("v1.0.0".to_string()));
        let commits = backend.commits_since(Some("v1.0.0")).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].subject, "feat: new thing");
    }

    #[test]
    fn test_mock_backend_records_mutations() {
        let backend = MockBackend::new();

        backend.stage(&[Path::new("CMakeLists.txt")]).unwrap();
        backend.commit("chore(release): 1.1.0").unwrap();
        backend.tag_annotated("v1.1.0", "Release v1.1.0").unwrap();

        assert_eq!(backend.staged_paths(), vec![PathBuf::from("CMakeLists.txt")]);
        assert_eq!(backend.commit_messages(), vec!["chore(release): 1.1.0"]);
        assert_eq!(
            backend.created_tags(),
            vec![("v1.1.0".to_string(), "Release v1.1.0".to_string())]
        );
    }

    #[test]
    fn test_mock_backend_dirty_tree() {
        let mut backend = MockBackend::new();
        backend.set_dirty();
        assert!(!backend.is_working_tree_clean().unwrap());
    }
}
