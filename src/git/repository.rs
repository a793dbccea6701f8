use std::collections::HashMap;
use std::path::{Path, PathBuf};

use git2::{Repository, StatusOptions};

use crate::error::{ReleaseError, Result};
use crate::git::{CommitRecord, GitBackend};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Backend {
    repo: Repository,
}

impl Git2Backend {
    /// Open or discover a git repository at or above the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2Backend { repo })
    }

    /// The repository working directory (where the build file and changelog
    /// live). Fails for bare repositories.
    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| ReleaseError::config("repository has no working directory"))
    }

    /// Map every tag to the commit it points at, peeling annotated tags.
    fn tag_targets(&self) -> Result<HashMap<git2::Oid, String>> {
        let mut targets = HashMap::new();
        let tags = self.repo.tag_names(None)?;

        for tag_name in tags.iter().flatten() {
            if let Ok(tag_ref) = self.repo.find_reference(&format!("refs/tags/{}", tag_name)) {
                if let Ok(tag_obj) = tag_ref.peel(git2::ObjectType::Commit) {
                    targets.insert(tag_obj.id(), tag_name.to_string());
                }
            }
        }

        Ok(targets)
    }
}

impl GitBackend for Git2Backend {
    fn is_working_tree_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(statuses.is_empty())
    }

    fn last_tag(&self) -> Result<Option<String>> {
        let head_oid = self
            .repo
            .head()?
            .target()
            .ok_or_else(|| git2::Error::from_str("HEAD is detached or invalid"))?;

        let tag_targets = self.tag_targets()?;
        if tag_targets.is_empty() {
            return Ok(None);
        }

        // Walk history from HEAD; the first tagged commit is the last release
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;

        for oid in revwalk {
            let oid = oid?;
            if let Some(tag_name) = tag_targets.get(&oid) {
                return Ok(Some(tag_name.clone()));
            }
        }

        Ok(None)
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        let head_oid = self
            .repo
            .head()?
            .target()
            .ok_or_else(|| git2::Error::from_str("HEAD is detached or invalid"))?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;

        // Hide the tag commit and its ancestors so the walk yields exactly
        // `tag..HEAD`, including side branches merged after the release
        if let Some(tag_name) = tag {
            let tag_oid = self
                .repo
                .find_reference(&format!("refs/tags/{}", tag_name))
                .ok()
                .and_then(|r| r.peel(git2::ObjectType::Commit).ok())
                .map(|obj| obj.id());
            if let Some(oid) = tag_oid {
                revwalk.hide(oid)?;
            }
        }

        // Newest first, matching git log order
        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(CommitRecord {
                id: oid.to_string(),
                subject: commit.summary().unwrap_or("").to_string(),
            });
        }

        Ok(commits)
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(path)?;
        }
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        Ok(())
    }

    fn tag_annotated(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let signature = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &signature, message, false)?;

        Ok(())
    }
}

// SAFETY: Git2Backend wraps git2::Repository which is Send. libgit2 is
// thread-safe for the read operations used here, and this process is the
// only writer.
unsafe impl Sync for Git2Backend {}
