use regex::Regex;

use crate::git::CommitRecord;
pub use crate::version::VersionBump;

/// Change entries collected from one release's commits, grouped by category.
///
/// Entries keep commit history order (newest first) and are already rendered
/// as changelog bullets, each ending with the abbreviated commit id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub breaking: Vec<String>,
    pub features: Vec<String>,
    pub fixes: Vec<String>,
    pub performance: Vec<String>,
    pub other: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.breaking.is_empty()
            && self.features.is_empty()
            && self.fixes.is_empty()
            && self.performance.is_empty()
            && self.other.is_empty()
    }
}

/// Classifies commits and derives the version bump for the release.
///
/// Per commit, first match wins:
/// 1. `BREAKING CHANGE:` anywhere in the subject, or a `!` before the first
///    colon, makes the commit breaking; the entry keeps the full subject.
/// 2. A conventional `type(scope): description` shape maps feat/fix/perf to
///    their categories; any other type lands in `other` with a `type:` prefix.
/// 3. Everything else lands in `other` with the raw subject.
///
/// Bump decision: major if any breaking entry, else minor if any feature,
/// else patch (fix-only and no-relevant-change sets both cut a patch).
pub fn classify_commits(commits: &[CommitRecord]) -> (VersionBump, ChangeSet) {
    let mut has_breaking = false;
    let mut has_feature = false;
    let mut changes = ChangeSet::default();

    let conventional = Regex::new(r"^(\w+)(?:\(([^)]+)\))?: (.+)").ok();

    for commit in commits {
        let subject = commit.subject.as_str();
        let short_hash = commit.short_id();

        if is_breaking(subject) {
            has_breaking = true;
            changes.breaking.push(format!("{} ({})", subject, short_hash));
            continue;
        }

        if let Some(captures) = conventional.as_ref().and_then(|re| re.captures(subject)) {
            let commit_type = captures.get(1).map(|m| m.as_str()).unwrap_or("");
            let scope = captures.get(2).map(|m| m.as_str());
            let description = captures.get(3).map(|m| m.as_str()).unwrap_or("");

            let entry = match scope {
                Some(scope) => format!("{} ({}) ({})", description, scope, short_hash),
                None => format!("{} ({})", description, short_hash),
            };

            match commit_type {
                "feat" => {
                    has_feature = true;
                    changes.features.push(entry);
                }
                "fix" => changes.fixes.push(entry),
                "perf" => changes.performance.push(entry),
                other => changes.other.push(format!("{}: {}", other, entry)),
            }
        } else {
            // Non-conventional commit, keep the subject as-is
            changes.other.push(format!("{} ({})", subject, short_hash));
        }
    }

    let bump = if has_breaking {
        VersionBump::Major
    } else if has_feature {
        VersionBump::Minor
    } else {
        // Fix-only and no-relevant-change sets both default to patch
        VersionBump::Patch
    };

    (bump, changes)
}

/// A commit is breaking if the subject carries the `BREAKING CHANGE:` marker
/// or a `!` anywhere before the first colon (`feat!: ...`, `feat(api)!: ...`).
fn is_breaking(subject: &str) -> bool {
    if subject.contains("BREAKING CHANGE:") {
        return true;
    }
    subject.split(':').next().unwrap_or(subject).contains('!')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, subject: &str) -> CommitRecord {
        CommitRecord {
            id: id.to_string(),
            subject: subject.to_string(),
        }
    }

    #[test]
    fn test_breaking_change_marker() {
        let commits = vec![record("abc1234def", "BREAKING CHANGE: drop old API")];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Major);
        assert_eq!(
            changes.breaking,
            vec!["BREAKING CHANGE: drop old API (abc1234)"]
        );
    }

    #[test]
    fn test_exclamation_before_colon_is_breaking() {
        let commits = vec![record("abc1234def", "feat(api)!: redesign endpoints")];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Major);
        assert_eq!(changes.breaking.len(), 1);
        assert!(changes.features.is_empty());
    }

    #[test]
    fn test_feature_with_scope() {
        let commits = vec![record("abc1234def", "feat(parser): add support for X")];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Minor);
        assert_eq!(
            changes.features,
            vec!["add support for X (parser) (abc1234)"]
        );
    }

    #[test]
    fn test_fix_without_scope() {
        let commits = vec![record("deadbeef123", "fix: correct off-by-one")];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Patch);
        assert_eq!(changes.fixes, vec!["correct off-by-one (deadbee)"]);
    }

    #[test]
    fn test_perf_does_not_raise_bump() {
        let commits = vec![record("abc1234def", "perf(render): cache layouts")];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Patch);
        assert_eq!(changes.performance.len(), 1);
    }

    #[test]
    fn test_other_type_keeps_prefix() {
        let commits = vec![record("abc1234def", "docs: update readme")];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Patch);
        assert_eq!(changes.other, vec!["docs: update readme (abc1234)"]);
    }

    #[test]
    fn test_non_conventional_subject_preserved() {
        let commits = vec![record("abc1234def", "update readme")];
        let (_, changes) = classify_commits(&commits);

        assert_eq!(changes.other, vec!["update readme (abc1234)"]);
    }

    #[test]
    fn test_breaking_wins_over_features() {
        let commits = vec![
            record("aaa1111bbb", "feat: new thing"),
            record("bbb2222ccc", "fix(core)!: breaking change"),
            record("ccc3333ddd", "fix: small fix"),
        ];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Major);
        assert_eq!(changes.breaking.len(), 1);
        assert_eq!(changes.features.len(), 1);
        assert_eq!(changes.fixes.len(), 1);
    }

    #[test]
    fn test_feature_wins_over_fixes() {
        let commits = vec![
            record("aaa1111bbb", "fix: small fix"),
            record("bbb2222ccc", "feat: new thing"),
        ];
        let (bump, _) = classify_commits(&commits);
        assert_eq!(bump, VersionBump::Minor);
    }

    #[test]
    fn test_only_other_changes_still_patch() {
        let commits = vec![
            record("aaa1111bbb", "docs: update readme"),
            record("bbb2222ccc", "chore: bump deps"),
        ];
        let (bump, changes) = classify_commits(&commits);

        assert_eq!(bump, VersionBump::Patch);
        assert_eq!(changes.other.len(), 2);
    }

    #[test]
    fn test_empty_commit_list() {
        let (bump, changes) = classify_commits(&[]);
        assert_eq!(bump, VersionBump::Patch);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_entries_keep_history_order() {
        let commits = vec![
            record("aaa1111bbb", "feat: newest"),
            record("bbb2222ccc", "feat: older"),
        ];
        let (_, changes) = classify_commits(&commits);
        assert_eq!(
            changes.features,
            vec!["newest (aaa1111)", "older (bbb2222)"]
        );
    }
}
