//! The release pipeline.
//!
//! Strictly sequential: precondition check, version read, history fetch,
//! commit classification, bump, confirmation, file updates, release commit,
//! annotated tag. Each stage's output feeds the next; the first failure
//! aborts the run with no rollback of earlier stages.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::changelog;
use crate::cmake;
use crate::config::Config;
use crate::conventional;
use crate::error::{ReleaseError, Result};
use crate::git::GitBackend;
use crate::ui;
use crate::version::bump_version;

/// Runtime switches for a release run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseOptions {
    /// Skip the confirmation prompt
    pub force: bool,

    /// Compute everything but mutate nothing
    pub dry_run: bool,
}

/// How a release run ended. Every variant exits with status 0;
/// failures surface as [ReleaseError] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// Files rewritten, release commit created, tag in place
    Released {
        version: String,
        tag: String,
        changelog_section: String,
    },
    /// No commits since the last tag
    NothingToRelease,
    /// Operator declined the confirmation prompt
    Canceled,
    /// Dry run stopped before any mutation
    DryRun { version: String, tag: String },
}

/// Runs the full release pipeline against the given git backend.
///
/// `workdir` is the repository root; the file names in `config` are resolved
/// against it for I/O and passed as-is to the backend for staging.
pub fn run_release<G: GitBackend>(
    git: &G,
    workdir: &Path,
    config: &Config,
    options: &ReleaseOptions,
) -> Result<ReleaseOutcome> {
    // Stage 1: refuse to run on a dirty tree
    if !git.is_working_tree_clean()? {
        return Err(ReleaseError::DirtyWorkingTree);
    }

    // Stage 2: current version from the build file
    let build_path = workdir.join(&config.files.build);
    let build_content = fs::read_to_string(&build_path)?;
    let current_version = cmake::extract_version(&build_content, &config.files.build)?;
    ui::display_status(&format!("Current version: {}", current_version));

    // Stage 3: history since the last release
    let last_tag = git.last_tag()?;
    match last_tag.as_deref() {
        Some(tag) => ui::display_status(&format!("Last tag: {}", tag)),
        None => ui::display_status("Last tag: none"),
    }

    let commits = git.commits_since(last_tag.as_deref())?;
    if commits.is_empty() {
        ui::display_status("No new commits since last tag. Nothing to release.");
        return Ok(ReleaseOutcome::NothingToRelease);
    }
    ui::display_commit_analysis(&commits, last_tag.as_deref());

    // Stages 4-5: classify commits and bump
    let (bump, changes) = conventional::classify_commits(&commits);
    let new_version = bump_version(current_version.clone(), &bump);
    ui::display_version_change(&current_version, &new_version, &bump);

    let version_string = new_version.to_string();
    let tag = format!("{}{}", config.release.tag_prefix, version_string);

    // Operator gate: last point before anything is mutated
    if !options.force
        && !options.dry_run
        && !ui::confirm_action(&format!("Update version to {}?", version_string))?
    {
        return Ok(ReleaseOutcome::Canceled);
    }

    if options.dry_run {
        ui::display_status("Dry run, no changes will be made:");
        ui::display_success(&format!(
            "  Would update {} to version {}",
            config.files.build, version_string
        ));
        ui::display_success(&format!(
            "  Would add a [{}] section to {}",
            version_string, config.files.changelog
        ));
        ui::display_success(&format!(
            "  Would commit both files and create annotated tag {}",
            tag
        ));
        return Ok(ReleaseOutcome::DryRun {
            version: version_string,
            tag,
        });
    }

    // Stage 6: rewrite the version in the build file
    ui::display_status(&format!("Updating {}...", config.files.build));
    fs::write(&build_path, cmake::replace_version(&build_content, &new_version))?;

    // Stage 7: changelog section
    ui::display_status(&format!("Updating {}...", config.files.changelog));
    let today = Local::now().format("%Y-%m-%d").to_string();
    let section = changelog::render_section(&version_string, &changes, &today);

    let changelog_path = workdir.join(&config.files.changelog);
    let existing = if changelog_path.exists() {
        Some(fs::read_to_string(&changelog_path)?)
    } else {
        None
    };
    fs::write(
        &changelog_path,
        changelog::splice_section(existing.as_deref(), &section),
    )?;

    // Stage 8: release commit and annotated tag
    ui::display_status("Committing changes...");
    git.stage(&[
        Path::new(&config.files.build),
        Path::new(&config.files.changelog),
    ])?;
    git.commit(&format!("chore(release): {}", version_string))?;

    ui::display_status(&format!("Creating tag {}...", tag));
    git.tag_annotated(&tag, &format!("Release {}", tag))?;

    Ok(ReleaseOutcome::Released {
        version: version_string,
        tag,
        changelog_section: section,
    })
}
