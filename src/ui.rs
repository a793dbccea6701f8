use std::io::{self, Write};

use crate::error::Result;
use crate::git::CommitRecord;
use crate::version::{Version, VersionBump};

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Show the commits under analysis, newest first, capped at 10 lines.
pub fn display_commit_analysis(commits: &[CommitRecord], last_tag: Option<&str>) {
    match last_tag {
        Some(tag) => println!(
            "\n\x1b[1mFound {} commit(s) since tag '{}'\x1b[0m",
            commits.len(),
            tag
        ),
        None => println!(
            "\n\x1b[1mFound {} commit(s); no previous release tag\x1b[0m",
            commits.len()
        ),
    }

    for (i, commit) in commits.iter().take(10).enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            commit.short_id(),
            truncate_subject(&commit.subject, 60)
        );
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Cap a subject line at `max` characters, never splitting a multibyte
/// character.
fn truncate_subject(subject: &str, max: usize) -> &str {
    match subject.char_indices().nth(max) {
        Some((index, _)) => &subject[..index],
        None => subject,
    }
}

/// Show the computed version change and the bump that produced it.
pub fn display_version_change(current: &Version, next: &Version, bump: &VersionBump) {
    println!("\n\x1b[1mProposed Release ({} bump):\x1b[0m", bump);
    println!("  From: \x1b[31m{}\x1b[0m", current);
    println!("  To:   \x1b[32m{}\x1b[0m", next);
}

pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Final summary: the rendered changelog section plus manual push steps.
pub fn display_release_summary(tag: &str, changelog_section: &str) {
    println!("\n\x1b[32m✓\x1b[0m Release {} completed successfully!\n", tag);
    println!("Summary of changes:\n{}\n", changelog_section);
    println!("Next steps:");
    println!("  1. Push the changes: \x1b[36mgit push\x1b[0m");
    println!("  2. Push the tag:     \x1b[36mgit push origin {}\x1b[0m", tag);
}
