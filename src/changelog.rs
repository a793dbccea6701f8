//! Changelog rendering and insertion.
//!
//! Rendering is pure string work; the caller decides where the document lives.
//! New sections always land immediately after the top-level `# Changelog`
//! heading, newest release first.

use crate::conventional::ChangeSet;

const HEADING: &str = "# Changelog";

/// Renders one release section.
///
/// Produces a `## [version] - date` header followed by one subsection per
/// non-empty category, in fixed order: breaking changes, features, bug fixes,
/// performance improvements, other changes.
pub fn render_section(version: &str, changes: &ChangeSet, date: &str) -> String {
    let mut sections = Vec::new();

    if !changes.breaking.is_empty() {
        sections.push(render_subsection("⚠ BREAKING CHANGES", &changes.breaking));
    }
    if !changes.features.is_empty() {
        sections.push(render_subsection("Features", &changes.features));
    }
    if !changes.fixes.is_empty() {
        sections.push(render_subsection("Bug Fixes", &changes.fixes));
    }
    if !changes.performance.is_empty() {
        sections.push(render_subsection(
            "Performance Improvements",
            &changes.performance,
        ));
    }
    if !changes.other.is_empty() {
        sections.push(render_subsection("Other Changes", &changes.other));
    }

    format!("## [{}] - {}\n\n{}", version, date, sections.join("\n\n"))
}

fn render_subsection(title: &str, entries: &[String]) -> String {
    let bullets: Vec<String> = entries.iter().map(|entry| format!("* {}", entry)).collect();
    format!("### {}\n\n{}", title, bullets.join("\n"))
}

/// Splices a rendered section into the changelog document.
///
/// - Document has a `# Changelog` heading: insert right after it, before any
///   existing sections.
/// - Document exists without the heading: prepend the heading and the section.
/// - No document yet (`None`): create heading plus section.
pub fn splice_section(existing: Option<&str>, section: &str) -> String {
    match existing {
        Some(content) => {
            if let Some(pos) = content.find(HEADING) {
                let insert_at = pos + HEADING.len();
                format!(
                    "{}\n\n{}{}",
                    &content[..insert_at],
                    section,
                    &content[insert_at..]
                )
            } else {
                format!("{}\n\n{}\n\n{}", HEADING, section, content)
            }
        }
        None => format!("{}\n\n{}\n", HEADING, section),
    }
}
