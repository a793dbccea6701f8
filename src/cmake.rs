//! Reading and rewriting the project VERSION in a CMake build file.
//!
//! Only the version numbers inside the `project(...)` declaration are touched;
//! every other byte of the file is preserved.

use regex::Regex;

use crate::error::{ReleaseError, Result};
use crate::version::Version;

/// Extracts the current version from build file content.
///
/// Looks for a `project(<name> ... VERSION <major>.<minor>[.<patch>] ...)`
/// declaration. A missing patch component defaults to 0; the tool always
/// writes back all three components.
///
/// # Arguments
/// * `content` - Full text of the build file
/// * `file_name` - Name used in the error when no version is found
pub fn extract_version(content: &str, file_name: &str) -> Result<Version> {
    let captures = Regex::new(r"project\([^)]*VERSION\s+(\d+)\.(\d+)(?:\.(\d+))?")
        .ok()
        .and_then(|re| re.captures(content))
        .ok_or_else(|| ReleaseError::version_not_found(file_name))?;

    let major = captures
        .get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| ReleaseError::version_not_found(file_name))?;
    let minor = captures
        .get(2)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| ReleaseError::version_not_found(file_name))?;
    let patch = captures
        .get(3)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    Ok(Version::new(major, minor, patch))
}

/// Replaces the version in build file content with the new version.
///
/// Only the first occurrence of the version pattern is rewritten. Both
/// two-component and three-component declarations are matched; the output is
/// always the canonical three-component form.
pub fn replace_version(content: &str, new_version: &Version) -> String {
    match Regex::new(r"(project\([^)]*VERSION\s+)(\d+\.\d+\.\d+|\d+\.\d+)") {
        Ok(re) => re
            .replace(content, |caps: &regex::Captures| {
                format!("{}{}", &caps[1], new_version)
            })
            .into_owned(),
        Err(_) => content.to_string(),
    }
}
