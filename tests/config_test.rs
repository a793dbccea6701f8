// tests/config_test.rs
use cmake_release::config::{load_config, Config};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.files.build, "CMakeLists.txt");
    assert_eq!(config.files.changelog, "CHANGELOG.md");
    assert_eq!(config.release.tag_prefix, "v");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[files]
build = "cmake/project.cmake"
changelog = "docs/CHANGELOG.md"

[release]
tag_prefix = "release-"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.files.build, "cmake/project.cmake");
    assert_eq!(config.files.changelog, "docs/CHANGELOG.md");
    assert_eq!(config.release.tag_prefix, "release-");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[files]\nbuild = \"other.cmake\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.files.build, "other.cmake");
    assert_eq!(config.files.changelog, "CHANGELOG.md");
    assert_eq!(config.release.tag_prefix, "v");
}

#[test]
fn test_load_missing_explicit_path_fails() {
    let result = load_config(Some("/nonexistent/cmakerelease.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("cmakerelease.toml"),
        "[release]\ntag_prefix = \"x\"\n",
    )
    .unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let result = load_config(None);

    std::env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.release.tag_prefix, "x");
}

#[test]
#[serial]
fn test_load_without_any_file_uses_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp_dir.path()).unwrap();

    let result = load_config(None);

    std::env::set_current_dir(original_dir).unwrap();

    // Unless the user config dir happens to carry a .cmakerelease.toml,
    // this falls through to defaults
    let config = result.unwrap();
    assert_eq!(config.files.build, "CMakeLists.txt");
}
