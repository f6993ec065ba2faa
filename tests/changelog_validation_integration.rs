use keepcheck::{ChangelogChecker, ChangelogConfig, IssueType};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_changelog(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("CHANGELOG.md");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_minimal_valid_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_changelog(
        &temp_dir,
        "# Changelog\n\n## [Unreleased]\n### Added\n- New feature\n",
    );

    let config = ChangelogConfig::default();
    let outcome = ChangelogChecker::check_file(&path, &config).unwrap();

    assert!(outcome.is_valid());
    assert!(outcome.report.errors.is_empty());

    // only one section, so the comparison-link check is skipped
    let warning_messages: Vec<&str> = outcome
        .report
        .warnings
        .iter()
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(
        warning_messages,
        vec![
            "missing Keep a Changelog reference",
            "missing Semantic Versioning reference",
        ]
    );
}

#[test]
fn test_released_version_without_unreleased() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_changelog(
        &temp_dir,
        "# Changelog\n\n## [1.0.0] - 2024-13-45\n### Added\n- X\n",
    );

    let config = ChangelogConfig::default();
    let outcome = ChangelogChecker::check_file(&path, &config).unwrap();

    assert!(!outcome.is_valid());
    assert!(
        outcome
            .report
            .errors
            .iter()
            .any(|i| i.issue_type == IssueType::MissingUnreleased)
    );
    // the date check is shape-only, an impossible calendar date still passes
    assert!(
        !outcome
            .report
            .errors
            .iter()
            .any(|i| i.issue_type == IssueType::BadDateFormat)
    );
}

#[test]
fn test_missing_header_fails_regardless_of_other_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_changelog(
        &temp_dir,
        "Release notes\n\n## [Unreleased]\n### Added\n- Everything else is fine\n",
    );

    let config = ChangelogConfig::default();
    let outcome = ChangelogChecker::check_file(&path, &config).unwrap();

    assert!(!outcome.is_valid());
    assert!(
        outcome
            .report
            .errors
            .iter()
            .any(|i| i.issue_type == IssueType::MissingHeader)
    );
}

#[test]
fn test_alternate_bullet_marker_warns_without_failing() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_changelog(
        &temp_dir,
        "# Changelog\n\n## [Unreleased]\n### Added\n- Proper entry\n* Did something\n",
    );

    let config = ChangelogConfig::default();
    let outcome = ChangelogChecker::check_file(&path, &config).unwrap();

    assert!(outcome.is_valid());
    assert!(
        outcome
            .report
            .warnings
            .iter()
            .any(|i| i.message == "use '- ' for lists, not '* ' or '+ '")
    );
}

#[test]
fn test_missing_file_is_a_single_error_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("CHANGELOG.md");

    let config = ChangelogConfig::default();
    let outcome = ChangelogChecker::check_file(&path, &config).unwrap();

    assert!(!outcome.is_valid());
    assert!(outcome.changelog.is_none());
    assert_eq!(outcome.report.error_count(), 1);
    assert_eq!(
        outcome.report.errors[0].issue_type,
        IssueType::MissingChangelog
    );
}

#[test]
fn test_validation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_changelog(
        &temp_dir,
        "# Changelog\n\n## [Unreleased]\n### Invalid\n- Something\n\n## [0.1.0]\n",
    );

    let config = ChangelogConfig::default();
    let first = ChangelogChecker::check_file(&path, &config).unwrap();
    let second = ChangelogChecker::check_file(&path, &config).unwrap();

    assert_eq!(first.is_valid(), second.is_valid());
    let msgs = |issues: &[keepcheck::Issue]| {
        issues
            .iter()
            .map(|i| i.message.clone())
            .collect::<Vec<String>>()
    };
    assert_eq!(msgs(&first.report.errors), msgs(&second.report.errors));
    assert_eq!(msgs(&first.report.warnings), msgs(&second.report.warnings));
}

#[test]
fn test_full_compliant_document_round() {
    let temp_dir = TempDir::new().unwrap();
    let content = "\
# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).

## [Unreleased]

### Added

- Streaming uploads

### Fixed

- Wrong content type on empty responses

## [1.1.0] - 2024-06-02

### Changed

- Switched default port to 8080

## [1.0.0] - 2024-01-15

### Added

- Initial release

[Unreleased]: https://github.com/acme/demo/compare/v1.1.0...HEAD
[1.1.0]: https://github.com/acme/demo/compare/v1.0.0...v1.1.0
[1.0.0]: https://github.com/acme/demo/releases/tag/v1.0.0
";
    let path = write_changelog(&temp_dir, content);

    let config = ChangelogConfig::default();
    let outcome = ChangelogChecker::check_file(&path, &config).unwrap();

    assert!(outcome.is_valid());
    assert_eq!(outcome.report.total_issues(), 0);

    let changelog = outcome.changelog.as_ref().unwrap();
    assert_eq!(changelog.versions.len(), 3);
    assert_eq!(changelog.versions[0].label, "Unreleased");
    assert_eq!(changelog.versions[1].label, "1.1.0");
    assert_eq!(changelog.versions[2].label, "1.0.0");
    assert!(changelog.has_link_references());
}

#[test]
fn test_json_summary_shape() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_changelog(&temp_dir, "# Changelog\n\n## [Unreleased]\n");

    let config = ChangelogConfig::default();
    let outcome = ChangelogChecker::check_file(&path, &config).unwrap();
    let json = outcome.to_json();

    assert_eq!(json["valid"], true);
    assert_eq!(json["error_count"], 0);
    assert_eq!(json["sections"], 1);
    assert_eq!(json["has_link_references"], false);
    assert!(json["warnings"].as_array().unwrap().len() >= 2);
}
