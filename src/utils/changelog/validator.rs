// changelog rule engine
//
// rules are evaluated independently in a fixed order so the diagnostic
// lists come out deterministic for identical input

use super::config::ChangelogConfig;
use super::types::{Changelog, UNRELEASED_LABEL, ValidationReport};
use crate::utils::severity::{Issue, IssueType};

/// evaluate all rules against a parsed changelog
pub fn validate_changelog(changelog: &Changelog, config: &ChangelogConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    check_header(changelog, config, &mut report);
    check_references(changelog, &mut report);
    check_sections(changelog, &mut report);
    check_unreleased_content(changelog, config, &mut report);
    check_list_markers(changelog, &mut report);
    check_comparison_link(changelog, &mut report);

    report
}

fn check_header(changelog: &Changelog, config: &ChangelogConfig, report: &mut ValidationReport) {
    if !changelog.header_line.starts_with(&config.required_header) {
        report.push(Issue::error(
            IssueType::MissingHeader,
            format!("first line must be '{}'", config.required_header),
        ));
    }
}

fn check_references(changelog: &Changelog, report: &mut ValidationReport) {
    if !changelog.has_changelog_reference {
        report.push(Issue::warning(
            IssueType::MissingReference,
            "missing Keep a Changelog reference".to_string(),
        ));
    }
    if !changelog.has_semver_reference {
        report.push(Issue::warning(
            IssueType::MissingReference,
            "missing Semantic Versioning reference".to_string(),
        ));
    }
}

fn check_sections(changelog: &Changelog, report: &mut ValidationReport) {
    if changelog.versions.is_empty() {
        report.push(Issue::error(
            IssueType::NoVersionSections,
            "no version sections found (expected at least ## [Unreleased])".to_string(),
        ));
        return;
    }

    if changelog.unreleased().is_none() {
        report.push(Issue::error(
            IssueType::MissingUnreleased,
            "missing ## [Unreleased] section".to_string(),
        ));
    }

    for section in &changelog.versions {
        if section.is_unreleased() {
            continue;
        }

        match section.date {
            None => {
                report.push(Issue::warning(
                    IssueType::MissingDate,
                    format!("version [{}] is missing a date", section.label),
                ));
            }
            Some(ref date) => {
                if !has_date_shape(date) {
                    report.push(Issue::error(
                        IssueType::BadDateFormat,
                        format!(
                            "version [{}] has invalid date format: {} (expected YYYY-MM-DD)",
                            section.label, date
                        ),
                    ));
                }
            }
        }
    }
}

fn check_unreleased_content(
    changelog: &Changelog,
    config: &ChangelogConfig,
    report: &mut ValidationReport,
) {
    let Some(section) = changelog.unreleased() else {
        return;
    };

    if section.categories.is_empty() {
        report.push(Issue::warning(
            IssueType::EmptyContent,
            "[Unreleased] section has no categories (Added/Changed/Fixed/etc.)".to_string(),
        ));
        return;
    }

    let invalid: Vec<&str> = section
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| !config.is_valid_category(name))
        .collect();

    if !invalid.is_empty() {
        report.push(Issue::warning(
            IssueType::UnknownCategory,
            format!("invalid categories in [Unreleased]: {}", invalid.join(", ")),
        ));
        report.push(Issue::warning(
            IssueType::UnknownCategory,
            format!("valid categories: {}", config.valid_categories.join(", ")),
        ));
    }

    if !section.has_content() {
        report.push(Issue::warning(
            IssueType::EmptyContent,
            "[Unreleased] section appears to be empty (no bullet points)".to_string(),
        ));
    }
}

fn check_list_markers(changelog: &Changelog, report: &mut ValidationReport) {
    if changelog.uses_alternate_bullet_markers {
        report.push(Issue::warning(
            IssueType::BadListMarker,
            "use '- ' for lists, not '* ' or '+ '".to_string(),
        ));
    }
}

fn check_comparison_link(changelog: &Changelog, report: &mut ValidationReport) {
    // only meaningful once a release exists next to Unreleased; only the
    // Unreleased link is checked
    if changelog.versions.len() < 2 {
        return;
    }

    let has_unreleased_link = changelog
        .link_for(UNRELEASED_LABEL)
        .map(|link| link.url.starts_with("http://") || link.url.starts_with("https://"))
        .unwrap_or(false);

    if !has_unreleased_link {
        report.push(Issue::warning(
            IssueType::MissingComparisonLink,
            "missing comparison link for [Unreleased]".to_string(),
        ));
    }
}

/// shape check only: four digits, dash, two digits, dash, two digits, as a
/// prefix of the value; calendar correctness is out of scope
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 10 {
        return false;
    }
    bytes[..10].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}
