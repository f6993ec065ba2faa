use crate::error::Result;
use crate::utils::changelog::{
    Changelog, ChangelogConfig, ValidationReport, parse_changelog, validate_changelog,
};
use crate::utils::severity::{Issue, IssueType};
use std::path::Path;

/// outcome of validating a single changelog file
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// parsed model, absent when the file did not exist
    pub changelog: Option<Changelog>,
    pub report: ValidationReport,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// render the report: warnings first, then errors, then a status line
    pub fn display(&self) {
        for warning in &self.report.warnings {
            println!("{}", warning);
        }

        if !self.report.errors.is_empty() {
            if !self.report.warnings.is_empty() {
                println!();
            }
            for error in &self.report.errors {
                println!("{}", error);
            }
        }

        if self.report.total_issues() > 0 {
            println!();
        }

        if !self.report.is_valid() {
            println!("[ERROR] changelog validation failed");
        } else if !self.report.warnings.is_empty() {
            println!("[WARN] changelog is valid with warnings");
        } else {
            println!("[OK] changelog format is valid");
        }
    }

    /// machine-readable summary of the run
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.report.is_valid(),
            "error_count": self.report.error_count(),
            "warning_count": self.report.warning_count(),
            "errors": self.report.errors,
            "warnings": self.report.warnings,
            "sections": self.changelog.as_ref().map(|c| c.versions.len()),
            "has_link_references": self.changelog.as_ref().map(|c| c.has_link_references()),
        })
    }
}

/// changelog checker driving the parse-then-validate pipeline
pub struct ChangelogChecker;

impl ChangelogChecker {
    /// validate a changelog file on disk
    ///
    /// a missing file is itself a diagnostic, not a hard failure
    pub fn check_file<P: AsRef<Path>>(
        path: P,
        config: &ChangelogConfig,
    ) -> Result<ValidationOutcome> {
        let path = path.as_ref();

        if !path.exists() {
            let mut report = ValidationReport::new();
            report.push(Issue::error(
                IssueType::MissingChangelog,
                format!("{} not found", path.display()),
            ));
            return Ok(ValidationOutcome {
                changelog: None,
                report,
            });
        }

        let changelog = parse_changelog(path, config)?;
        let report = validate_changelog(&changelog, config);

        Ok(ValidationOutcome {
            changelog: Some(changelog),
            report,
        })
    }

    /// validate raw text, for callers that already hold the content
    pub fn check_content(path: &Path, content: &str, config: &ChangelogConfig) -> ValidationOutcome {
        let changelog = crate::utils::changelog::extract_changelog(path, content, config);
        let report = validate_changelog(&changelog, config);
        ValidationOutcome {
            changelog: Some(changelog),
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_check_content_reports_without_touching_disk() {
        let config = ChangelogConfig::default();
        let path = PathBuf::from("CHANGELOG.md");

        let outcome = ChangelogChecker::check_content(
            &path,
            "# Changelog\n\n## [Unreleased]\n### Added\n- New feature\n",
            &config,
        );

        assert!(outcome.is_valid());
        assert!(outcome.changelog.is_some());
        assert_eq!(outcome.report.error_count(), 0);
    }

    #[test]
    fn test_check_content_routes_errors() {
        let config = ChangelogConfig::default();
        let path = PathBuf::from("CHANGELOG.md");

        let outcome = ChangelogChecker::check_content(&path, "no structure at all\n", &config);

        assert!(!outcome.is_valid());
        let json = outcome.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["sections"], 0);
    }
}
