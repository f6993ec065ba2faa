use serde::{Deserialize, Serialize};
use std::fmt;

/// severity level for issues detected during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// error-level issue that causes validation to fail
    Error,
    /// warning-level issue that is informational only
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => write!(f, "ERROR"),
            IssueSeverity::Warning => write!(f, "WARN"),
        }
    }
}

/// type of issue detected during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueType {
    /// changelog file is missing
    MissingChangelog,
    /// first line is not the expected changelog header
    MissingHeader,
    /// canonical convention reference is absent
    MissingReference,
    /// no version sections were found at all
    NoVersionSections,
    /// no section is labeled Unreleased
    MissingUnreleased,
    /// released version carries no date
    MissingDate,
    /// release date does not have the YYYY-MM-DD shape
    BadDateFormat,
    /// category name outside the fixed vocabulary
    UnknownCategory,
    /// section or category has no bullet content
    EmptyContent,
    /// alternate list marker used instead of the dash form
    BadListMarker,
    /// comparison link for Unreleased is absent
    MissingComparisonLink,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::MissingChangelog => write!(f, "missing_changelog"),
            IssueType::MissingHeader => write!(f, "missing_header"),
            IssueType::MissingReference => write!(f, "missing_reference"),
            IssueType::NoVersionSections => write!(f, "no_version_sections"),
            IssueType::MissingUnreleased => write!(f, "missing_unreleased"),
            IssueType::MissingDate => write!(f, "missing_date"),
            IssueType::BadDateFormat => write!(f, "bad_date_format"),
            IssueType::UnknownCategory => write!(f, "unknown_category"),
            IssueType::EmptyContent => write!(f, "empty_content"),
            IssueType::BadListMarker => write!(f, "bad_list_marker"),
            IssueType::MissingComparisonLink => write!(f, "missing_comparison_link"),
        }
    }
}

/// structured issue with severity, type, and message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// severity level of the issue
    pub severity: IssueSeverity,
    /// type of the issue
    pub issue_type: IssueType,
    /// human-readable message describing the issue
    pub message: String,
}

impl Issue {
    /// create a new issue
    pub fn new(severity: IssueSeverity, issue_type: IssueType, message: String) -> Self {
        Self {
            severity,
            issue_type,
            message,
        }
    }

    /// shorthand for an error-level issue
    pub fn error(issue_type: IssueType, message: String) -> Self {
        Self::new(IssueSeverity::Error, issue_type, message)
    }

    /// shorthand for a warning-level issue
    pub fn warning(issue_type: IssueType, message: String) -> Self {
        Self::new(IssueSeverity::Warning, issue_type, message)
    }

    /// check if this is an error-level issue
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    /// check if this is a warning-level issue
    pub fn is_warning(&self) -> bool {
        self.severity == IssueSeverity::Warning
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
