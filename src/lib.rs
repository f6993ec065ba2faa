pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    CategoryBlock, Changelog, ChangelogConfig, LinkReference, UNRELEASED_LABEL, ValidationReport,
    VersionSection, extract_changelog, parse_changelog, validate_changelog,
};
pub use utils::changelog_checker::{ChangelogChecker, ValidationOutcome};
pub use utils::config::KeepcheckConfig;
pub use utils::severity::{Issue, IssueSeverity, IssueType};
