// changelog validation module

pub mod config;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::ChangelogConfig;
pub use parser::{extract_changelog, parse_changelog};
pub use types::{
    CategoryBlock, Changelog, LinkReference, UNRELEASED_LABEL, ValidationReport, VersionSection,
};
pub use validator::validate_changelog;
