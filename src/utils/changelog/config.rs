// changelog configuration

use serde::{Deserialize, Serialize};

/// configuration for changelog validation
///
/// built once at startup and treated as immutable for the rest of the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// name of the changelog file (default: "CHANGELOG.md")
    pub changelog_file_name: String,

    /// required prefix of the first line (default: "# Changelog")
    pub required_header: String,

    /// allowed category names (e.g., ["Added", "Fixed"]), matched exactly
    pub valid_categories: Vec<String>,

    /// substring marking a Keep a Changelog convention reference
    pub changelog_reference_marker: String,

    /// substring marking a Semantic Versioning reference
    pub semver_reference_marker: String,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelog_file_name(mut self, name: impl Into<String>) -> Self {
        self.changelog_file_name = name.into();
        self
    }

    pub fn required_header(mut self, header: impl Into<String>) -> Self {
        self.required_header = header.into();
        self
    }

    pub fn valid_categories(mut self, categories: Vec<String>) -> Self {
        self.valid_categories = categories;
        self
    }

    /// check if a category name is allowed (case-sensitive)
    pub fn is_valid_category(&self, name: &str) -> bool {
        if self.valid_categories.is_empty() {
            return true; // if no restrictions, allow all
        }
        self.valid_categories.iter().any(|c| c == name)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            changelog_file_name: "CHANGELOG.md".to_string(),
            required_header: "# Changelog".to_string(),
            valid_categories: vec![
                "Added".to_string(),
                "Changed".to_string(),
                "Deprecated".to_string(),
                "Removed".to_string(),
                "Fixed".to_string(),
                "Security".to_string(),
            ],
            changelog_reference_marker: "keepachangelog.com".to_string(),
            semver_reference_marker: "semver.org".to_string(),
        }
    }
}
