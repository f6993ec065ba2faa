// changelog data structures

use crate::utils::severity::Issue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// label of the section holding not-yet-released changes
pub const UNRELEASED_LABEL: &str = "Unreleased";

/// one `### Category` block within a version section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBlock {
    pub name: String,
    pub entries: Vec<String>, // bullet text, in file order
    pub line_number: usize,
}

impl CategoryBlock {
    pub fn new(name: String, line_number: usize) -> Self {
        Self {
            name,
            entries: Vec::new(),
            line_number,
        }
    }

    pub fn add_entry(&mut self, text: String) {
        self.entries.push(text);
    }

    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// one `## [label]` section of the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionSection {
    pub label: String,
    /// raw date text captured after the ` - ` separator, if any
    pub date: Option<String>,
    pub categories: Vec<CategoryBlock>,
    pub line_number: usize,
}

impl VersionSection {
    pub fn new(label: String, date: Option<String>, line_number: usize) -> Self {
        Self {
            label,
            date,
            categories: Vec::new(),
            line_number,
        }
    }

    pub fn add_category(&mut self, category: CategoryBlock) {
        self.categories.push(category);
    }

    pub fn is_unreleased(&self) -> bool {
        self.label == UNRELEASED_LABEL
    }

    /// true if any category in this section carries at least one entry
    pub fn has_content(&self) -> bool {
        self.categories.iter().any(CategoryBlock::has_entries)
    }
}

/// a `[label]: url` reference definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkReference {
    pub label: String,
    pub url: String,
    pub line_number: usize,
}

/// represents a complete parsed changelog file
///
/// sections preserve file order, newest at the top
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changelog {
    pub path: PathBuf,
    pub header_line: String,
    pub versions: Vec<VersionSection>,
    pub links: Vec<LinkReference>,
    pub has_changelog_reference: bool,
    pub has_semver_reference: bool,
    pub uses_alternate_bullet_markers: bool,
}

impl Changelog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            header_line: String::new(),
            versions: Vec::new(),
            links: Vec::new(),
            has_changelog_reference: false,
            has_semver_reference: false,
            uses_alternate_bullet_markers: false,
        }
    }

    pub fn add_version(&mut self, section: VersionSection) {
        self.versions.push(section);
    }

    pub fn add_link(&mut self, link: LinkReference) {
        self.links.push(link);
    }

    /// first section labeled Unreleased, if any
    pub fn unreleased(&self) -> Option<&VersionSection> {
        self.versions.iter().find(|s| s.is_unreleased())
    }

    pub fn has_link_references(&self) -> bool {
        !self.links.is_empty()
    }

    pub fn link_for(&self, label: &str) -> Option<&LinkReference> {
        self.links.iter().find(|l| l.label == label)
    }
}

/// validation outcome: ordered diagnostics split by severity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// route an issue to the matching severity list, preserving push order
    pub fn push(&mut self, issue: Issue) {
        if issue.is_error() {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
