// changelog tokenizer / section extractor

use super::config::ChangelogConfig;
use super::types::{CategoryBlock, Changelog, LinkReference, VersionSection};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// split a `## [label]` header line into label and optional raw date token
///
/// a bare trailing `-` with nothing after it counts as no date
fn split_version_header(line: &str) -> Option<(&str, Option<&str>)> {
    let rest = line.strip_prefix("## [")?;
    let close = rest.find(']')?;
    let label = &rest[..close];
    if label.is_empty() {
        return None;
    }

    let tail = rest[close + 1..].trim_start();
    let date = tail
        .strip_prefix('-')
        .map(str::trim)
        .filter(|token| !token.is_empty());

    Some((label, date))
}

/// split a `### Category` header line into its leading word
fn split_category_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("### ")?;
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// split a `- text` bullet line; the marker must be followed by non-space text
fn split_bullet_entry(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("- ")?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_end())
}

/// split a `[label]: url` reference definition line
fn split_link_reference(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('[')?;
    let sep = rest.find("]: ")?;
    let label = &rest[..sep];
    let url = rest[sep + 3..].trim();
    if url.is_empty() {
        return None;
    }
    Some((label, url))
}

/// parse a changelog file
pub fn parse_changelog<P: AsRef<Path>>(path: P, config: &ChangelogConfig) -> Result<Changelog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(extract_changelog(path, &content, config))
}

/// extract the structured changelog model from raw text
///
/// never fails: malformed input yields a sparsely populated model and the
/// validator reports the absences
pub fn extract_changelog(path: &Path, content: &str, config: &ChangelogConfig) -> Changelog {
    let mut changelog = Changelog::new(path.to_path_buf());

    changelog.header_line = content.lines().next().unwrap_or("").to_string();
    changelog.has_changelog_reference = content.contains(&config.changelog_reference_marker);
    changelog.has_semver_reference = content.contains(&config.semver_reference_marker);

    let mut current_section: Option<VersionSection> = None;
    let mut current_category: Option<CategoryBlock> = None;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;

        if line.starts_with("* ") || line.starts_with("+ ") {
            changelog.uses_alternate_bullet_markers = true;
        }

        if let Some((label, date)) = split_version_header(line) {
            if let Some(category) = current_category.take()
                && let Some(ref mut section) = current_section
            {
                section.add_category(category);
            }
            if let Some(section) = current_section.take() {
                changelog.add_version(section);
            }
            current_section = Some(VersionSection::new(
                label.to_string(),
                date.map(str::to_string),
                line_number,
            ));
            continue;
        }

        if let Some(name) = split_category_header(line) {
            // category headers outside any version section are ignored
            if let Some(ref mut section) = current_section {
                if let Some(category) = current_category.take() {
                    section.add_category(category);
                }
                current_category = Some(CategoryBlock::new(name.to_string(), line_number));
            }
            continue;
        }

        if let Some(text) = split_bullet_entry(line) {
            if let Some(ref mut category) = current_category {
                category.add_entry(text.to_string());
            }
            continue;
        }

        if let Some((label, url)) = split_link_reference(line) {
            changelog.add_link(LinkReference {
                label: label.to_string(),
                url: url.to_string(),
                line_number,
            });
            continue;
        }

        // anything else is prose or blank space, skip
    }

    if let Some(category) = current_category.take()
        && let Some(ref mut section) = current_section
    {
        section.add_category(category);
    }
    if let Some(section) = current_section.take() {
        changelog.add_version(section);
    }

    changelog
}
