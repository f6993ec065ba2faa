// example: validate a changelog through the library API
//
// demonstrates how to:
// 1. load configuration
// 2. run the parse-then-validate pipeline
// 3. inspect the parsed model and the diagnostics

use keepcheck::{ChangelogChecker, KeepcheckConfig};

fn main() -> keepcheck::Result<()> {
    let config = KeepcheckConfig::load_or_default(".");
    let path = std::path::PathBuf::from(&config.changelog.changelog_file_name);

    println!("=== Changelog Validation ===\n");
    println!("file: {}\n", path.display());

    let outcome = ChangelogChecker::check_file(&path, &config.changelog)?;

    if let Some(changelog) = &outcome.changelog {
        println!("parsed model:");
        println!("  version sections:     {}", changelog.versions.len());
        println!(
            "  link references:      {}",
            changelog.links.len()
        );
        println!(
            "  convention reference: {}",
            changelog.has_changelog_reference
        );
        println!("  semver reference:     {}\n", changelog.has_semver_reference);

        for section in &changelog.versions {
            let date = section.date.as_deref().unwrap_or("no date");
            println!(
                "  [{}] ({}) - {} categories",
                section.label,
                date,
                section.categories.len()
            );
        }
        println!();
    }

    outcome.display();

    std::process::exit(if outcome.is_valid() { 0 } else { 1 });
}
