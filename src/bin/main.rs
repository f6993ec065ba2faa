use anyhow::{Context, Result};
use clap::Parser;
use keepcheck::{ChangelogChecker, KeepcheckConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keepcheck")]
#[command(version, about = "Keep a Changelog format validator", long_about = None)]
struct Cli {
    /// path to the changelog file (defaults to the configured file name)
    path: Option<PathBuf>,

    /// output format (json or human)
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = KeepcheckConfig::load_or_default(".");
    let path = cli
        .path
        .unwrap_or_else(|| PathBuf::from(&config.changelog.changelog_file_name));

    let outcome = ChangelogChecker::check_file(&path, &config.changelog)
        .with_context(|| format!("failed to validate {}", path.display()))?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
        }
        OutputFormat::Human => {
            println!("validating {}", path.display());
            println!();
            outcome.display();
        }
    }

    // non-zero exit code on any error-level issue
    if !outcome.is_valid() {
        anyhow::bail!(
            "validation failed with {} error(s)",
            outcome.report.error_count()
        );
    }

    Ok(())
}
