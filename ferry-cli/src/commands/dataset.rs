//! `ferry dataset` — sync the BLS time-series directory.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use ferry_core::KeyPrefix;
use ferry_source::{Fetcher, HttpDirectorySource};
use ferry_sync::{sync_dataset, DatasetReport, DeleteOutcome, UploadOutcome};

use crate::commands::StoreOpts;

const DEFAULT_DATASET_URL: &str = "https://download.bls.gov/pub/time.series/pr/";
const DEFAULT_PREFIX: &str = "BLS";

/// Arguments for `ferry dataset`.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Directory-listing URL to mirror.
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    pub url: String,

    /// Key prefix the mirrored files are stored under.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Contact string sent as the User-Agent header on every request (the
    /// BLS access policy requires an identifiable client).
    #[arg(long)]
    pub user_agent: String,

    #[command(flatten)]
    pub store: StoreOpts,

    /// Decide and report without writing to the store.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the report as JSON instead of progress lines.
    #[arg(long)]
    pub json: bool,
}

impl DatasetArgs {
    pub fn run(self) -> Result<()> {
        let store = self.store.open()?;
        let fetcher = Fetcher::with_user_agent(self.user_agent.as_str());
        let source = HttpDirectorySource::new(fetcher, self.url.as_str());
        let prefix = KeyPrefix::new(self.prefix.as_str());

        let report = sync_dataset(&source, &store, &prefix, self.dry_run)
            .with_context(|| format!("dataset sync failed for {}", self.url))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        print_report(&report, self.dry_run);
        Ok(())
    }
}

fn print_report(report: &DatasetReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let deleted = report
        .deletes
        .iter()
        .filter(|outcome| {
            matches!(
                outcome,
                DeleteOutcome::Deleted { .. } | DeleteOutcome::WouldDelete { .. }
            )
        })
        .count();

    println!(
        "{prefix}{} {} uploaded, {} unchanged, {} skipped, {} deleted",
        "✓".green(),
        report.uploaded_count(),
        report.unchanged_count(),
        report.skipped_count(),
        deleted,
    );

    for outcome in &report.uploads {
        match outcome {
            UploadOutcome::UploadedNew { key } => println!("  +  {key}"),
            UploadOutcome::UploadedUpdated { key } => println!("  ✎  {key}"),
            UploadOutcome::Unchanged { key } => println!("  ·  {key}"),
            UploadOutcome::WouldUploadNew { key } => println!("  ~  {key} (new)"),
            UploadOutcome::WouldUploadUpdated { key } => println!("  ~  {key} (updated)"),
            UploadOutcome::Skipped { name, reason } => {
                println!("  {}  {name}: {reason}", "!".red())
            }
        }
    }
    for outcome in &report.deletes {
        match outcome {
            DeleteOutcome::Deleted { key } => println!("  -  {key}"),
            DeleteOutcome::WouldDelete { key } => println!("  ~  {key} (delete)"),
            DeleteOutcome::Failed { key, reason } => {
                println!("  {}  {key}: {reason}", "!".red())
            }
        }
    }
}
