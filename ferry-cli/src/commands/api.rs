//! `ferry api` — mirror the population API response.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use ferry_core::ObjectKey;
use ferry_source::Fetcher;
use ferry_sync::{sync_api, ApiOutcome};

use crate::commands::StoreOpts;

const DEFAULT_API_URL: &str = "https://honolulu-api.datausa.io/tesseract/data.jsonrecords?cube=acs_yg_total_population_1&drilldowns=Year%2CNation&locale=en&measures=Population";
const DEFAULT_API_KEY: &str = "honolulu-api/yearly_population.json";

/// Arguments for `ferry api`.
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// API endpoint to mirror.
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Object key the payload is stored under.
    #[arg(long, default_value = DEFAULT_API_KEY)]
    pub key: String,

    #[command(flatten)]
    pub store: StoreOpts,

    /// Decide and report without writing to the store.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the report as JSON instead of progress lines.
    #[arg(long)]
    pub json: bool,
}

impl ApiArgs {
    pub fn run(self) -> Result<()> {
        let store = self.store.open()?;
        let fetcher = Fetcher::new();
        let key = ObjectKey::from(self.key);

        let outcome = sync_api(&fetcher, &store, &self.url, &key, self.dry_run)
            .context("api sync failed")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            return Ok(());
        }
        print_outcome(&outcome);
        Ok(())
    }
}

fn print_outcome(outcome: &ApiOutcome) {
    let check = "✓".green();
    match outcome {
        ApiOutcome::UploadedNew { key } => println!("{check} uploaded new object {key}"),
        ApiOutcome::UploadedUpdated { key } => println!("{check} uploaded updated object {key}"),
        ApiOutcome::WouldUploadNew { key } => {
            println!("[dry-run] ~ would upload new object {key}")
        }
        ApiOutcome::WouldUploadUpdated { key } => {
            println!("[dry-run] ~ would upload updated object {key}")
        }
    }
}
