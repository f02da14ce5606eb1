//! Ferry — mirror web data sources into an object store.
//!
//! # Usage
//!
//! ```text
//! ferry api --bucket <name> [--url <api-url>] [--key <object-key>] [--dry-run] [--json]
//! ferry dataset --bucket <name> --user-agent <contact> [--url <listing-url>] [--prefix <prefix>] [--dry-run] [--json]
//! ```
//!
//! Credentials come from `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{api::ApiArgs, dataset::DatasetArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "ferry",
    version,
    about = "Mirror a JSON API and a remote file directory into an object store",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload the API's JSON response under a fixed object key.
    Api(ApiArgs),

    /// Sync a remote directory listing under a key prefix (uploads,
    /// updates, deletions).
    Dataset(DatasetArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Api(args) => args.run(),
        Commands::Dataset(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
