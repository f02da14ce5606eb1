//! Subcommand implementations.

pub mod api;
pub mod dataset;

use anyhow::{Context, Result};
use clap::Args;

use ferry_core::{AwsCredentials, StoreConfig};
use ferry_store::S3Store;

/// Destination store flags shared by every job.
#[derive(Args, Debug)]
pub struct StoreOpts {
    /// Destination bucket name.
    #[arg(long)]
    pub bucket: String,

    /// Bucket region.
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Custom endpoint for S3-compatible stores (MinIO and friends).
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl StoreOpts {
    /// Read credentials from the environment and open the bucket client.
    ///
    /// Runs before any source fetch so a configuration problem fails the
    /// job without network traffic.
    pub fn open(&self) -> Result<S3Store> {
        let credentials = AwsCredentials::from_env()?;
        let config = StoreConfig {
            bucket: self.bucket.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            credentials,
        };
        S3Store::new(&config)
            .with_context(|| format!("failed to open bucket '{}'", self.bucket))
    }
}
