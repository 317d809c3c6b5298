//! horizon-regions
//!
//! Usage:
//!   horizon-regions list
//!   horizon-regions get us-east-1
//!   horizon-regions --provider gcp current
//!   horizon-regions -f json zones eastus

use anyhow::Result;
use clap::Parser;
use horizon_region_cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("{}", run(cli).await?);
    Ok(())
}
