//! Command-line structure for `horizon-regions`.

use clap::{Parser, Subcommand};
use crate::OutputFormat;

/// Query cloud regions and availability zones through one interface
#[derive(Debug, Parser)]
#[command(name = "horizon-regions")]
#[command(version, about, long_about = None)]
#[command(author = "HPC-AI Team")]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Provider backend (aws, gcp, azure, openstack)
    #[arg(short, long, global = true)]
    pub provider: Option<String>,

    /// Region to treat as current
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List every region visible to the configured account
    List,

    /// Show one region and its zones
    Get {
        /// Region id
        id: String,
    },

    /// Find regions by name
    Find {
        /// Region name, case-insensitive
        name: String,
    },

    /// Show the current region
    Current,

    /// List the zones of a region
    Zones {
        /// Region id
        region_id: String,
    },

    /// Check backend health
    Health,
}
