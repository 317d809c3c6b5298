//! AWS region backend: EC2 DescribeRegions / DescribeAvailabilityZones.

pub mod catalog;
pub mod config;
pub mod ec2;

pub use catalog::{AwsAvailabilityZone, AwsCatalog, AwsRegion};
pub use config::AwsConfig;
pub use ec2::AwsRegionProvider;

// Re-export common types from hpc-region
pub use hpc_region::{ProviderError, ProviderKind, ProviderResult, Region, RegionProvider, Zone};
