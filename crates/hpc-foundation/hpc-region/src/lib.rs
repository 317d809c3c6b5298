//! Provider-agnostic region and zone service.
//!
//! Each cloud backend implements [`RegionProvider`] and hands back vendor-neutral
//! records; [`RegionService`] normalizes them into [`Region`] and [`Zone`] values
//! with the same shape and guarantees regardless of which vendor produced them.

pub mod error;
pub mod normalize;
pub mod service;
pub mod test_data;
pub mod traits;
pub mod types;

pub use error::{ProviderError, ProviderResult};
pub use normalize::{normalize_regions, GenericRegionRecord, GenericZoneRecord};
pub use service::RegionService;
pub use test_data::provider_test_data;
pub use traits::RegionProvider;
pub use types::{HealthStatus, ProviderKind, Region, Zone};
