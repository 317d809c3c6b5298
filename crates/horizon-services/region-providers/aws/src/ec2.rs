use crate::catalog::AwsCatalog;
use crate::config::AwsConfig;
use hpc_region::{
    GenericRegionRecord, GenericZoneRecord, HealthStatus, ProviderError, ProviderKind,
    ProviderResult, RegionProvider,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

const NOT_OPTED_IN: &str = "not-opted-in";
const ZONE_AVAILABLE: &str = "available";

pub struct AwsRegionProvider {
    config: AwsConfig,
    catalog: RwLock<AwsCatalog>,
}

impl AwsRegionProvider {
    pub async fn new(config: AwsConfig) -> ProviderResult<Self> {
        Self::with_catalog(config, AwsCatalog::builtin()).await
    }

    pub async fn with_catalog(config: AwsConfig, catalog: AwsCatalog) -> ProviderResult<Self> {
        if config.region.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "aws region cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            config,
            catalog: RwLock::new(catalog),
        })
    }

    pub fn config(&self) -> &AwsConfig {
        &self.config
    }

    /// Swap the payloads the sandbox endpoint serves.
    pub fn replace_catalog(&self, catalog: AwsCatalog) {
        *self.catalog.write() = catalog;
    }

    fn to_records(catalog: &AwsCatalog) -> Vec<GenericRegionRecord> {
        let mut zones_by_region: HashMap<&str, Vec<GenericZoneRecord>> = HashMap::new();
        for zone in &catalog.availability_zones {
            if zone.state.as_deref() != Some(ZONE_AVAILABLE) {
                debug!(zone = ?zone.zone_name, state = ?zone.state, "skipping zone");
                continue;
            }
            let Some(region_name) = zone.region_name.as_deref() else {
                debug!(zone = ?zone.zone_name, "skipping zone without region");
                continue;
            };
            zones_by_region
                .entry(region_name)
                .or_default()
                .push(GenericZoneRecord {
                    id: zone.zone_name.clone(),
                    name: zone.zone_name.clone(),
                    region_name: Some(region_name.to_string()),
                });
        }

        catalog
            .regions
            .iter()
            .filter(|r| r.opt_in_status.as_deref() != Some(NOT_OPTED_IN))
            .map(|r| {
                let zones = zones_by_region
                    .get(r.region_name.as_str())
                    .cloned()
                    .unwrap_or_default();
                GenericRegionRecord::named(r.region_name.clone()).with_zones(zones)
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RegionProvider for AwsRegionProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Aws
    }

    fn name(&self) -> &str {
        "aws"
    }

    fn configured_region(&self) -> &str {
        &self.config.region
    }

    async fn fetch_regions(&self) -> ProviderResult<Vec<GenericRegionRecord>> {
        self.config.check_credentials()?;

        let catalog = self.catalog.read();
        debug!(
            regions = catalog.regions.len(),
            zones = catalog.availability_zones.len(),
            "describing EC2 regions"
        );
        Ok(Self::to_records(&catalog))
    }

    async fn health(&self) -> ProviderResult<HealthStatus> {
        let endpoint = self
            .config
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("ec2.{}.amazonaws.com", self.config.region));

        if self.catalog.read().regions.is_empty() {
            Ok(HealthStatus::unhealthy(format!(
                "{} returned no regions",
                endpoint
            )))
        } else {
            Ok(HealthStatus::healthy(format!("AWS EC2 {} operational", endpoint)))
        }
    }
}
