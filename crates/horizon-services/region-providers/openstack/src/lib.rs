//! OpenStack region backend: Keystone regions, Nova availability zones.

use hpc_region::{
    GenericRegionRecord, GenericZoneRecord, HealthStatus, ProviderError, ProviderKind,
    ProviderResult, RegionProvider,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenStackConfig {
    pub auth_url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    pub region_name: String,
}

impl OpenStackConfig {
    pub fn new(auth_url: String, region_name: String) -> Self {
        Self {
            auth_url,
            username: None,
            password: None,
            project_name: None,
            region_name,
        }
    }

    pub fn with_credentials(mut self, username: String, password: String, project: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self.project_name = Some(project);
        self
    }
}

impl Default for OpenStackConfig {
    fn default() -> Self {
        Self::new(
            "http://localhost:5000/v3".to_string(),
            "RegionOne".to_string(),
        )
    }
}

/// Entry of a Keystone `GET /v3/regions` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeystoneRegion {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_region_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneState {
    pub available: bool,
}

/// Entry of a Nova `GET /os-availability-zone` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaAvailabilityZone {
    pub zone_name: String,
    pub zone_state: ZoneState,
}

#[derive(Debug, Deserialize)]
struct KeystoneRegionsResponse {
    #[serde(default)]
    regions: Vec<KeystoneRegion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NovaZonesResponse {
    #[serde(default)]
    availability_zone_info: Vec<NovaAvailabilityZone>,
}

/// Keystone region list plus the Nova zone list of each region's compute
/// endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenStackCatalog {
    #[serde(default)]
    pub regions: Vec<KeystoneRegion>,
    #[serde(default)]
    pub availability_zones: HashMap<String, Vec<NovaAvailabilityZone>>,
}

impl OpenStackCatalog {
    pub fn builtin() -> Self {
        let zone = |name: &str, available: bool| NovaAvailabilityZone {
            zone_name: name.to_string(),
            zone_state: ZoneState { available },
        };

        let regions = vec![
            KeystoneRegion {
                id: "RegionOne".to_string(),
                description: Some("Primary site".to_string()),
                parent_region_id: None,
            },
            KeystoneRegion {
                id: "RegionTwo".to_string(),
                description: Some(String::new()),
                parent_region_id: None,
            },
            KeystoneRegion {
                id: "RegionTwo-Edge".to_string(),
                description: Some("Edge site".to_string()),
                parent_region_id: Some("RegionTwo".to_string()),
            },
        ];

        let mut availability_zones = HashMap::new();
        availability_zones.insert(
            "RegionOne".to_string(),
            vec![zone("nova", true), zone("gpu", true), zone("internal", false)],
        );
        availability_zones.insert("RegionTwo".to_string(), vec![zone("nova", true)]);
        availability_zones.insert(
            "RegionTwo-Edge".to_string(),
            vec![zone("edge-maintenance", false)],
        );

        Self {
            regions,
            availability_zones,
        }
    }

    pub fn from_json(document: &str) -> ProviderResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Build from the Keystone region response alone; zones are added per
    /// region with [`add_zone_response`](Self::add_zone_response).
    pub fn from_regions_response(regions: &str) -> ProviderResult<Self> {
        let response: KeystoneRegionsResponse = serde_json::from_str(regions)?;
        Ok(Self {
            regions: response.regions,
            availability_zones: HashMap::new(),
        })
    }

    pub fn add_zone_response(&mut self, region_id: &str, zones: &str) -> ProviderResult<()> {
        let response: NovaZonesResponse = serde_json::from_str(zones)?;
        self.availability_zones
            .insert(region_id.to_string(), response.availability_zone_info);
        Ok(())
    }
}

pub struct OpenStackRegionProvider {
    config: OpenStackConfig,
    catalog: RwLock<OpenStackCatalog>,
}

impl OpenStackRegionProvider {
    pub async fn new(config: OpenStackConfig) -> ProviderResult<Self> {
        Self::with_catalog(config, OpenStackCatalog::builtin()).await
    }

    pub async fn with_catalog(
        config: OpenStackConfig,
        catalog: OpenStackCatalog,
    ) -> ProviderResult<Self> {
        if config.auth_url.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "openstack auth_url cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            config,
            catalog: RwLock::new(catalog),
        })
    }

    pub fn config(&self) -> &OpenStackConfig {
        &self.config
    }

    pub fn replace_catalog(&self, catalog: OpenStackCatalog) {
        *self.catalog.write() = catalog;
    }

    fn check_credentials(&self) -> ProviderResult<()> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        match (present(&self.config.username), present(&self.config.password)) {
            (true, false) => Err(ProviderError::AuthenticationFailed(
                "keystone password required for username".to_string(),
            )),
            (false, true) => Err(ProviderError::AuthenticationFailed(
                "keystone username required for password".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn to_records(catalog: &OpenStackCatalog) -> Vec<GenericRegionRecord> {
        catalog
            .regions
            .iter()
            .map(|region| {
                let zones: Vec<GenericZoneRecord> = catalog
                    .availability_zones
                    .get(&region.id)
                    .map(|zones| {
                        zones
                            .iter()
                            .filter(|z| z.zone_state.available)
                            .map(|z| {
                                GenericZoneRecord::named(z.zone_name.clone(), Some(region.id.as_str()))
                            })
                            .collect()
                    })
                    .unwrap_or_default();

                GenericRegionRecord::named(region.id.clone()).with_zones(zones)
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RegionProvider for OpenStackRegionProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenStack
    }

    fn name(&self) -> &str {
        "openstack"
    }

    fn configured_region(&self) -> &str {
        &self.config.region_name
    }

    async fn fetch_regions(&self) -> ProviderResult<Vec<GenericRegionRecord>> {
        self.check_credentials()?;

        let catalog = self.catalog.read();
        debug!(
            auth_url = %self.config.auth_url,
            regions = catalog.regions.len(),
            "listing keystone regions"
        );
        Ok(Self::to_records(&catalog))
    }

    async fn health(&self) -> ProviderResult<HealthStatus> {
        let catalog = self.catalog.read();
        let without_compute = catalog
            .regions
            .iter()
            .filter(|r| !catalog.availability_zones.contains_key(&r.id))
            .count();

        if catalog.regions.is_empty() {
            Ok(HealthStatus::unhealthy(format!(
                "keystone at {} returned no regions",
                self.config.auth_url
            )))
        } else if without_compute > 0 {
            Ok(HealthStatus::unhealthy(format!(
                "{} region(s) without a compute endpoint",
                without_compute
            )))
        } else {
            Ok(HealthStatus::healthy("OpenStack identity and compute operational"))
        }
    }
}
