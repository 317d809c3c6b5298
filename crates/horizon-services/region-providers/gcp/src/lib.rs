//! GCP region backend: Compute Engine `regions.list` / `zones.list`.

use hpc_region::{
    GenericRegionRecord, GenericZoneRecord, HealthStatus, ProviderError, ProviderKind,
    ProviderResult, RegionProvider,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

const COMPUTE_API: &str = "https://www.googleapis.com/compute/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcpConfig {
    pub project_id: String,
    pub zone: String,
    /// Explicit region; derived from `zone` when unset.
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub credentials_path: Option<String>,
}

impl GcpConfig {
    pub fn new(project_id: String, zone: String) -> Self {
        Self {
            project_id,
            zone,
            region: None,
            credentials_path: None,
        }
    }

    pub fn with_region(mut self, region: String) -> Self {
        self.region = Some(region);
        self
    }

    /// `us-central1-a` belongs to `us-central1`.
    pub fn effective_region(&self) -> String {
        if let Some(region) = self.region.as_deref().filter(|r| !r.trim().is_empty()) {
            return region.trim().to_string();
        }
        let zone = self.zone.trim();
        match zone.rsplit_once('-') {
            Some((region, suffix)) if suffix.len() == 1 => region.to_string(),
            _ => zone.to_string(),
        }
    }
}

impl Default for GcpConfig {
    fn default() -> Self {
        Self::new("horizon-sandbox".to_string(), "us-central1-a".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcpRegion {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Fully qualified zone URLs
    #[serde(default)]
    pub zones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcpZone {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Fully qualified region URL
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Payloads served by the sandbox Compute Engine endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GcpCatalog {
    #[serde(default)]
    pub regions: Vec<GcpRegion>,
    #[serde(default)]
    pub zones: Vec<GcpZone>,
}

impl GcpCatalog {
    pub fn builtin(project_id: &str) -> Self {
        let layout: &[(&str, &[&str])] = &[
            ("us-central1", &["a", "b", "c", "f"]),
            ("us-east1", &["a", "b", "c", "d"]),
            ("us-west1", &["a", "b", "c"]),
            ("europe-west1", &["b", "c", "d"]),
            ("europe-west4", &["a", "b", "c"]),
            ("asia-east1", &["a", "b", "c"]),
            ("asia-northeast1", &["a", "b", "c"]),
        ];

        let mut regions = Vec::new();
        let mut zones = Vec::new();
        for (i, (region, suffixes)) in layout.iter().enumerate() {
            let region_url = format!("{}/projects/{}/regions/{}", COMPUTE_API, project_id, region);
            let mut zone_urls = Vec::new();
            for (j, suffix) in suffixes.iter().enumerate() {
                let zone = format!("{}-{}", region, suffix);
                zone_urls.push(format!(
                    "{}/projects/{}/zones/{}",
                    COMPUTE_API, project_id, zone
                ));
                // us-east1-a was retired; the API still lists it as DOWN
                let status = if zone == "us-east1-a" { "DOWN" } else { "UP" };
                zones.push(GcpZone {
                    id: Some((2000 + i * 10 + j).to_string()),
                    name: zone,
                    region: Some(region_url.clone()),
                    status: Some(status.to_string()),
                });
            }
            regions.push(GcpRegion {
                id: Some((1000 + i).to_string()),
                name: region.to_string(),
                description: Some(region.to_string()),
                status: Some("UP".to_string()),
                zones: zone_urls,
            });
        }

        Self { regions, zones }
    }

    pub fn from_json(document: &str) -> ProviderResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Parse raw `regions.list` and `zones.list` responses
    pub fn from_responses(regions: &str, zones: &str) -> ProviderResult<Self> {
        let regions: ListResponse<GcpRegion> = serde_json::from_str(regions)?;
        let zones: ListResponse<GcpZone> = serde_json::from_str(zones)?;
        Ok(Self {
            regions: regions.items,
            zones: zones.items,
        })
    }

    /// Region owning `zone`, from the zone's region URL or the region's zone list.
    pub fn region_of_zone(&self, zone: &str) -> Option<&str> {
        let zone = zone.trim();
        self.zones
            .iter()
            .find(|z| z.name == zone)
            .and_then(|z| z.region.as_deref())
            .map(last_segment)
            .or_else(|| {
                self.regions
                    .iter()
                    .find(|r| r.zones.iter().any(|url| last_segment(url) == zone))
                    .map(|r| r.name.as_str())
            })
    }
}

fn last_segment(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}

pub struct GcpRegionProvider {
    config: GcpConfig,
    current_region: String,
    catalog: RwLock<GcpCatalog>,
}

impl GcpRegionProvider {
    pub async fn new(config: GcpConfig) -> ProviderResult<Self> {
        let catalog = GcpCatalog::builtin(&config.project_id);
        Self::with_catalog(config, catalog).await
    }

    pub async fn with_catalog(config: GcpConfig, catalog: GcpCatalog) -> ProviderResult<Self> {
        if config.project_id.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "gcp project_id cannot be empty".to_string(),
            ));
        }

        let current_region = match config.region.as_deref().map(str::trim) {
            Some(region) if !region.is_empty() => region.to_string(),
            _ => catalog
                .region_of_zone(&config.zone)
                .map(str::to_string)
                .unwrap_or_else(|| config.effective_region()),
        };

        Ok(Self {
            current_region,
            config,
            catalog: RwLock::new(catalog),
        })
    }

    pub fn config(&self) -> &GcpConfig {
        &self.config
    }

    pub fn replace_catalog(&self, catalog: GcpCatalog) {
        *self.catalog.write() = catalog;
    }

    fn check_credentials(&self) -> ProviderResult<()> {
        match self.config.credentials_path.as_deref() {
            Some(path) if !std::path::Path::new(path).exists() => {
                Err(ProviderError::AuthenticationFailed(format!(
                    "service account key {} not found",
                    path
                )))
            }
            _ => Ok(()),
        }
    }

    fn to_records(catalog: &GcpCatalog) -> Vec<GenericRegionRecord> {
        catalog
            .regions
            .iter()
            .map(|region| {
                let listed: Vec<&str> = region.zones.iter().map(|url| last_segment(url)).collect();
                let zones = catalog
                    .zones
                    .iter()
                    .filter(|z| z.status.as_deref() != Some("DOWN"))
                    .filter_map(|z| match z.region.as_deref().map(last_segment) {
                        Some(owner) if owner == region.name => {
                            Some(GenericZoneRecord::named(z.name.clone(), Some(owner)))
                        }
                        Some(_) => None,
                        None if listed.contains(&z.name.as_str()) => {
                            Some(GenericZoneRecord::named(z.name.clone(), None))
                        }
                        None => None,
                    })
                    .collect();

                GenericRegionRecord::named(region.name.clone()).with_zones(zones)
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RegionProvider for GcpRegionProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gcp
    }

    fn name(&self) -> &str {
        "gcp"
    }

    fn configured_region(&self) -> &str {
        &self.current_region
    }

    async fn fetch_regions(&self) -> ProviderResult<Vec<GenericRegionRecord>> {
        self.check_credentials()?;

        let catalog = self.catalog.read();
        debug!(
            project = %self.config.project_id,
            regions = catalog.regions.len(),
            zones = catalog.zones.len(),
            "listing compute regions"
        );
        Ok(Self::to_records(&catalog))
    }

    async fn health(&self) -> ProviderResult<HealthStatus> {
        let catalog = self.catalog.read();
        let down: Vec<&str> = catalog
            .regions
            .iter()
            .filter(|r| r.status.as_deref() == Some("DOWN"))
            .map(|r| r.name.as_str())
            .collect();

        if catalog.regions.is_empty() {
            Ok(HealthStatus::unhealthy("GCP Compute Engine returned no regions"))
        } else if down.is_empty() {
            Ok(HealthStatus::healthy("GCP Compute Engine operational"))
        } else {
            Ok(HealthStatus::unhealthy(format!(
                "GCP regions down: {}",
                down.join(", ")
            )))
        }
    }
}
