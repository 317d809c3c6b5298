//! Azure region backend: ARM `subscriptions/{id}/locations`.

use hpc_region::{
    GenericRegionRecord, GenericZoneRecord, HealthStatus, ProviderError, ProviderKind,
    ProviderResult, RegionProvider,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureConfig {
    pub subscription_id: String,
    #[serde(default)]
    pub resource_group: String,
    pub location: String,
}

impl AzureConfig {
    pub fn new(subscription_id: String, resource_group: String, location: String) -> Self {
        Self {
            subscription_id,
            resource_group,
            location,
        }
    }
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self::new(
            "00000000-0000-0000-0000-000000000000".to_string(),
            "horizon-rg".to_string(),
            "eastus".to_string(),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMetadata {
    #[serde(default)]
    pub region_type: Option<String>,
    #[serde(default)]
    pub region_category: Option<String>,
    #[serde(default)]
    pub geography_group: Option<String>,
    #[serde(default)]
    pub physical_location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityZoneMapping {
    pub logical_zone: String,
    #[serde(default)]
    pub physical_zone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureLocation {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub regional_display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<LocationMetadata>,
    #[serde(default)]
    pub availability_zone_mappings: Vec<AvailabilityZoneMapping>,
}

impl AzureLocation {
    fn is_logical(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.region_type.as_deref())
            .is_some_and(|t| t.eq_ignore_ascii_case("Logical"))
    }
}

/// Locations served by the sandbox ARM endpoint. Serialized as the raw
/// `{"value": [...]}` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AzureCatalog {
    #[serde(default)]
    pub value: Vec<AzureLocation>,
}

impl AzureCatalog {
    pub fn builtin(subscription_id: &str) -> Self {
        let layout: &[(&str, &str, &str, u8)] = &[
            ("eastus", "East US", "Virginia", 3),
            ("eastus2", "East US 2", "Virginia", 3),
            ("westus", "West US", "California", 0),
            ("westus2", "West US 2", "Washington", 3),
            ("northeurope", "North Europe", "Ireland", 3),
            ("westeurope", "West Europe", "Netherlands", 3),
            ("southeastasia", "Southeast Asia", "Singapore", 3),
            ("japaneast", "Japan East", "Tokyo, Saitama", 3),
        ];

        let mut value: Vec<AzureLocation> = layout
            .iter()
            .map(|(name, display, physical, zones)| AzureLocation {
                id: Some(format!(
                    "/subscriptions/{}/locations/{}",
                    subscription_id, name
                )),
                name: name.to_string(),
                display_name: Some(display.to_string()),
                regional_display_name: Some(display.to_string()),
                metadata: Some(LocationMetadata {
                    region_type: Some("Physical".to_string()),
                    region_category: Some("Recommended".to_string()),
                    geography_group: None,
                    physical_location: Some(physical.to_string()),
                }),
                availability_zone_mappings: (1..=*zones)
                    .map(|z| AvailabilityZoneMapping {
                        logical_zone: z.to_string(),
                        physical_zone: Some(format!("{}-az{}", name, z)),
                    })
                    .collect(),
            })
            .collect();

        for (name, display) in [("global", "Global"), ("unitedstates", "United States")] {
            value.push(AzureLocation {
                id: Some(format!(
                    "/subscriptions/{}/locations/{}",
                    subscription_id, name
                )),
                name: name.to_string(),
                display_name: Some(display.to_string()),
                regional_display_name: None,
                metadata: Some(LocationMetadata {
                    region_type: Some("Logical".to_string()),
                    region_category: Some("Other".to_string()),
                    ..Default::default()
                }),
                availability_zone_mappings: Vec::new(),
            });
        }

        Self { value }
    }

    pub fn from_json(document: &str) -> ProviderResult<Self> {
        Ok(serde_json::from_str(document)?)
    }
}

pub struct AzureRegionProvider {
    config: AzureConfig,
    catalog: RwLock<AzureCatalog>,
}

impl AzureRegionProvider {
    pub async fn new(config: AzureConfig) -> ProviderResult<Self> {
        let catalog = AzureCatalog::builtin(&config.subscription_id);
        Self::with_catalog(config, catalog).await
    }

    pub async fn with_catalog(config: AzureConfig, catalog: AzureCatalog) -> ProviderResult<Self> {
        if config.location.trim().is_empty() {
            return Err(ProviderError::Configuration(
                "azure location cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            config,
            catalog: RwLock::new(catalog),
        })
    }

    pub fn config(&self) -> &AzureConfig {
        &self.config
    }

    pub fn replace_catalog(&self, catalog: AzureCatalog) {
        *self.catalog.write() = catalog;
    }

    fn to_records(catalog: &AzureCatalog) -> Vec<GenericRegionRecord> {
        catalog
            .value
            .iter()
            .filter(|location| {
                let logical = location.is_logical();
                if logical {
                    debug!(location = %location.name, "skipping logical location");
                }
                !logical
            })
            .map(|location| {
                let zones = if location.availability_zone_mappings.is_empty() {
                    vec![GenericZoneRecord::named(
                        location.name.clone(),
                        Some(location.name.as_str()),
                    )]
                } else {
                    location
                        .availability_zone_mappings
                        .iter()
                        .map(|m| {
                            GenericZoneRecord::named(
                                format!("{}-{}", location.name, m.logical_zone.trim()),
                                Some(location.name.as_str()),
                            )
                        })
                        .collect()
                };

                GenericRegionRecord {
                    id: Some(location.name.clone()),
                    name: location.display_name.clone(),
                    zones,
                }
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RegionProvider for AzureRegionProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Azure
    }

    fn name(&self) -> &str {
        "azure"
    }

    fn configured_region(&self) -> &str {
        &self.config.location
    }

    async fn fetch_regions(&self) -> ProviderResult<Vec<GenericRegionRecord>> {
        if self.config.subscription_id.trim().is_empty() {
            return Err(ProviderError::AuthenticationFailed(
                "subscription id is required to list locations".to_string(),
            ));
        }

        let catalog = self.catalog.read();
        debug!(
            subscription = %self.config.subscription_id,
            locations = catalog.value.len(),
            "listing subscription locations"
        );
        Ok(Self::to_records(&catalog))
    }

    async fn health(&self) -> ProviderResult<HealthStatus> {
        if self.catalog.read().value.is_empty() {
            Ok(HealthStatus::unhealthy("Azure Resource Manager returned no locations"))
        } else {
            Ok(HealthStatus::healthy("Azure Resource Manager operational"))
        }
    }
}
