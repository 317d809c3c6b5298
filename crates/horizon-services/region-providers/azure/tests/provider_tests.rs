use futures::TryStreamExt;
use horizon_azure_regions::{AzureCatalog, AzureConfig, AzureRegionProvider};
use hpc_region::{ProviderError, RegionService};
use std::sync::Arc;

const LOCATIONS_RESPONSE: &str = r#"{
    "value": [
        {
            "id": "/subscriptions/sub/locations/swedencentral",
            "name": "swedencentral",
            "displayName": "Sweden Central",
            "regionalDisplayName": "(Europe) Sweden Central",
            "metadata": {"regionType": "Physical", "regionCategory": "Recommended"},
            "availabilityZoneMappings": [
                {"logicalZone": "1", "physicalZone": "swedencentral-az1"},
                {"logicalZone": "2", "physicalZone": "swedencentral-az2"}
            ]
        },
        {
            "id": "/subscriptions/sub/locations/europe",
            "name": "europe",
            "displayName": "Europe",
            "metadata": {"regionType": "Logical", "regionCategory": "Other"}
        },
        {
            "id": "/subscriptions/sub/locations/brazilsoutheast",
            "name": "brazilsoutheast",
            "displayName": "",
            "metadata": {"regionType": "Physical", "regionCategory": "Other"}
        }
    ]
}"#;

async fn builtin_service() -> RegionService {
    let provider = AzureRegionProvider::new(AzureConfig::default()).await.unwrap();
    RegionService::new(Arc::new(provider))
}

#[tokio::test]
async fn test_azure_list_uses_display_names() {
    let service = builtin_service().await;
    let regions = service.list().await.unwrap();
    assert_eq!(regions.len(), 8);
    assert_eq!(regions[0].id(), "eastus");
    assert_eq!(regions[0].name(), "East US");
}

#[tokio::test]
async fn test_azure_stream_matches_list() {
    let service = builtin_service().await;
    let streamed: Vec<_> = service.stream().try_collect().await.unwrap();
    let ids: Vec<&str> = streamed.iter().map(|r| r.id()).collect();
    assert_eq!(ids[0], "eastus");
    assert_eq!(streamed, service.list().await.unwrap());
}

#[tokio::test]
async fn test_azure_find_by_display_name() {
    let service = builtin_service().await;
    let found = service.find("west europe").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), "westeurope");
}

#[tokio::test]
async fn test_azure_current_region() {
    let service = builtin_service().await;
    let current = service.current().await.unwrap();
    assert_eq!(current.id(), "eastus");
    assert_eq!(current.to_string(), "<AzureRegion: eastus>");
}

#[tokio::test]
async fn test_azure_recorded_locations() {
    let catalog = AzureCatalog::from_json(LOCATIONS_RESPONSE).unwrap();
    let config = AzureConfig::new("sub".to_string(), "rg".to_string(), "swedencentral".to_string());
    let provider = AzureRegionProvider::with_catalog(config, catalog).await.unwrap();
    let service = RegionService::new(Arc::new(provider));

    let regions = service.list().await.unwrap();
    let ids: Vec<&str> = regions.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["swedencentral", "brazilsoutheast"]);

    // Blank display name falls back to the location id
    assert_eq!(regions[1].name(), "brazilsoutheast");

    let zones = service.zones("swedencentral").await.unwrap();
    let zone_ids: Vec<&str> = zones.iter().map(|z| z.id()).collect();
    assert_eq!(zone_ids, vec!["swedencentral-1", "swedencentral-2"]);
}

#[tokio::test]
async fn test_azure_logical_location_cannot_be_current() {
    let catalog = AzureCatalog::from_json(LOCATIONS_RESPONSE).unwrap();
    let config = AzureConfig::new("sub".to_string(), "rg".to_string(), "europe".to_string());
    let provider = AzureRegionProvider::with_catalog(config, catalog).await.unwrap();
    let service = RegionService::new(Arc::new(provider));

    assert!(matches!(
        service.current().await,
        Err(ProviderError::NotFound(_))
    ));
}
