use futures::TryStreamExt;
use horizon_gcp_regions::{GcpCatalog, GcpConfig, GcpRegionProvider};
use hpc_region::{ProviderError, RegionService};
use std::sync::Arc;

const REGIONS_RESPONSE: &str = r#"{
    "kind": "compute#regionList",
    "items": [
        {
            "id": "1290",
            "name": "northamerica-northeast1",
            "description": "northamerica-northeast1",
            "status": "UP",
            "zones": [
                "https://www.googleapis.com/compute/v1/projects/demo/zones/northamerica-northeast1-a",
                "https://www.googleapis.com/compute/v1/projects/demo/zones/northamerica-northeast1-b"
            ]
        },
        {
            "id": "1300",
            "name": "southamerica-east1",
            "status": "UP",
            "zones": []
        }
    ]
}"#;

const ZONES_RESPONSE: &str = r#"{
    "kind": "compute#zoneList",
    "items": [
        {"id": "2290", "name": "northamerica-northeast1-a", "status": "UP",
         "region": "https://www.googleapis.com/compute/v1/projects/demo/regions/northamerica-northeast1"},
        {"id": "2291", "name": "northamerica-northeast1-b", "status": "UP"},
        {"id": "2300", "name": "southamerica-east1-a", "status": "UP",
         "region": "https://www.googleapis.com/compute/v1/projects/demo/regions/southamerica-east1"}
    ]
}"#;

#[tokio::test]
async fn test_gcp_list_regions() {
    let provider = GcpRegionProvider::new(GcpConfig::default()).await.unwrap();
    let service = RegionService::new(Arc::new(provider));

    let regions = service.list().await.unwrap();
    assert_eq!(regions.len(), 7);
    assert_eq!(regions[0].id(), "us-central1");
    assert_eq!(regions[0].zones().len(), 4);
    assert!(regions[0]
        .zones()
        .iter()
        .all(|z| z.region_name() == Some("us-central1")));
}

#[tokio::test]
async fn test_gcp_stream_matches_list() {
    let provider = GcpRegionProvider::new(GcpConfig::default()).await.unwrap();
    let service = RegionService::new(Arc::new(provider));

    let streamed: Vec<_> = service.stream().try_collect().await.unwrap();
    assert_eq!(streamed, service.list().await.unwrap());
}

#[tokio::test]
async fn test_gcp_current_region_from_zone() {
    let config = GcpConfig::new("demo".to_string(), "europe-west4-c".to_string());
    let provider = GcpRegionProvider::new(config).await.unwrap();
    let service = RegionService::new(Arc::new(provider));

    let current = service.current().await.unwrap();
    assert_eq!(current.id(), "europe-west4");
    assert!(service.list().await.unwrap().contains(&current));
}

#[tokio::test]
async fn test_gcp_recorded_responses() {
    let catalog = GcpCatalog::from_responses(REGIONS_RESPONSE, ZONES_RESPONSE).unwrap();
    let config = GcpConfig::new("demo".to_string(), "southamerica-east1-a".to_string());
    let provider = GcpRegionProvider::with_catalog(config, catalog).await.unwrap();
    let service = RegionService::new(Arc::new(provider));

    let regions = service.list().await.unwrap();
    assert_eq!(regions.len(), 2);

    let zones = regions[0].zones();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].region_name(), Some("northamerica-northeast1"));
    assert_eq!(zones[1].id(), "northamerica-northeast1-b");
    assert_eq!(zones[1].region_name(), None);

    assert_eq!(service.current().await.unwrap().id(), "southamerica-east1");
}

#[tokio::test]
async fn test_gcp_malformed_response() {
    let result = GcpCatalog::from_responses("{\"items\": 42}", ZONES_RESPONSE);
    assert!(matches!(result, Err(ProviderError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_gcp_region_json_contains_name() {
    let provider = GcpRegionProvider::new(GcpConfig::default()).await.unwrap();
    let service = RegionService::new(Arc::new(provider));

    let region = service.get("asia-east1").await.unwrap().unwrap();
    let json = region.to_json().unwrap();
    assert!(json.contains(region.name()));
    assert!(region.to_string().contains("asia-east1"));
}
