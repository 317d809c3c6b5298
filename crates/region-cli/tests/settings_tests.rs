use horizon_region_cli::settings::{PROVIDER_ENV, REGION_ENV};
use horizon_region_cli::{build_service, Settings};
use hpc_region::ProviderKind;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

const AWS_CATALOG: &str = r#"{
    "Regions": [
        {"RegionName": "eu-south-1", "OptInStatus": "opted-in"},
        {"RegionName": "eu-west-3", "OptInStatus": "opt-in-not-required"}
    ],
    "AvailabilityZones": [
        {"ZoneName": "eu-south-1a", "RegionName": "eu-south-1", "State": "available"},
        {"ZoneName": "eu-west-3a", "RegionName": "eu-west-3", "State": "available"}
    ]
}"#;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_file(
        r#"
provider = "azure"
current_region = "westeurope"

[azure]
subscription_id = "11111111-2222-3333-4444-555555555555"
location = "northeurope"
"#,
    );

    let settings = Settings::load_from(file.path()).unwrap();
    assert_eq!(settings.provider, ProviderKind::Azure);
    assert_eq!(settings.current_region.as_deref(), Some("westeurope"));
    assert_eq!(settings.azure.location, "northeurope");
    assert_eq!(settings.azure.resource_group, "");
}

#[test]
fn test_load_from_missing_file() {
    let err = Settings::load_from("/nonexistent/regions.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_load_from_invalid_file() {
    let file = write_file("provider = [");
    let err = Settings::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
#[serial]
fn test_env_overrides() {
    std::env::set_var(PROVIDER_ENV, "OpenStack");
    std::env::set_var(REGION_ENV, "RegionTwo");

    let mut settings = Settings::default();
    settings.apply_env().unwrap();

    std::env::remove_var(PROVIDER_ENV);
    std::env::remove_var(REGION_ENV);

    assert_eq!(settings.provider, ProviderKind::OpenStack);
    assert_eq!(settings.current_region.as_deref(), Some("RegionTwo"));
}

#[test]
#[serial]
fn test_env_invalid_provider() {
    std::env::set_var(PROVIDER_ENV, "mainframe");
    let mut settings = Settings::default();
    let result = settings.apply_env();
    std::env::remove_var(PROVIDER_ENV);

    assert!(result.is_err());
    assert_eq!(settings.provider, ProviderKind::Aws);
}

#[test]
#[serial]
fn test_env_blank_values_ignored() {
    std::env::set_var(REGION_ENV, "   ");
    let mut settings = Settings::default();
    settings.apply_env().unwrap();
    std::env::remove_var(REGION_ENV);

    assert!(settings.current_region.is_none());
}

#[tokio::test]
async fn test_recorded_catalog_from_settings() {
    let catalog = write_file(AWS_CATALOG);
    let settings = Settings {
        provider: ProviderKind::Aws,
        current_region: Some("eu-west-3".to_string()),
        catalog_path: Some(catalog.path().to_path_buf()),
        ..Settings::default()
    };

    let service = build_service(&settings).await.unwrap();
    let ids: Vec<String> = service
        .list()
        .await
        .unwrap()
        .iter()
        .map(|r| r.id().to_string())
        .collect();
    assert_eq!(ids, vec!["eu-south-1", "eu-west-3"]);
    assert_eq!(service.current().await.unwrap().id(), "eu-west-3");
}

#[tokio::test]
async fn test_recorded_catalog_wrong_format() {
    let catalog = write_file("not json at all");
    let settings = Settings {
        provider: ProviderKind::Gcp,
        catalog_path: Some(catalog.path().to_path_buf()),
        ..Settings::default()
    };

    let err = build_service(&settings).await.unwrap_err();
    assert!(err.to_string().starts_with("Invalid response"));
}
