use crate::settings::Settings;
use anyhow::{Context, Result};
use horizon_aws_regions::{AwsCatalog, AwsRegionProvider};
use horizon_azure_regions::{AzureCatalog, AzureRegionProvider};
use horizon_gcp_regions::{GcpCatalog, GcpRegionProvider};
use horizon_openstack_regions::{OpenStackCatalog, OpenStackRegionProvider};
use hpc_region::{ProviderKind, RegionProvider, RegionService};
use std::sync::Arc;
use tracing::info;

fn read_catalog(settings: &Settings) -> Result<Option<String>> {
    settings
        .catalog_path
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {:?}", path))
        })
        .transpose()
}

/// Instantiate the backend named by `settings.provider`.
pub async fn build_provider(settings: &Settings) -> Result<Arc<dyn RegionProvider>> {
    let catalog = read_catalog(settings)?;
    if let Some(path) = &settings.catalog_path {
        info!(provider = %settings.provider, catalog = ?path, "using recorded catalog");
    }

    let provider: Arc<dyn RegionProvider> = match settings.provider {
        ProviderKind::Aws => {
            let config = settings.aws.clone();
            Arc::new(match catalog {
                Some(doc) => AwsRegionProvider::with_catalog(config, AwsCatalog::from_json(&doc)?).await?,
                None => AwsRegionProvider::new(config).await?,
            })
        }
        ProviderKind::Gcp => {
            let config = settings.gcp.clone();
            Arc::new(match catalog {
                Some(doc) => GcpRegionProvider::with_catalog(config, GcpCatalog::from_json(&doc)?).await?,
                None => GcpRegionProvider::new(config).await?,
            })
        }
        ProviderKind::Azure => {
            let config = settings.azure.clone();
            Arc::new(match catalog {
                Some(doc) => {
                    AzureRegionProvider::with_catalog(config, AzureCatalog::from_json(&doc)?).await?
                }
                None => AzureRegionProvider::new(config).await?,
            })
        }
        ProviderKind::OpenStack => {
            let config = settings.openstack.clone();
            Arc::new(match catalog {
                Some(doc) => {
                    OpenStackRegionProvider::with_catalog(config, OpenStackCatalog::from_json(&doc)?)
                        .await?
                }
                None => OpenStackRegionProvider::new(config).await?,
            })
        }
    };

    Ok(provider)
}

/// Region service for `settings`, with the current-region override applied.
pub async fn build_service(settings: &Settings) -> Result<RegionService> {
    let service = RegionService::new(build_provider(settings).await?);

    Ok(match settings.current_region.as_deref().map(str::trim) {
        Some(region) if !region.is_empty() => service.with_current_region(region),
        _ => service,
    })
}
