//! Region service settings
//!
//! Loaded from `~/.hpc/regions.toml` (or an explicit path), then overridden
//! by `HPC_REGION_PROVIDER` / `HPC_REGION` and finally by command-line flags.

use anyhow::{Context, Result};
use horizon_aws_regions::AwsConfig;
use horizon_azure_regions::AzureConfig;
use horizon_gcp_regions::GcpConfig;
use horizon_openstack_regions::OpenStackConfig;
use hpc_region::ProviderKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROVIDER_ENV: &str = "HPC_REGION_PROVIDER";
pub const REGION_ENV: &str = "HPC_REGION";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend to query
    pub provider: ProviderKind,
    /// Overrides the backend's configured region when resolving `current`
    pub current_region: Option<String>,
    /// Recorded catalog document served instead of the built-in sandbox data
    pub catalog_path: Option<PathBuf>,
    pub aws: AwsConfig,
    pub gcp: GcpConfig,
    pub azure: AzureConfig,
    pub openstack: OpenStackConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Aws,
            current_region: None,
            catalog_path: None,
            aws: AwsConfig::default(),
            gcp: GcpConfig::default(),
            azure: AzureConfig::default(),
            openstack: OpenStackConfig::default(),
        }
    }
}

impl Settings {
    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hpc")
            .join("regions.toml")
    }

    /// Load settings from the default file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings")
    }

    /// Apply `HPC_REGION_PROVIDER` and `HPC_REGION` when set.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(provider) = non_empty_env(PROVIDER_ENV) {
            self.provider = provider
                .parse()
                .with_context(|| format!("Invalid {}", PROVIDER_ENV))?;
        }
        if let Some(region) = non_empty_env(REGION_ENV) {
            self.current_region = Some(region);
        }
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
