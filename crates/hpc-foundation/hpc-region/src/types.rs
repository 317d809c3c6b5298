use crate::{ProviderError, ProviderResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Cloud vendor a region service is backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Aws,
    Gcp,
    Azure,
    OpenStack,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Aws,
        ProviderKind::Gcp,
        ProviderKind::Azure,
        ProviderKind::OpenStack,
    ];

    /// Vendor name as it appears in textual representations.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Aws => "AWS",
            ProviderKind::Gcp => "GCP",
            ProviderKind::Azure => "Azure",
            ProviderKind::OpenStack => "OpenStack",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Aws => write!(f, "aws"),
            ProviderKind::Gcp => write!(f, "gcp"),
            ProviderKind::Azure => write!(f, "azure"),
            ProviderKind::OpenStack => write!(f, "openstack"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws" => Ok(ProviderKind::Aws),
            "gcp" | "gce" => Ok(ProviderKind::Gcp),
            "azure" => Ok(ProviderKind::Azure),
            "openstack" => Ok(ProviderKind::OpenStack),
            other => Err(ProviderError::InvalidRequest(format!(
                "unknown provider: {}",
                other
            ))),
        }
    }
}

/// Availability zone inside a region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    id: String,
    name: String,
    region_name: Option<String>,
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        region_name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region_name,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the owning region, when the vendor reports it.
    pub fn region_name(&self) -> Option<&str> {
        self.region_name.as_deref()
    }

    pub fn to_json(&self) -> ProviderResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Zone: {}>", self.id)
    }
}

/// A region as seen through a provider.
///
/// Two regions are equal when they come from the same provider and share an
/// id; names and zone lists are not part of the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    provider: ProviderKind,
    id: String,
    name: String,
    zones: Vec<Zone>,
}

impl Region {
    pub fn new(provider: ProviderKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            provider,
            id: id.into(),
            name: name.into(),
            zones: Vec::new(),
        }
    }

    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == zone_id)
    }

    /// JSON form of the region. The name appears verbatim unless it contains
    /// `"`, `\` or control characters, which are escaped.
    pub fn to_json(&self) -> ProviderResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.provider == other.provider && self.id == other.id
    }
}

impl Eq for Region {}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.provider.hash(state);
        self.id.hash(state);
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}Region: {}>", self.provider.display_name(), self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: String,
    pub checked_at: DateTime<Utc>,
}

impl HealthStatus {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            healthy: true,
            message: message.into(),
            checked_at: Utc::now(),
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: message.into(),
            checked_at: Utc::now(),
        }
    }
}
