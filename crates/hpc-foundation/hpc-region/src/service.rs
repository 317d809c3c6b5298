//! Stateless query facade over a [`RegionProvider`].

use crate::normalize::normalize_regions;
use crate::{HealthStatus, ProviderError, ProviderKind, ProviderResult, Region, RegionProvider, Zone};
use futures::future;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use tracing::debug;

/// Region service
///
/// Every call queries the backend afresh; nothing is cached between calls.
#[derive(Clone)]
pub struct RegionService {
    provider: Arc<dyn RegionProvider>,
    current_override: Option<String>,
}

impl RegionService {
    pub fn new(provider: Arc<dyn RegionProvider>) -> Self {
        Self {
            provider,
            current_override: None,
        }
    }

    /// Resolve [`current`](Self::current) to `region_id` instead of the
    /// backend's configured region.
    pub fn with_current_region(mut self, region_id: impl Into<String>) -> Self {
        self.current_override = Some(region_id.into());
        self
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// List every region visible to the configured account, in vendor order.
    pub async fn list(&self) -> ProviderResult<Vec<Region>> {
        debug!(provider = %self.provider.name(), "listing regions");
        let records = self.provider.fetch_regions().await?;
        Ok(normalize_regions(self.provider.kind(), records))
    }

    /// Lazily yield the same sequence as [`list`](Self::list).
    ///
    /// The backend is not queried until the stream is first polled. A failed
    /// query is yielded as a single `Err` item.
    pub fn stream(&self) -> BoxStream<'_, ProviderResult<Region>> {
        stream::once(self.list())
            .map(|listing| match listing {
                Ok(regions) => stream::iter(regions.into_iter().map(Ok)).left_stream(),
                Err(err) => stream::once(future::ready(Err(err))).right_stream(),
            })
            .flatten()
            .boxed()
    }

    /// Get region by ID
    ///
    /// `Ok(None)` means the backend answered and the region is not there.
    pub async fn get(&self, region_id: &str) -> ProviderResult<Option<Region>> {
        let region_id = region_id.trim();
        if region_id.is_empty() {
            return Ok(None);
        }

        let regions = self.list().await?;
        Ok(regions.into_iter().find(|r| r.id() == region_id))
    }

    /// Regions whose name matches `name`, ignoring case.
    pub async fn find(&self, name: &str) -> ProviderResult<Vec<Region>> {
        let name = name.trim();
        let regions = self.list().await?;
        Ok(regions
            .into_iter()
            .filter(|r| r.name().eq_ignore_ascii_case(name))
            .collect())
    }

    pub async fn zones(&self, region_id: &str) -> ProviderResult<Vec<Zone>> {
        self.get(region_id)
            .await?
            .map(|region| region.zones().to_vec())
            .ok_or_else(|| ProviderError::NotFound(format!("region {}", region_id)))
    }

    /// The active region: the explicit override when set, otherwise the region
    /// the backend is configured for. Always a member of [`list`](Self::list).
    pub async fn current(&self) -> ProviderResult<Region> {
        let wanted = self
            .current_override
            .as_deref()
            .unwrap_or_else(|| self.provider.configured_region())
            .trim();

        if wanted.is_empty() {
            return Err(ProviderError::Configuration(format!(
                "no current region configured for {}",
                self.provider.name()
            )));
        }

        let mut regions = self.list().await?;
        let position = regions
            .iter()
            .position(|r| r.id() == wanted)
            .or_else(|| regions.iter().position(|r| r.name().eq_ignore_ascii_case(wanted)));

        match position {
            Some(pos) => Ok(regions.swap_remove(pos)),
            None => Err(ProviderError::NotFound(format!(
                "current region {} is not offered by {}",
                wanted,
                self.provider.name()
            ))),
        }
    }

    pub async fn health(&self) -> ProviderResult<HealthStatus> {
        self.provider.health().await
    }
}

impl std::fmt::Debug for RegionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionService")
            .field("provider", &self.provider.name())
            .field("current_override", &self.current_override)
            .finish()
    }
}
