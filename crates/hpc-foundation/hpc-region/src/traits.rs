use crate::{GenericRegionRecord, HealthStatus, ProviderKind, ProviderResult};

/// Capability every region backend must implement.
///
/// Backends only translate their vendor payloads into generic records; the
/// invariants callers rely on are enforced afterwards by
/// [`RegionService`](crate::RegionService).
#[async_trait::async_trait]
pub trait RegionProvider: Send + Sync {
    /// Vendor this backend talks to
    fn kind(&self) -> ProviderKind;

    /// Get provider name/identifier
    fn name(&self) -> &str;

    /// Region the backend is configured to operate in.
    fn configured_region(&self) -> &str;

    /// Query the vendor for every region visible to the configured account
    ///
    /// # Returns
    /// * `Ok(Vec<GenericRegionRecord>)` - Regions in vendor order, zones attached
    /// * `Err(ProviderError)` - If the backend cannot be reached or answers garbage
    async fn fetch_regions(&self) -> ProviderResult<Vec<GenericRegionRecord>>;

    /// Health check for provider availability
    async fn health(&self) -> ProviderResult<HealthStatus>;
}
