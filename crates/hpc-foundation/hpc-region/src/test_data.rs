//! Per-provider fixture values for conformance tests.
//!
//! Defaults match the sandbox catalogs shipped with each backend. Any value can
//! be overridden through `HPC_REGION_TEST_<KEY>_<PROVIDER>`, e.g.
//! `HPC_REGION_TEST_PLACEMENT_AWS=eu-west-1b`, when pointing the suite at a
//! recorded payload from a real account.

use crate::ProviderKind;

fn default_value(provider: ProviderKind, key: &str) -> Option<&'static str> {
    match (provider, key) {
        (ProviderKind::Aws, "placement") => Some("us-east-1a"),
        (ProviderKind::Aws, "region") => Some("us-east-1"),
        (ProviderKind::Gcp, "placement") => Some("us-central1-a"),
        (ProviderKind::Gcp, "region") => Some("us-central1"),
        (ProviderKind::Azure, "placement") => Some("eastus-1"),
        (ProviderKind::Azure, "region") => Some("eastus"),
        (ProviderKind::OpenStack, "placement") => Some("nova"),
        (ProviderKind::OpenStack, "region") => Some("RegionOne"),
        _ => None,
    }
}

pub fn env_key(provider: ProviderKind, key: &str) -> String {
    format!(
        "HPC_REGION_TEST_{}_{}",
        key.to_uppercase(),
        provider.to_string().to_uppercase()
    )
}

/// Look up fixture `key` for `provider`.
pub fn provider_test_data(provider: ProviderKind, key: &str) -> Option<String> {
    std::env::var(env_key(provider, key))
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| default_value(provider, key).map(str::to_string))
}
