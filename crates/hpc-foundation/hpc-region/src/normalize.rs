//! Turns vendor-neutral records into [`Region`] values.
//!
//! Every backend funnels through [`normalize_regions`], so the guarantees below
//! hold no matter how sloppy a vendor payload is:
//!
//! - region ids are unique; a repeated id is merged into its first occurrence
//! - regions and zones always carry a non-empty id and name
//! - a blank `region_name` on a zone is reported as absent
//! - vendor order is preserved

use crate::{ProviderKind, Region, Zone};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericRegionRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub zones: Vec<GenericZoneRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericZoneRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub region_name: Option<String>,
}

impl GenericRegionRecord {
    /// Record whose id and name are the same vendor identifier.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Some(name.clone()),
            name: Some(name),
            zones: Vec::new(),
        }
    }

    pub fn with_zones(mut self, zones: Vec<GenericZoneRecord>) -> Self {
        self.zones = zones;
        self
    }
}

impl GenericZoneRecord {
    /// Record whose id and name are the same vendor identifier.
    pub fn named(name: impl Into<String>, region_name: Option<&str>) -> Self {
        let name = name.into();
        Self {
            id: Some(name.clone()),
            name: Some(name),
            region_name: region_name.map(str::to_string),
        }
    }
}

fn clean(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn normalize_zone(provider: ProviderKind, record: &GenericZoneRecord) -> Option<Zone> {
    let id = clean(record.id.as_ref()).or_else(|| clean(record.name.as_ref()));
    let name = clean(record.name.as_ref()).or_else(|| id.clone());

    match (id, name) {
        (Some(id), Some(name)) => Some(Zone::new(id, name, clean(record.region_name.as_ref()))),
        _ => {
            warn!(%provider, "dropping zone record without id or name");
            None
        }
    }
}

struct PendingRegion {
    id: String,
    name: String,
    zones: Vec<Zone>,
    zone_ids: HashSet<String>,
}

impl PendingRegion {
    fn absorb(&mut self, provider: ProviderKind, zones: &[GenericZoneRecord]) {
        for record in zones {
            let Some(zone) = normalize_zone(provider, record) else {
                continue;
            };
            if self.zone_ids.insert(zone.id().to_string()) {
                self.zones.push(zone);
            } else {
                debug!(%provider, region = %self.id, zone = %zone.id(), "skipping duplicate zone");
            }
        }
    }
}

/// Normalize the records a backend returned, in order.
pub fn normalize_regions(provider: ProviderKind, records: Vec<GenericRegionRecord>) -> Vec<Region> {
    let mut pending: Vec<PendingRegion> = Vec::with_capacity(records.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in &records {
        let id = clean(record.id.as_ref()).or_else(|| clean(record.name.as_ref()));
        let Some(id) = id else {
            warn!(%provider, "dropping region record without id or name");
            continue;
        };

        if let Some(&pos) = index.get(&id) {
            warn!(%provider, region = %id, "merging duplicate region record");
            pending[pos].absorb(provider, &record.zones);
            continue;
        }

        let name = clean(record.name.as_ref()).unwrap_or_else(|| id.clone());
        let mut region = PendingRegion {
            id: id.clone(),
            name,
            zones: Vec::new(),
            zone_ids: HashSet::new(),
        };
        region.absorb(provider, &record.zones);
        index.insert(id, pending.len());
        pending.push(region);
    }

    debug!(
        %provider,
        received = records.len(),
        normalized = pending.len(),
        "normalized region listing"
    );

    pending
        .into_iter()
        .map(|r| Region::new(provider, r.id, r.name).with_zones(r.zones))
        .collect()
}
