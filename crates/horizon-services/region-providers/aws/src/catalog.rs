use hpc_region::ProviderResult;
use serde::{Deserialize, Serialize};

/// Entry of an EC2 `DescribeRegions` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwsRegion {
    pub region_name: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub opt_in_status: Option<String>,
}

/// Entry of an EC2 `DescribeAvailabilityZones` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwsAvailabilityZone {
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zone_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeRegionsResponse {
    #[serde(default)]
    regions: Vec<AwsRegion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeAvailabilityZonesResponse {
    #[serde(default)]
    availability_zones: Vec<AwsAvailabilityZone>,
}

/// Region and zone payloads served by the sandbox EC2 endpoint.
///
/// The serialized form is both responses merged into one document:
/// `{"Regions": [...], "AvailabilityZones": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwsCatalog {
    #[serde(default)]
    pub regions: Vec<AwsRegion>,
    #[serde(default)]
    pub availability_zones: Vec<AwsAvailabilityZone>,
}

impl AwsCatalog {
    /// Built-in catalog, based on the public EC2 region list
    pub fn builtin() -> Self {
        let mut regions = Vec::new();
        let mut availability_zones = Vec::new();

        let layout: &[(&str, &str, &[&str])] = &[
            ("us-east-1", "opt-in-not-required", &["a", "b", "c", "d", "f"]),
            ("us-east-2", "opt-in-not-required", &["a", "b", "c"]),
            ("us-west-1", "opt-in-not-required", &["a", "c"]),
            ("us-west-2", "opt-in-not-required", &["a", "b", "c", "d"]),
            ("eu-west-1", "opt-in-not-required", &["a", "b", "c"]),
            ("eu-central-1", "opt-in-not-required", &["a", "b", "c"]),
            ("ap-southeast-1", "opt-in-not-required", &["a", "b", "c"]),
            ("ap-northeast-1", "opt-in-not-required", &["a", "c", "d"]),
            ("af-south-1", "not-opted-in", &["a", "b", "c"]),
        ];

        for (region_name, opt_in, suffixes) in layout {
            regions.push(AwsRegion {
                region_name: region_name.to_string(),
                endpoint: Some(format!("ec2.{}.amazonaws.com", region_name)),
                opt_in_status: Some(opt_in.to_string()),
            });

            let short: String = region_name
                .split('-')
                .map(|part| part.chars().next().unwrap_or_default())
                .collect();
            for (i, suffix) in suffixes.iter().enumerate() {
                availability_zones.push(AwsAvailabilityZone {
                    zone_name: Some(format!("{}{}", region_name, suffix)),
                    zone_id: Some(format!("{}-az{}", short, i + 1)),
                    region_name: Some(region_name.to_string()),
                    state: Some("available".to_string()),
                    zone_type: Some("availability-zone".to_string()),
                });
            }
        }

        // Local zone that has been taken out of service
        availability_zones.push(AwsAvailabilityZone {
            zone_name: Some("us-west-2-lax-1a".to_string()),
            zone_id: Some("usw2-lax1-az1".to_string()),
            region_name: Some("us-west-2".to_string()),
            state: Some("unavailable".to_string()),
            zone_type: Some("local-zone".to_string()),
        });

        Self {
            regions,
            availability_zones,
        }
    }

    /// Parse a recorded catalog document
    pub fn from_json(document: &str) -> ProviderResult<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Parse the two raw EC2 responses as returned by the API
    pub fn from_responses(regions: &str, availability_zones: &str) -> ProviderResult<Self> {
        let regions: DescribeRegionsResponse = serde_json::from_str(regions)?;
        let zones: DescribeAvailabilityZonesResponse = serde_json::from_str(availability_zones)?;
        Ok(Self {
            regions: regions.regions,
            availability_zones: zones.availability_zones,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = AwsCatalog::builtin();
        assert_eq!(catalog.regions.len(), 9);
        assert!(catalog
            .availability_zones
            .iter()
            .any(|z| z.zone_name.as_deref() == Some("us-east-1a")));
    }

    #[test]
    fn test_builtin_zone_ids() {
        let catalog = AwsCatalog::builtin();
        let zone = catalog
            .availability_zones
            .iter()
            .find(|z| z.zone_name.as_deref() == Some("eu-central-1b"))
            .unwrap();
        assert_eq!(zone.zone_id.as_deref(), Some("ec1-az2"));
    }

    #[test]
    fn test_from_responses() {
        let regions = r#"{"Regions":[{"Endpoint":"ec2.eu-north-1.amazonaws.com","RegionName":"eu-north-1","OptInStatus":"opt-in-not-required"}]}"#;
        let zones = r#"{"AvailabilityZones":[{"State":"available","RegionName":"eu-north-1","ZoneName":"eu-north-1a","ZoneId":"eun1-az1"}]}"#;

        let catalog = AwsCatalog::from_responses(regions, zones).unwrap();
        assert_eq!(catalog.regions[0].region_name, "eu-north-1");
        assert_eq!(catalog.availability_zones[0].zone_id.as_deref(), Some("eun1-az1"));
        assert!(catalog.availability_zones[0].zone_type.is_none());
    }

    #[test]
    fn test_from_json_document() {
        let doc = r#"{"Regions":[{"RegionName":"sa-east-1"}]}"#;
        let catalog = AwsCatalog::from_json(doc).unwrap();
        assert_eq!(catalog.regions.len(), 1);
        assert!(catalog.availability_zones.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = AwsCatalog::from_json("<Response><Errors/></Response>");
        assert!(matches!(
            result,
            Err(hpc_region::ProviderError::InvalidResponse(_))
        ));
    }
}
