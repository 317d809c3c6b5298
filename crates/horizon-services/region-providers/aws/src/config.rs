use hpc_region::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    pub region: String,
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub secret_access_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl AwsConfig {
    pub fn new(region: String) -> Self {
        Self {
            region,
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
        }
    }

    pub fn with_credentials(
        region: String,
        access_key_id: String,
        secret_access_key: String,
    ) -> Self {
        Self {
            region,
            access_key_id: Some(access_key_id),
            secret_access_key: Some(secret_access_key),
            endpoint: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Credentials are optional, but a key id without its secret (or the
    /// reverse) is rejected the way EC2 would reject the signed request.
    pub fn check_credentials(&self) -> ProviderResult<()> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        match (present(&self.access_key_id), present(&self.secret_access_key)) {
            (true, false) => Err(ProviderError::AuthenticationFailed(
                "access key id supplied without secret access key".to_string(),
            )),
            (false, true) => Err(ProviderError::AuthenticationFailed(
                "secret access key supplied without access key id".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self::new("us-east-1".to_string())
    }
}
