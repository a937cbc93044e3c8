use std::{path::Path, time::Duration};

use anyhow::bail;
use aws_config::{BehaviorVersion, Region, SdkConfig, meta::region::RegionProviderChain, timeout::TimeoutConfig};
use serde::{Deserialize, Serialize};

/// Client bootstrap settings shared by the edge-binder crates, loadable from
/// a RON file. Absent fields fall back to the SDK's own resolution chain.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AwsClientConfig {
    pub account_id:   Option<String>,
    pub region:       Option<String>,
    pub endpoint_url: Option<String>,
    pub profile:      Option<String>,
    pub timeout_secs: u64,
}

impl Default for AwsClientConfig {
    fn default() -> Self {
        Self {
            account_id:   None,
            region:       None,
            endpoint_url: None,
            profile:      None,
            timeout_secs: 30,
        }
    }
}

impl AwsClientConfig {
    pub fn try_load(path: &Path) -> anyhow::Result<AwsClientConfig> {
        if path.is_file() {
            tracing::info!("Loading edge-binder config file at {:?}", path);
            let config: AwsClientConfig = ron::from_str(&std::fs::read_to_string(path)?)?;
            Ok(config)
        } else {
            tracing::info!("edge-binder config file at {:?} not present, using defaults.", path);
            Ok(AwsClientConfig::default())
        }
    }

    pub async fn load_sdk_config(&self) -> SdkConfig {
        let region = match &self.region {
            Some(region) => RegionProviderChain::first_try(Region::new(region.clone())).or_default_provider(),
            None => RegionProviderChain::default_provider(),
        };

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region).timeout_config(
            TimeoutConfig::builder()
                .connect_timeout(Duration::from_secs(self.timeout_secs))
                .operation_timeout(Duration::from_secs(self.timeout_secs))
                .operation_attempt_timeout(Duration::from_secs(self.timeout_secs))
                .read_timeout(Duration::from_secs(self.timeout_secs))
                .build(),
        );

        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.as_str());
        }

        loader.load().await
    }

    pub async fn verify_sts(&self) -> anyhow::Result<String> {
        let sts_config = self.load_sdk_config().await;
        let sts_client = aws_sdk_sts::Client::new(&sts_config);

        match sts_client.get_caller_identity().send().await {
            Ok(caller_identity) => {
                let Some(account_id) = caller_identity.account else {
                    bail!("Failed to get current account ID!");
                };

                if let Some(ref config_account_id) = self.account_id
                    && *config_account_id != account_id
                {
                    bail!(
                        "Credentials do not match configured account id: creds = {}, config = {}",
                        account_id,
                        config_account_id
                    );
                }

                Ok(account_id)
            }
            Err(e) => {
                tracing::error!("Failed to call sts:GetCallerIdentity: {}", e);
                Err(e.into())
            }
        }
    }
}
