// The single AWS SDK context shared by the RDS and CloudWatch Logs clients.

use crate::error::{RdsTopError, Result};
use crate::version;
use aws_config::retry::RetryConfig;
use aws_config::{AppName, BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_rds::config::Region;
use tracing::debug;

/// Resolved once at startup and read-only afterwards. Retries are disabled:
/// any failed call ends the run.
#[derive(Debug, Clone)]
pub struct AwsSession {
    config: SdkConfig,
}

impl AwsSession {
    /// Build from the ambient AWS environment, with optional region and
    /// shared-config profile overrides. Credentials are resolved eagerly so
    /// that a missing identity is reported as a session failure.
    pub async fn load(region: Option<String>, profile: Option<String>) -> Result<Self> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Ok(app_name) = AppName::new(version::NAME) {
            loader = loader.app_name(app_name);
        }
        let config = loader.load().await;

        let region = config.region().ok_or_else(|| {
            RdsTopError::Session(
                "no AWS region configured (set AWS_REGION, a profile region or --region)".into(),
            )
        })?;
        let provider = config
            .credentials_provider()
            .ok_or_else(|| RdsTopError::Session("no AWS credentials provider available".into()))?;
        provider
            .provide_credentials()
            .await
            .map_err(|e| RdsTopError::Session(e.to_string()))?;
        debug!(region = %region, "AWS session ready");

        Ok(Self { config })
    }

    pub fn rds_client(&self) -> aws_sdk_rds::Client {
        aws_sdk_rds::Client::new(&self.config)
    }

    pub fn logs_client(&self) -> aws_sdk_cloudwatchlogs::Client {
        aws_sdk_cloudwatchlogs::Client::new(&self.config)
    }
}
