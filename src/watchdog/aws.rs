//! EC2 and SNS implementations of the watchdog's API seams.
//!
//! Credentials and region come from the standard AWS provider chain
//! (environment, profile, instance or function role). Neither call is
//! retried beyond what the SDK itself does. SDK errors are returned as the
//! `SdkError` value itself, wrapped in `anyhow::Error` without rewording.

use anyhow::Result;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ec2::config::Region;
use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;

use super::client::{ComputeApi, NotificationApi};
use super::types::Notification;

/// Load shared SDK configuration, optionally pinning the region.
pub async fn load_sdk_config(region: Option<String>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    loader.load().await
}

/// State name of the first reservation's first instance.
pub fn first_instance_state(output: &DescribeInstancesOutput) -> Option<String> {
    let instance = output.reservations().first()?.instances().first()?;
    instance
        .state()?
        .name()
        .map(|name| name.as_str().to_string())
}

/// EC2 `DescribeInstances` client.
#[derive(Clone)]
pub struct Ec2Compute {
    client: aws_sdk_ec2::Client,
}

impl Ec2Compute {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_ec2::Client::new(config),
        }
    }
}

#[async_trait]
impl ComputeApi for Ec2Compute {
    async fn describe_instance_state(&self, instance_id: &str) -> Result<Option<String>> {
        let output = self
            .client
            .describe_instances()
            .instance_ids(instance_id)
            .send()
            .await?;

        Ok(first_instance_state(&output))
    }
}

/// SNS `Publish` client.
#[derive(Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
}

impl SnsNotifier {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sns::Client::new(config),
        }
    }
}

#[async_trait]
impl NotificationApi for SnsNotifier {
    async fn publish(&self, topic_arn: &str, notification: &Notification) -> Result<()> {
        let output = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await?;

        tracing::debug!("Published message {:?}", output.message_id());
        Ok(())
    }
}
