//! Remote API seams used by the watchdog.

use anyhow::Result;
use async_trait::async_trait;

use super::types::Notification;

/// Compute API: look up an instance's power state.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    /// State name of the first instance returned for `instance_id`.
    ///
    /// `Ok(None)` when the response carries no instance record.
    async fn describe_instance_state(&self, instance_id: &str) -> Result<Option<String>>;
}

/// Pub/sub API: deliver a message to a topic.
#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn publish(&self, topic_arn: &str, notification: &Notification) -> Result<()>;
}
