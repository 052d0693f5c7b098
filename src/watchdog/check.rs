//! The describe-then-maybe-publish step.

use crate::error::{DotfactsError, Result};

use super::client::{ComputeApi, NotificationApi};
use super::types::{InstanceState, Notification, WatchdogConfig, WatchdogResponse};

/// Check the instance once and notify the topic if it is running.
///
/// Exactly one describe call; at most one publish call, only after the
/// describe call reported "running". Errors from either call are kept
/// intact as the source of the returned error, with no retry. There is no deduplication across invocations.
pub async fn check_and_notify<C, N>(
    compute: &C,
    notifier: &N,
    config: &WatchdogConfig,
) -> Result<WatchdogResponse>
where
    C: ComputeApi + ?Sized,
    N: NotificationApi + ?Sized,
{
    let name = compute
        .describe_instance_state(&config.instance_id)
        .await
        .map_err(|source| DotfactsError::Describe {
            instance_id: config.instance_id.clone(),
            source,
        })?
        .ok_or_else(|| DotfactsError::InstanceNotFound {
            instance_id: config.instance_id.clone(),
        })?;

    let state = InstanceState::from_name(&name);
    tracing::info!("Instance {} is {}", config.instance_id, state);

    if state.is_running() {
        let notification = Notification::still_running(&config.instance_id, &state);
        notifier
            .publish(&config.topic_arn, &notification)
            .await
            .map_err(|source| DotfactsError::Publish {
                topic: config.topic_arn.clone(),
                source,
            })?;
        tracing::info!("Sent still-running notification to {}", config.topic_arn);
    }

    Ok(WatchdogResponse::ok(state))
}
