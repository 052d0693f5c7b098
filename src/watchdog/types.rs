//! Instance state, notification and response types.

use std::fmt;

use serde::Serialize;

/// Power state reported by the compute API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
    /// Any state name this crate doesn't know, kept verbatim.
    Other(String),
}

impl InstanceState {
    /// Parse the API's state name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "shutting-down" => Self::ShuttingDown,
            "terminated" => Self::Terminated,
            "stopping" => Self::Stopping,
            "stopped" => Self::Stopped,
            other => Self::Other(other.to_string()),
        }
    }

    /// The API's state name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::ShuttingDown => "shutting-down",
            Self::Terminated => "terminated",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Other(name) => name,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message for the notification topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub message: String,
}

impl Notification {
    /// The "still running" alert for an instance.
    pub fn still_running(instance_id: &str, state: &InstanceState) -> Self {
        Self {
            subject: format!("Instance {} Still Running", instance_id),
            message: format!(
                "Instance {} has been running. Current state: {}",
                instance_id, state
            ),
        }
    }
}

/// What the scheduler gets back from one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchdogResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    /// Observed state; carried for callers, not serialized.
    #[serde(skip)]
    pub state: InstanceState,
}

impl WatchdogResponse {
    pub fn ok(state: InstanceState) -> Self {
        Self {
            status_code: 200,
            body: format!("Instance state: {}", state),
            state,
        }
    }
}

/// Identifiers a watchdog run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchdogConfig {
    pub instance_id: String,
    pub topic_arn: String,
}
