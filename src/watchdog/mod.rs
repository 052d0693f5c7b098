//! Instance watchdog.
//!
//! Meant to be triggered periodically by an external scheduler: each run
//! describes one EC2 instance and, if it is still running, publishes one
//! SNS notification saying so.
//!
//! The remote calls sit behind [`ComputeApi`] and [`NotificationApi`];
//! [`aws`] provides the EC2/SNS implementations.

pub mod aws;
pub mod check;
pub mod client;
pub mod types;

pub use check::check_and_notify;
pub use client::{ComputeApi, NotificationApi};
pub use types::{InstanceState, Notification, WatchdogConfig, WatchdogResponse};

/// Build the EC2 and SNS clients from the AWS provider chain.
pub async fn connect(region: Option<String>) -> (aws::Ec2Compute, aws::SnsNotifier) {
    let sdk_config = aws::load_sdk_config(region).await;
    (
        aws::Ec2Compute::new(&sdk_config),
        aws::SnsNotifier::new(&sdk_config),
    )
}
