//! Watchdog command implementation.
//!
//! The `dotfacts watchdog` command checks one EC2 instance and notifies an
//! SNS topic if it is still running.

use crate::cli::args::WatchdogArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::watchdog::{self, check_and_notify, ComputeApi, NotificationApi, WatchdogConfig};

use super::dispatcher::{Command, CommandResult};

/// The watchdog command implementation.
pub struct WatchdogCommand {
    args: WatchdogArgs,
}

impl WatchdogCommand {
    /// Create a new watchdog command.
    pub fn new(args: WatchdogArgs) -> Self {
        Self { args }
    }

    /// Identifiers for the check.
    pub fn config(&self) -> WatchdogConfig {
        WatchdogConfig {
            instance_id: self.args.instance_id.clone(),
            topic_arn: self.args.topic_arn.clone(),
        }
    }

    /// Run one check with the given clients and print the response.
    pub async fn run_with<C, N>(
        &self,
        compute: &C,
        notifier: &N,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>
    where
        C: ComputeApi + ?Sized,
        N: NotificationApi + ?Sized,
    {
        let config = self.config();
        ui.message(&format!("Checking instance {}", config.instance_id));

        let response = check_and_notify(compute, notifier, &config).await?;

        let document = serde_json::to_string(&response).map_err(anyhow::Error::from)?;
        ui.emit(&document);
        if response.state.is_running() {
            ui.warning(&format!("Instance {} is still running", config.instance_id));
        }
        Ok(CommandResult::success())
    }
}

impl Command for WatchdogCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            let (compute, notifier) = watchdog::connect(self.args.region.clone()).await;
            self.run_with(&compute, &notifier, ui).await
        })
    }
}
