//! Wait command implementation.
//!
//! The `ragready wait` command polls the vector database health endpoint
//! until it answers 200 or the attempt budget runs out.

use crate::cli::args::WaitArgs;
use crate::error::Result;
use crate::service::{HealthEndpoint, HealthPoller, HttpHealthEndpoint, ServicePollConfig};
use crate::ui::{format_bytes, format_duration, UserInterface};

use super::dispatcher::{Command, CommandResult, ConfigSource};

/// Exit code for an invalid poll configuration.
const INVALID_CONFIG_EXIT: i32 = 2;

/// The wait command implementation.
pub struct WaitCommand {
    source: ConfigSource,
    args: WaitArgs,
}

impl WaitCommand {
    /// Create a new wait command.
    pub fn new(source: ConfigSource, args: WaitArgs) -> Self {
        Self { source, args }
    }

    /// Apply command-line overrides on top of the configured service section.
    pub fn poll_config(&self, mut base: ServicePollConfig) -> ServicePollConfig {
        if let Some(host) = &self.args.host {
            base.host = host.clone();
        }
        if let Some(port) = self.args.port {
            base.port = port;
        }
        if let Some(max_attempts) = self.args.max_attempts {
            base.max_attempts = max_attempts;
        }
        if let Some(delay) = self.args.delay {
            base.delay = delay;
        }
        if let Some(timeout) = self.args.request_timeout {
            base.request_timeout = timeout;
        }
        if let Some(path) = &self.args.path {
            base.path = path.clone();
        }
        base
    }

    /// Run the poll with `poller`, reporting progress through `ui`.
    pub fn run_with<E: HealthEndpoint>(
        &self,
        poller: &HealthPoller<E>,
        config: &ServicePollConfig,
        ui: &mut dyn UserInterface,
    ) -> CommandResult {
        let target = format!("{}:{}", config.host, config.port);
        let verbose = ui.output_mode().shows_detail();
        let mut spinner = ui.start_spinner(&format!("Waiting for {}", target));

        let report = poller.poll_with(config, |attempt, result| {
            spinner.set_message(&format!(
                "Waiting for {} (attempt {}/{})",
                target, attempt, config.max_attempts
            ));
            if verbose && !result.is_healthy() {
                ui.message(&format!("  attempt {}: {}", attempt, result));
            }
        });

        if report.ready {
            let size = report.response_bytes.map(format_bytes).unwrap_or_default();
            spinner.finish_success(&format!(
                "{} ready after {} attempt(s) in {} ({} response)",
                target,
                report.attempts,
                format_duration(report.elapsed),
                size
            ));
            return CommandResult::success();
        }

        spinner.finish_error(&format!(
            "{} not ready after {} attempts ({})",
            target,
            report.attempts,
            format_duration(report.elapsed)
        ));
        if let Some(last) = &report.last {
            ui.message(&format!("Last result: {}", last));
        }
        ui.show_hint("Start the vector database: docker-compose up -d");
        CommandResult::failure(1)
    }
}

impl Command for WaitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.source.load()?;
        let poll = self.poll_config(config.service);

        if let Err(e) = poll.validate() {
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(INVALID_CONFIG_EXIT));
        }

        let endpoint = HttpHealthEndpoint::new(poll.request_timeout_duration())?;
        Ok(self.run_with(&HealthPoller::new(endpoint), &poll, ui))
    }
}
