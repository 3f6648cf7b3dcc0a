//! Command implementations.

pub mod book;
pub mod calendars;
pub mod config;
pub mod schedule;
pub mod zones;

use std::sync::Arc;

use tracing::debug;

use coffeechat_providers::CalendarGateway;
use coffeechat_scheduler::{Scheduler, SchedulerConfig};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Credentials from the command line or the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Credentials<'a> {
    pub api_key: Option<&'a str>,
    pub grant_id: Option<&'a str>,
}

/// Builds the calendar gateway from the config file plus credentials.
#[cfg(feature = "nylas")]
pub fn build_gateway(
    credentials: Credentials<'_>,
    config: &CliConfig,
) -> CliResult<Arc<dyn CalendarGateway>> {
    let provider_config = config
        .nylas
        .to_provider_config(credentials.api_key, credentials.grant_id)
        .map_err(CliError::Config)?;
    debug!(api_uri = %provider_config.api_uri, "using the Nylas backend");
    let gateway = coffeechat_providers::nylas::NylasGateway::new(provider_config)?;
    Ok(Arc::new(gateway))
}

#[cfg(not(feature = "nylas"))]
pub fn build_gateway(
    _credentials: Credentials<'_>,
    _config: &CliConfig,
) -> CliResult<Arc<dyn CalendarGateway>> {
    debug!("built without a calendar backend");
    Ok(Arc::new(coffeechat_providers::ErrorGateway::default()))
}

/// Builds a scheduler over the configured gateway.
pub fn build_scheduler(
    credentials: Credentials<'_>,
    config: &CliConfig,
) -> CliResult<Scheduler> {
    let scheduler_config = scheduler_config(config)?;
    let gateway = build_gateway(credentials, config)?;
    Ok(Scheduler::new(gateway, scheduler_config)?)
}

/// Builds the scheduler configuration from the `[scheduling]` section.
pub fn scheduler_config(config: &CliConfig) -> CliResult<SchedulerConfig> {
    config.to_scheduler_config().map_err(CliError::Config)
}
