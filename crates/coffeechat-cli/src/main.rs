//! coffeechat CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use coffeechat_core::tracing::{TracingConfig, init_tracing};

use coffeechat_cli::cli::{Cli, Command, ConfigAction};
use coffeechat_cli::commands;
use coffeechat_cli::config::CliConfig;
use coffeechat_cli::error::{CliError, CliResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let tracing_config = if cli.debug {
        TracingConfig::verbose()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    // Run the command
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(CliError::Config)?
    } else {
        CliConfig::load().map_err(CliError::Config)?
    };
    let json = cli.json;
    let credentials = commands::Credentials {
        api_key: cli.api_key.as_deref(),
        grant_id: cli.grant_id.as_deref(),
    };

    // Handle subcommands
    match cli.command {
        Command::Calendars => {
            let gateway = commands::build_gateway(credentials, &config)?;
            commands::calendars::list(gateway.as_ref(), json).await
        }
        Command::Events { ref calendar } => {
            let gateway = commands::build_gateway(credentials, &config)?;
            commands::calendars::events(gateway.as_ref(), calendar, json).await
        }
        Command::Busy { date, ref calendar } => {
            let scheduler = commands::build_scheduler(credentials, &config)?;
            commands::schedule::busy(&scheduler, date, calendar.as_deref(), json).await
        }
        Command::Slots {
            date,
            ref calendar,
            duration,
            start_hour,
            end_hour,
        } => {
            let scheduler = commands::build_scheduler(credentials, &config)?;
            let overrides = commands::schedule::SlotOverrides {
                duration,
                start_hour,
                end_hour,
            };
            commands::schedule::slots(&scheduler, date, calendar.as_deref(), overrides, json).await
        }
        Command::Book {
            date,
            slot,
            timezone,
            email,
            name,
            title,
            description,
        } => {
            let scheduler = commands::build_scheduler(credentials, &config)?;
            let args = commands::book::BookArgs {
                date,
                slot,
                timezone,
                email,
                name,
                title,
                description,
            };
            commands::book::run(&scheduler, args, json).await
        }
        Command::Zones => {
            let scheduler_config = commands::scheduler_config(&config)?;
            commands::zones::run(&scheduler_config.zones, json)
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
