use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::logging;
use anyhow::Result;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    debug!(path = %config_path.display(), "resolved config path");

    match cli.command {
        Commands::Convert {
            file,
            provider,
            compact,
            command_form,
        } => {
            let mut options = Config::load_from(&config_path)?.convert;
            if let Some(placement) = command_form {
                options = options.with_command_form(placement.into());
            }
            handlers::convert::handle(file.as_deref(), &provider, options, compact)
        }

        Commands::Classify {
            event_type,
            provider,
        } => handlers::classify::handle(&event_type, &provider),

        Commands::Providers { events } => handlers::providers::list(events),

        Commands::Config { init } => handlers::config::handle(&config_path, init),
    }
}
