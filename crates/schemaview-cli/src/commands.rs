use super::args::{Cli, Commands, ConfigCommand, StatutesCommand};
use super::handlers;
use crate::logging;
use anyhow::Result;
use schemaview_ingest::{ImportMode, ImportOptions};
use schemaview_render::{RenderConfig, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_arg = cli.config_path.as_deref();

    match cli.command {
        Commands::Render { input, format } => {
            let config = RenderConfig::load(config_arg)?;
            handlers::render::handle(&input, format, &config)
        }

        Commands::Types { format } => handlers::types::handle(format),

        Commands::Config { command } => {
            let config_path = resolve_config_path(config_arg)?;
            match command {
                ConfigCommand::Show => handlers::config::show(&config_path),
                ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
            }
        }

        Commands::Statutes { command } => match command {
            StatutesCommand::Import {
                input_dir,
                year,
                output,
                by_state,
                limit_states,
            } => {
                let options = ImportOptions {
                    input_dir,
                    output_dir: output,
                    year,
                    mode: if by_state {
                        ImportMode::ByState
                    } else {
                        ImportMode::Combined
                    },
                    limit_states,
                };
                handlers::statutes::import(&options)
            }
        },
    }
}
