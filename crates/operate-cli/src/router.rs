//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::commands;
use operate_core::error::OperateResult;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli) -> OperateResult<()> {
    let config_file = cli.config_file.clone();

    match cli.command {
        Some(Commands::Models) => commands::models::list(config_file.as_deref()),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(config_file.as_deref()),
            ConfigAction::Init { force } => commands::config::init(config_file.as_deref(), force),
        },
        None => {
            commands::run::execute(commands::run::RunArgs {
                model: cli.model,
                prompt: cli.prompt,
                voice: cli.voice,
                verbose: cli.verbose,
                config_file,
            })
            .await
        }
    }
}
