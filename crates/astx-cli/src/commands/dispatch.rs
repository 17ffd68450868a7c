use astx_config::AstxConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &AstxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::File(args) => commands::file::handle(args, config, flags),
        Commands::Dir(args) => commands::dir::handle(args, config, flags),
        Commands::Source(args) => commands::source::handle(args, config, flags),
    }
}
