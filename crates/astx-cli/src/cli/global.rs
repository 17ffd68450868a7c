use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// `None` defers to `output.pretty` in the config.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}
