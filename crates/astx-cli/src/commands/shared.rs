use astx_config::{AstxConfig, ExtractConfig};
use astx_parser::ExtractOptions;

use crate::cli::root_commands::SelectionArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Selection mask from the `--*-only` flags, falling back to config.
pub fn extract_options(selection: &SelectionArgs, config: &ExtractConfig) -> ExtractOptions {
    if selection.imports_only {
        ExtractOptions::IMPORTS
    } else if selection.records_only {
        ExtractOptions::RECORDS
    } else {
        if config.is_empty() {
            tracing::warn!("config disables both imports and records; output will be bare");
        }
        ExtractOptions::from_switches(config.imports, config.records)
    }
}

pub fn output_format(config: &AstxConfig, flags: &GlobalFlags) -> OutputFormat {
    output::resolve_format(flags.format, config.output.pretty)
}
