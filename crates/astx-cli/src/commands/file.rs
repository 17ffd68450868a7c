use anyhow::Context;
use astx_config::AstxConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FileArgs;
use crate::commands::shared::{extract_options, output_format};
use crate::output::output;

/// Handle `astx file`.
pub fn handle(args: &FileArgs, config: &AstxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = extract_options(&args.selection, &config.extract);
    let file = astx_parser::extract_file(&args.path, options)
        .with_context(|| format!("failed to extract {}", args.path.display()))?;

    output(&file, output_format(config, flags))
}
