use anyhow::Context;
use astx_config::AstxConfig;
use astx_parser::DirOptions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DirArgs;
use crate::commands::shared::{extract_options, output_format};
use crate::output::output;

/// Handle `astx dir`.
pub fn handle(args: &DirArgs, config: &AstxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = dir_options(args, config);
    let packages = astx_parser::extract_dir_with(&args.path, &options)
        .with_context(|| format!("failed to extract directory {}", args.path.display()))?;

    tracing::debug!(packages = packages.len(), "directory extraction finished");
    output(&packages, output_format(config, flags))
}

fn dir_options(args: &DirArgs, config: &AstxConfig) -> DirOptions {
    DirOptions {
        extract: extract_options(&args.selection, &config.extract),
        include_tests: config.directory.include_tests && !args.no_tests,
    }
}
