use std::io::Read;
use std::path::Path;

use anyhow::Context;
use astx_config::AstxConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SourceArgs;
use crate::commands::shared::{extract_options, output_format};
use crate::output::output;

/// Handle `astx source`.
pub fn handle(args: &SourceArgs, config: &AstxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = match args.path.as_deref().filter(|p| !is_stdin(p)) {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => read_stdin()?,
    };

    let options = extract_options(&args.selection, &config.extract);
    let file = astx_parser::extract_source(&text, options).context("failed to extract source")?;

    output(&file, output_format(config, flags))
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read source from stdin")?;
    Ok(text)
}
