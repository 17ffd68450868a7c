use anyhow::Context;
use astx_config::AstxConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honouring `--config` when given.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AstxConfig> {
    let config = match &flags.config {
        Some(path) => AstxConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AstxConfig::load().context("failed to load astx configuration")?,
    };

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
