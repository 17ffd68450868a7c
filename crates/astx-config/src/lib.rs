//! # astx-config
//!
//! Layered configuration loading for astx using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ASTX_*` prefix, `__` as separator)
//! 2. Project-level `.astx/config.toml`
//! 3. User-level `~/.config/astx/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ASTX_EXTRACT__RECORDS` -> `extract.records`,
//! `ASTX_DIRECTORY__INCLUDE_TESTS` -> `directory.include_tests`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use astx_config::AstxConfig;
//!
//! let config = AstxConfig::load().expect("config");
//! if !config.directory.include_tests {
//!     println!("skipping *_test.go files");
//! }
//! ```

mod directory;
mod error;
mod extract;
mod output;

pub use directory::DirectoryConfig;
pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".astx/config.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "ASTX_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AstxConfig {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AstxConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`ASTX_*` prefix)
    /// 2. `.astx/config.toml` (project-local)
    /// 3. `~/.config/astx/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] when a source is malformed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load with an explicit config file in place of the project-local one.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, or
    /// [`ConfigError::Figment`] as for [`AstxConfig::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Self::figment_with(Some(path)).extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(local_override: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config, or the file given on the command line
        let local_path =
            local_override.map_or_else(|| PathBuf::from(LOCAL_CONFIG_PATH), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("astx").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AstxConfig::default();
        assert!(config.extract.imports);
        assert!(config.extract.records);
        assert!(config.directory.include_tests);
        assert!(config.output.pretty);
    }

    #[test]
    fn global_path_ends_with_astx_config() {
        if let Some(path) = AstxConfig::global_config_path() {
            assert!(path.ends_with("astx/config.toml"));
        }
    }
}
