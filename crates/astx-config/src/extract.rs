//! Which parts of a Go file are extracted by default.

use serde::{Deserialize, Serialize};

const fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Extract import declarations.
    #[serde(default = "enabled")]
    pub imports: bool,

    /// Extract struct declarations.
    #[serde(default = "enabled")]
    pub records: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            imports: enabled(),
            records: enabled(),
        }
    }
}

impl ExtractConfig {
    /// Whether nothing at all would be extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.imports && !self.records
    }
}
