//! Directory walk settings.

use serde::{Deserialize, Serialize};

const fn default_include_tests() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Whether `*_test.go` files take part in directory extraction.
    #[serde(default = "default_include_tests")]
    pub include_tests: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            include_tests: default_include_tests(),
        }
    }
}
