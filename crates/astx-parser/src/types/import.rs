use serde::{Deserialize, Serialize};

/// One import spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Explicit local name (`f`, `.` or `_`); `None` when none was written.
    pub alias: Option<String>,
    /// Path literal exactly as written, quotes included.
    pub path: String,
    /// Comments on the lines directly above the spec.
    pub doc: Vec<String>,
    /// Comments trailing the spec on its line.
    pub comments: Vec<String>,
    pub line: u32,
}

impl Import {
    /// Import path with its quotes removed.
    #[must_use]
    pub fn unquoted_path(&self) -> &str {
        let path = self.path.as_str();
        path.strip_prefix('"')
            .and_then(|p| p.strip_suffix('"'))
            .or_else(|| path.strip_prefix('`').and_then(|p| p.strip_suffix('`')))
            .unwrap_or(path)
    }
}
