//! Parser error types for astx-parser.

use std::path::PathBuf;

/// Errors that can occur while parsing Go source and extracting its model.
///
/// Malformed struct tags and unrecognised type shapes are not errors: they
/// degrade to an empty [`TagSet`](crate::TagSet) and a `"?"` rendering.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {path}:{line}: {message}")]
    Parse {
        path: String,
        line: u32,
        message: String,
    },

    #[error("Cannot resolve absolute path of {}: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParserError {
    /// Re-label a parse error with the path of the file it came from.
    #[must_use]
    pub(crate) fn with_path(self, file_path: &str) -> Self {
        match self {
            Self::Parse { line, message, .. } => Self::Parse {
                path: file_path.to_string(),
                line,
                message,
            },
            other => other,
        }
    }
}
