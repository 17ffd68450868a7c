use serde::{Deserialize, Serialize};

use super::{Import, Record};

/// Everything extracted from one Go source file.
///
/// `imports` and `records` are `None` when the selection mask did not ask for
/// them and `Some` (possibly empty) when it did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub package: String,
    pub path: String,
    pub abs_path: String,
    pub imports: Option<Vec<Import>>,
    pub records: Option<Vec<Record>>,
}

/// Files of one package found in a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub files: Vec<File>,
}

impl File {
    /// Top-level record with the given name.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.as_deref()?.iter().find(|r| r.name == name)
    }

    /// Import whose unquoted path is `path`.
    #[must_use]
    pub fn import(&self, path: &str) -> Option<&Import> {
        self.imports
            .as_deref()?
            .iter()
            .find(|i| i.unquoted_path() == path)
    }
}

impl Package {
    /// All top-level records across the package's files, in file order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.files
            .iter()
            .filter_map(|f| f.records.as_deref())
            .flatten()
    }
}
