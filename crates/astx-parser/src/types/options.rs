use bitflags::bitflags;

bitflags! {
    /// Selects which parts of a file are extracted.
    ///
    /// A part that is not selected is left as `None` on the resulting
    /// [`File`](crate::File), so "not requested" stays distinguishable from
    /// "requested, none found".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ExtractOptions: u8 {
        /// Extract import declarations.
        const IMPORTS = 1;
        /// Extract struct type declarations.
        const RECORDS = 1 << 1;
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl ExtractOptions {
    /// Build a mask from two independent switches.
    #[must_use]
    pub fn from_switches(imports: bool, records: bool) -> Self {
        let mut options = Self::empty();
        options.set(Self::IMPORTS, imports);
        options.set(Self::RECORDS, records);
        options
    }
}

/// Options for directory extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirOptions {
    pub extract: ExtractOptions,
    /// Include `*_test.go` files.
    pub include_tests: bool,
}

impl Default for DirOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            include_tests: true,
        }
    }
}
