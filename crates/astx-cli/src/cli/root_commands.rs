use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract one Go source file.
    File(FileArgs),
    /// Extract every Go file in a directory, grouped by package.
    Dir(DirArgs),
    /// Extract Go source text read from a file or stdin.
    Source(SourceArgs),
}

/// Which parts of each file to extract. Both when neither flag is given.
#[derive(Clone, Debug, Default, Args)]
pub struct SelectionArgs {
    /// Only extract imports.
    #[arg(long, conflicts_with = "records_only")]
    pub imports_only: bool,
    /// Only extract struct declarations.
    #[arg(long)]
    pub records_only: bool,
}

/// Arguments for `astx file`.
#[derive(Clone, Debug, Args)]
pub struct FileArgs {
    pub path: PathBuf,
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for `astx dir`.
#[derive(Clone, Debug, Args)]
pub struct DirArgs {
    pub path: PathBuf,
    #[command(flatten)]
    pub selection: SelectionArgs,
    /// Skip `*_test.go` files.
    #[arg(long)]
    pub no_tests: bool,
}

/// Arguments for `astx source`.
#[derive(Clone, Debug, Args)]
pub struct SourceArgs {
    /// File to read; stdin when absent or `-`.
    pub path: Option<PathBuf>,
    #[command(flatten)]
    pub selection: SelectionArgs,
}
