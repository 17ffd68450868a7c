//! # astx-parser
//!
//! ast-grep-based extraction of structural metadata from Go source files:
//! package name, imports, and struct declarations with their fields, tags,
//! comments and inline (anonymous) struct types.
//!
//! Parsing is delegated to the tree-sitter Go grammar shipped with
//! `ast-grep-language`; this crate turns the syntax tree into an owned,
//! serializable model.
//!
//! ```no_run
//! use astx_parser::{ExtractOptions, extract_file};
//!
//! let file = extract_file("point.go", ExtractOptions::RECORDS).expect("extract");
//! for record in file.records.unwrap_or_default() {
//!     println!("{}: {} fields", record.name, record.fields.len());
//! }
//! ```

pub mod error;
pub mod extractors;
pub mod parser;
mod test_files;
pub mod types;

pub use error::ParserError;
pub use extractors::type_expr::TypeExpr;
pub use extractors::{extract_dir, extract_dir_with, extract_file, extract_source};
pub use parser::{AstTree, SOURCE_PATH, is_go_file, parse_source};
pub use test_files::is_test_file;
pub use types::{DirOptions, ExtractOptions, Field, File, Import, Package, Record, TagSet};
