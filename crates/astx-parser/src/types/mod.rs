//! Extracted model: files, imports, struct records, fields and tags.
//!
//! Every value owns its strings; nothing borrows from the syntax tree.

mod file;
mod import;
mod options;
mod record;
mod tag;

pub use file::{File, Package};
pub use import::Import;
pub use options::{DirOptions, ExtractOptions};
pub use record::{Field, Record};
pub use tag::{TagPair, TagSet};
