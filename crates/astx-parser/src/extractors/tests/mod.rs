use std::path::{Path, PathBuf};

use super::*;
pub(super) use crate::types::{Field, File, Import, Record, TagSet};

mod embedded;
mod selection;

const POINT_FIXTURE: &str = include_str!("../../../tests/fixtures/point.go");

fn parse_and_extract(source: &str) -> File {
    extract_source(source, ExtractOptions::default()).expect("extraction should succeed")
}

fn fixture_file() -> File {
    parse_and_extract(POINT_FIXTURE)
}

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn records_of(file: &File) -> &[Record] {
    file.records
        .as_deref()
        .expect("records should have been requested")
}

fn imports_of(file: &File) -> &[Import] {
    file.imports
        .as_deref()
        .expect("imports should have been requested")
}

fn find_record<'a>(file: &'a File, name: &str) -> &'a Record {
    file.record(name).unwrap_or_else(|| {
        let names: Vec<_> = records_of(file).iter().map(|r| r.name.as_str()).collect();
        panic!("should find record named '{name}', available: {names:?}")
    })
}

fn find_field<'a>(record: &'a Record, name: &str) -> &'a Field {
    record.field(name).unwrap_or_else(|| {
        let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
        panic!("should find field named '{name}', available: {names:?}")
    })
}

#[test]
fn extraction_is_idempotent() {
    pretty_assertions::assert_eq!(fixture_file(), fixture_file());
}

#[test]
fn parsed_tree_extracts_like_source_text() {
    let tree = crate::parse_source(POINT_FIXTURE).expect("fixture parses");
    let file = extract_tree(
        &tree,
        POINT_FIXTURE,
        crate::SOURCE_PATH,
        "",
        ExtractOptions::default(),
    );
    pretty_assertions::assert_eq!(file, fixture_file());
}
