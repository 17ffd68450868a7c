use pretty_assertions::assert_eq;

use super::*;

#[test]
fn records_only_leaves_imports_unset() {
    let file = extract_source(POINT_FIXTURE, ExtractOptions::RECORDS).expect("extract");
    assert_eq!(file.imports, None);
    assert_eq!(records_of(&file).len(), 1);
}

#[test]
fn imports_only_leaves_records_unset() {
    let file = extract_source(POINT_FIXTURE, ExtractOptions::IMPORTS).expect("extract");
    assert_eq!(file.records, None);
    assert_eq!(imports_of(&file).len(), 2);
}

#[test]
fn empty_mask_still_reports_package() {
    let file = extract_source(POINT_FIXTURE, ExtractOptions::empty()).expect("extract");
    assert_eq!(file.package, "geometry");
    assert_eq!(file.imports, None);
    assert_eq!(file.records, None);
}

#[test]
fn unset_parts_serialize_as_null() {
    let file = extract_source(POINT_FIXTURE, ExtractOptions::RECORDS).expect("extract");
    let value = serde_json::to_value(&file).expect("serialize");
    assert!(value["imports"].is_null());
    assert!(value["records"].is_array());
}
