use pretty_assertions::assert_eq;

use super::*;

#[test]
fn inline_struct_expands_one_level() {
    let file = fixture_file();
    let point = find_record(&file, "Point");
    let meta = find_field(point, "Meta");
    assert_eq!(meta.doc, vec!["// Meta holds loosely typed extras."]);

    let inner = meta.record.as_deref().expect("Meta should expand");
    assert!(inner.is_anonymous());
    assert!(inner.comments.is_empty());

    let names: Vec<_> = inner.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["A, B", "C"]);
    assert!(inner.fields.iter().all(|f| f.record.is_none()));
    assert_eq!(find_field(inner, "C").comments, vec!["// trailing on C"]);
}

#[test]
fn multi_level_pointer_still_expands() {
    let source = "package p\n\ntype T struct {\n\tDeep **struct {\n\t\tV int\n\t}\n}\n";
    let file = parse_and_extract(source);
    let deep = find_field(find_record(&file, "T"), "Deep");
    assert_eq!(deep.type_rendering, "**struct{...}");

    let inner = deep.record.as_deref().expect("Deep should expand");
    assert_eq!(find_field(inner, "V").type_rendering, "int");
}

#[test]
fn nested_inline_structs_recurse() {
    let source = "package p\n\ntype T struct {\n\tOuter struct {\n\t\tInner *struct {\n\t\t\tLeaf string\n\t\t}\n\t}\n}\n";
    let file = parse_and_extract(source);
    let outer = find_field(find_record(&file, "T"), "Outer");
    let outer_record = outer.record.as_deref().expect("Outer should expand");
    let inner = find_field(outer_record, "Inner");
    let inner_record = inner.record.as_deref().expect("Inner should expand");
    assert_eq!(find_field(inner_record, "Leaf").type_rendering, "string");
    assert!(inner_record.fields[0].record.is_none());
}

#[test]
fn containers_of_structs_do_not_expand() {
    let source = "package p\n\ntype T struct {\n\tItems []struct{ A int }\n\tByKey map[string]struct{ B int }\n}\n";
    let file = parse_and_extract(source);
    let t = find_record(&file, "T");
    assert_eq!(find_field(t, "Items").type_rendering, "[]struct{...}");
    assert!(find_field(t, "Items").record.is_none());
    assert!(find_field(t, "ByKey").record.is_none());
}

#[test]
fn empty_inline_struct_expands_to_empty_record() {
    let source = "package p\n\ntype Set struct {\n\tSeen map[string]struct{}\n\tDone struct{}\n}\n";
    let file = parse_and_extract(source);
    let set = find_record(&file, "Set");
    assert_eq!(find_field(set, "Seen").type_rendering, "map[string]struct{}");

    let done = find_field(set, "Done");
    assert_eq!(done.type_rendering, "struct{}");
    let record = done.record.as_deref().expect("Done should expand");
    assert!(record.fields.is_empty());
}
