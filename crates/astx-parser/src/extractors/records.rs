//! Struct extraction.
//!
//! Top-level `type` declarations whose type is a struct literal become
//! [`Record`]s. Fields whose type is an inline struct, behind any number of
//! pointers, are expanded through the same builder into anonymous records.

use ast_grep_core::{AstGrep, Node};
use ast_grep_language::SupportLang;

use super::comments::CommentIndex;
use super::helpers::{end_line, significant_children, start_line};
use super::type_expr::TypeExpr;
use crate::types::{Field, Record, TagSet};

/// Where a struct node sits.
enum RecordOrigin {
    /// `type Name struct {...}` at the top level.
    Declared { name: String, comments: Vec<String> },
    /// Inline struct found as (the pointee of) a field type.
    Anonymous,
}

/// Extract every top-level struct declaration, in source order.
pub(super) fn extract_records<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &AstGrep<D>,
    index: &CommentIndex<'_>,
) -> Vec<Record> {
    let mut records = Vec::new();

    for decl in root.root().children() {
        if decl.kind().as_ref() != "type_declaration" {
            continue;
        }
        let comments = index.declaration_comments(&decl);

        for spec in decl.children() {
            let kind = spec.kind();
            if kind.as_ref() != "type_spec" && kind.as_ref() != "type_alias" {
                continue;
            }
            let Some(name) = spec.field("name").map(|n| n.text().to_string()) else {
                continue;
            };
            let Some(ty) = spec
                .field("type")
                .filter(|t| t.kind().as_ref() == "struct_type")
            else {
                continue;
            };

            let record = build_record(
                &ty,
                RecordOrigin::Declared {
                    name,
                    comments: comments.clone(),
                },
                index,
            );
            tracing::trace!(record = %record.name, fields = record.fields.len(), "extracted record");
            records.push(record);
        }
    }
    records
}

/// Build a record from a `struct_type` node.
fn build_record<D: ast_grep_core::Doc>(
    node: &Node<D>,
    origin: RecordOrigin,
    index: &CommentIndex<'_>,
) -> Record {
    let (name, comments) = match origin {
        RecordOrigin::Declared { name, comments } => (name, comments),
        RecordOrigin::Anonymous => (String::new(), Vec::new()),
    };

    let fields = node
        .children()
        .filter(|c| c.kind().as_ref() == "field_declaration_list")
        .flat_map(|list| list.children().collect::<Vec<_>>())
        .filter(|f| f.kind().as_ref() == "field_declaration")
        .map(|f| build_field(&f, index))
        .collect();

    Record {
        name,
        comments,
        fields,
        start_line: start_line(node),
        end_line: end_line(node),
    }
}

fn build_field<D: ast_grep_core::Doc>(node: &Node<D>, index: &CommentIndex<'_>) -> Field {
    let names: Vec<String> = node
        .children()
        .filter(|c| c.kind().as_ref() == "field_identifier")
        .map(|c| c.text().to_string())
        .collect();
    let embedded = names.is_empty();
    let type_node = node.field("type");

    let mut ty = type_node
        .as_ref()
        .map_or_else(|| TypeExpr::Unknown("missing type".to_string()), TypeExpr::from_node);
    // `*Logger` as an embedded field keeps its star outside the type node.
    if embedded && node.children().any(|c| c.kind().as_ref() == "*") {
        ty = TypeExpr::Pointer(Box::new(ty));
    }

    let name = if embedded {
        type_node
            .as_ref()
            .map(implicit_field_name)
            .unwrap_or_default()
    } else {
        names.join(", ")
    };
    if ty.has_unknown() {
        tracing::warn!(field = %name, line = start_line(node), "type rendered with '?' placeholder");
    }

    let raw_tag = node.field("tag").map(|t| t.text().to_string());
    let tag = raw_tag.as_deref().map(TagSet::parse);
    if let (Some(raw), Some(parsed)) = (&raw_tag, &tag)
        && parsed.is_empty()
        && raw.len() > 2
    {
        tracing::warn!(field = %name, tag = %raw, "struct tag has no key:\"value\" pairs");
    }

    let record = type_node
        .as_ref()
        .and_then(inline_struct)
        .map(|s| Box::new(build_record(&s, RecordOrigin::Anonymous, index)));

    Field {
        name,
        type_rendering: ty.to_string(),
        doc: index.doc_for(node),
        comments: index.trailing_for(node),
        tag,
        raw_tag,
        embedded,
        record,
        line: start_line(node),
    }
}

/// The inline struct behind a field type, through pointers and parentheses.
fn inline_struct<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    match node.kind().as_ref() {
        "struct_type" => Some(node.clone()),
        "pointer_type" | "parenthesized_type" => {
            significant_children(node).next().and_then(|t| inline_struct(&t))
        }
        _ => None,
    }
}

/// Go's implicit name for an embedded field: the unqualified type name.
fn implicit_field_name<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    match node.kind().as_ref() {
        "qualified_type" => node.field("name").map(|n| n.text().to_string()),
        "generic_type" => node.field("type").map(|t| implicit_field_name(&t)),
        _ => None,
    }
    .unwrap_or_else(|| node.text().to_string())
}
