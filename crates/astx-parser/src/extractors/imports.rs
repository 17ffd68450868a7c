use ast_grep_core::AstGrep;
use ast_grep_core::matcher::KindMatcher;
use ast_grep_language::SupportLang;

use super::comments::CommentIndex;
use super::helpers::start_line;
use crate::types::Import;

/// Extract import specs in declaration order, grouped or not.
pub(super) fn extract_imports<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &AstGrep<D>,
    index: &CommentIndex<'_>,
) -> Vec<Import> {
    let matcher = KindMatcher::new("import_spec", SupportLang::Go);

    root.root()
        .find_all(&matcher)
        .map(|spec| Import {
            alias: spec.field("name").map(|n| n.text().to_string()),
            path: spec
                .field("path")
                .map(|p| p.text().to_string())
                .unwrap_or_default(),
            doc: index.doc_for(&spec),
            comments: index.trailing_for(&spec),
            line: start_line(&spec),
        })
        .collect()
}
