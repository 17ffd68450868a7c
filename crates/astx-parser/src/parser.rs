//! ast-grep wrapper around the tree-sitter Go grammar.
//!
//! tree-sitter always produces a tree, recovering from bad input with `ERROR`
//! and zero-width "missing" nodes. [`parse_source`] turns the first such node
//! into a [`ParserError::Parse`] so callers never see a half-parsed file.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Path reported for sources that did not come from a file.
pub const SOURCE_PATH: &str = "source";

/// Returns `true` for paths with a `.go` extension.
#[must_use]
pub fn is_go_file(file_path: &str) -> bool {
    file_path
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| ext == "go" && !stem.is_empty() && !stem.ends_with('/'))
}

/// Parse Go source into an ast-grep tree.
///
/// # Errors
/// Returns [`ParserError::Parse`] when the tree contains a syntax error or the
/// file has no `package` clause.
pub fn parse_source(source: &str) -> Result<AstTree, ParserError> {
    use ast_grep_language::LanguageExt;

    let tree = SupportLang::Go.ast_grep(source);
    let root = tree.root();

    if let Some(bad) = first_syntax_error(&root) {
        let message = if bad.kind().as_ref() == "ERROR" {
            format!("unexpected {}", describe(&bad))
        } else {
            format!("missing {}", bad.kind())
        };
        return Err(parse_error(&bad, message));
    }

    if !root
        .children()
        .any(|c| c.kind().as_ref() == "package_clause")
    {
        return Err(ParserError::Parse {
            path: SOURCE_PATH.to_string(),
            line: 1,
            message: "expected 'package' clause".to_string(),
        });
    }

    Ok(tree)
}

fn parse_error<D: ast_grep_core::Doc>(node: &Node<D>, message: String) -> ParserError {
    ParserError::Parse {
        path: SOURCE_PATH.to_string(),
        line: node.start_pos().line() as u32 + 1,
        message,
    }
}

/// Depth-first search for an `ERROR` node or a zero-width (missing) leaf.
fn first_syntax_error<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    for child in node.children() {
        if child.kind().as_ref() == "ERROR" || is_missing_leaf(&child) {
            return Some(child);
        }
        if let Some(found) = first_syntax_error(&child) {
            return Some(found);
        }
    }
    None
}

/// The Go grammar ends the last statement with a zero-width `\0` terminator
/// at EOF; every other empty leaf was inserted by error recovery.
fn is_missing_leaf<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.range().is_empty() && node.children().next().is_none() && node.kind().as_ref() != "\0"
}

/// Short description of the offending text for error messages.
fn describe<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let text = node.text();
    let first_line = text.lines().next().unwrap_or_default().trim();
    if first_line.is_empty() {
        "input".to_string()
    } else if first_line.chars().count() > 40 {
        let cut: String = first_line.chars().take(40).collect();
        format!("'{cut}...'")
    } else {
        format!("'{first_line}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_go_file() {
        assert!(is_go_file("main.go"));
        assert!(is_go_file("pkg/server/handler_test.go"));
    }

    #[test]
    fn detect_non_go_files() {
        assert!(!is_go_file("main.rs"));
        assert!(!is_go_file("README"));
        assert!(!is_go_file("notes.go.txt"));
        assert!(!is_go_file("dir/.go"));
    }

    #[test]
    fn parse_source_produces_valid_tree() {
        let tree = parse_source("package demo\n").expect("valid source");
        assert_eq!(tree.root().kind().as_ref(), "source_file");
    }

    #[test]
    fn parse_source_rejects_syntax_errors() {
        let err = parse_source("package demo\n\ntype Point struct {\n\tX int\n")
            .err()
            .expect("unterminated struct should fail");
        assert!(matches!(err, ParserError::Parse { .. }), "err: {err:?}");
    }

    #[test]
    fn parse_source_rejects_garbage_declarations() {
        let err = parse_source("package demo\n\n}}} nope (\n")
            .err()
            .expect("garbage should fail");
        let ParserError::Parse { path, line, .. } = err else {
            panic!("expected parse error");
        };
        assert_eq!(path, SOURCE_PATH);
        assert!(line >= 1);
    }

    #[test]
    fn parse_source_requires_package_clause() {
        let err = parse_source("// just a comment\n")
            .err()
            .expect("no package clause");
        assert!(err.to_string().contains("package"), "err: {err}");
    }
}
