//! Shared node helpers used by the Go extractors.

use ast_grep_core::Node;

/// 1-based line on which `node` starts.
pub(super) fn start_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    to_line(node.start_pos().line())
}

/// 1-based line on which `node` ends.
pub(super) fn end_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    to_line(node.end_pos().line())
}

#[allow(clippy::cast_possible_truncation)]
const fn to_line(zero_based: usize) -> u32 {
    zero_based as u32 + 1
}

/// Punctuation and terminators (`*`, `[`, `\n`, `;`) have no letters in
/// their kind; every grammar rule and keyword does.
pub(super) fn is_punctuation(kind: &str) -> bool {
    !kind.chars().any(char::is_alphabetic)
}

/// Children that are syntax rules rather than punctuation or comments.
pub(super) fn significant_children<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> impl Iterator<Item = Node<'r, D>> {
    node.children().filter(|c| {
        let kind = c.kind();
        kind.as_ref() != "comment" && !is_punctuation(kind.as_ref())
    })
}

/// Collapse runs of whitespace, including newlines, to a single space.
pub(super) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
