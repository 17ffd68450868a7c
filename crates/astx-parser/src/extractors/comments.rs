//! Comment grouping and association.
//!
//! tree-sitter keeps comments as loose `comment` nodes. The index rebuilds
//! Go's comment groups (adjacent comments with no blank line or code between
//! them) and answers three questions by source position:
//!
//! - which group documents a node (`doc_for`): the group ending on the line
//!   directly above it, with nothing but whitespace in between;
//! - which group trails a node (`trailing_for`): the group starting on the
//!   node's last line, right after it;
//! - which groups belong to a top-level declaration
//!   (`declaration_comments`), following the rules of Go's `ast.CommentMap`.

use std::collections::HashMap;

use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::{AstGrep, Node};
use ast_grep_language::SupportLang;

use super::helpers::{end_line, is_punctuation, start_line};

#[derive(Debug)]
struct CommentGroup {
    comments: Vec<String>,
    start_byte: usize,
    end_byte: usize,
    start_line: u32,
    end_line: u32,
    /// Starts after code on the same line, so it can only span that line.
    trailing: bool,
}

/// Byte and line extent of a top-level node.
#[derive(Debug, Clone, Copy)]
struct Span {
    start_byte: usize,
    end_byte: usize,
    start_line: u32,
    end_line: u32,
}

impl Span {
    fn of<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        let range = node.range();
        Self {
            start_byte: range.start,
            end_byte: range.end,
            start_line: start_line(node),
            end_line: end_line(node),
        }
    }
}

/// Position index of the comment groups of one file.
#[derive(Debug)]
pub(crate) struct CommentIndex<'s> {
    source: &'s str,
    groups: Vec<CommentGroup>,
    /// Top-level node start byte -> indices into `groups`.
    top_level: HashMap<usize, Vec<usize>>,
}

impl<'s> CommentIndex<'s> {
    pub(crate) fn new<D: ast_grep_core::Doc<Lang = SupportLang>>(
        root: &AstGrep<D>,
        source: &'s str,
    ) -> Self {
        let matcher = KindMatcher::new("comment", SupportLang::Go);
        let mut index = Self {
            source,
            groups: Vec::new(),
            top_level: HashMap::new(),
        };

        for comment in root.root().find_all(&matcher) {
            index.push_comment(&comment);
        }

        let spans: Vec<Span> = root
            .root()
            .children()
            .filter(|c| {
                let kind = c.kind();
                kind.as_ref() != "comment" && !is_punctuation(kind.as_ref())
            })
            .map(|c| Span::of(&c))
            .collect();
        index.associate_top_level(&spans);

        tracing::trace!(groups = index.groups.len(), "built comment index");
        index
    }

    fn push_comment<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        let span = Span::of(node);
        let text = node.text().trim_end().to_string();

        if let Some(group) = self.groups.last_mut() {
            let gap = &self.source[group.end_byte..span.start_byte];
            let adjacent = gap.trim().is_empty() && span.start_line <= group.end_line + 1;
            let spills = group.trailing && span.start_line > group.start_line;
            if adjacent && !spills {
                group.comments.push(text);
                group.end_byte = span.end_byte;
                group.end_line = span.end_line;
                return;
            }
        }

        let trailing = !self.line_prefix(span.start_byte).trim().is_empty();
        self.groups.push(CommentGroup {
            comments: vec![text],
            start_byte: span.start_byte,
            end_byte: span.end_byte,
            start_line: span.start_line,
            end_line: span.end_line,
            trailing,
        });
    }

    /// Text between the start of the line holding `byte` and `byte`.
    fn line_prefix(&self, byte: usize) -> &'s str {
        let line_start = self.source[..byte].rfind('\n').map_or(0, |i| i + 1);
        &self.source[line_start..byte]
    }

    /// Assign each top-level group to a top-level node.
    ///
    /// A group goes to the node before it when it starts on the line that node
    /// ends on, or on the following line with a blank line after the group.
    /// Otherwise it goes to the node after it, and groups after the last node
    /// go to the last node.
    fn associate_top_level(&mut self, spans: &[Span]) {
        for (gi, group) in self.groups.iter().enumerate() {
            let after = spans.partition_point(|s| s.start_byte < group.start_byte);
            let prev = after.checked_sub(1).map(|i| &spans[i]);
            let next = spans.get(after);

            if prev.is_some_and(|p| p.end_byte > group.start_byte) {
                // Inside a declaration: belongs to a field or spec, not to the
                // declaration itself.
                continue;
            }

            let owner = match (prev, next) {
                (Some(p), _) if group.start_line == p.end_line => p,
                (Some(p), n)
                    if group.start_line == p.end_line + 1
                        && n.is_none_or(|n| n.start_line > group.end_line + 1) =>
                {
                    p
                }
                (_, Some(n)) => n,
                (Some(p), None) => p,
                (None, None) => continue,
            };
            self.top_level
                .entry(owner.start_byte)
                .or_default()
                .push(gi);
        }
    }

    /// Comments of the group documenting `node`, or empty.
    pub(crate) fn doc_for<D: ast_grep_core::Doc>(&self, node: &Node<D>) -> Vec<String> {
        let span = Span::of(node);
        let before = self
            .groups
            .partition_point(|g| g.end_byte <= span.start_byte);
        let Some(group) = before.checked_sub(1).map(|i| &self.groups[i]) else {
            return Vec::new();
        };

        let gap = &self.source[group.end_byte..span.start_byte];
        if group.trailing || !gap.trim().is_empty() || group.end_line + 1 != span.start_line {
            return Vec::new();
        }
        group.comments.clone()
    }

    /// Comments of the group trailing `node` on its last line, or empty.
    pub(crate) fn trailing_for<D: ast_grep_core::Doc>(&self, node: &Node<D>) -> Vec<String> {
        let span = Span::of(node);
        let after = self
            .groups
            .partition_point(|g| g.start_byte < span.end_byte);
        let Some(group) = self.groups.get(after) else {
            return Vec::new();
        };

        let gap = &self.source[span.end_byte..group.start_byte];
        let only_separators = gap.chars().all(|c| c == ';' || (c.is_whitespace() && c != '\n'));
        if group.start_line != span.end_line || !only_separators {
            return Vec::new();
        }
        group.comments.clone()
    }

    /// All comments associated with a top-level declaration, in source order.
    pub(crate) fn declaration_comments<D: ast_grep_core::Doc>(
        &self,
        node: &Node<D>,
    ) -> Vec<String> {
        self.top_level
            .get(&node.range().start)
            .into_iter()
            .flatten()
            .flat_map(|&gi| self.groups[gi].comments.iter().cloned())
            .collect()
    }
}
