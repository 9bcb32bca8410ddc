//! Comment tokens and comment-to-node association.
//!
//! The lexer captures `#` comments out-of-band; the parser hands them through
//! untouched. [`CommentAssociator`] then decides which node each comment
//! documents:
//!
//! - consecutive comment-only lines form a block; a block attaches as
//!   *leading* comments to the outermost node starting on the line
//!   immediately below it (a blank line breaks the association);
//! - a comment on the same line as, and after, the start of a node attaches
//!   as a *trailing* comment to the innermost such node;
//! - comments adjacent to nothing are left out of the map.
//!
//! Nodes can share a start offset (a call and its receiver). Node ids break
//! such ties: children carry smaller ids than their parents, so the largest
//! id is the outermost node and the smallest the innermost.

use std::cmp::Reverse;

use crate::base::{LineIndex, NodeId, TextRange};
use crate::syntax::ast::Node;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// A raw comment token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The comment text as written, including the leading `#`.
    pub text: SmolStr,
    pub range: TextRange,
}

impl Comment {
    pub fn new(text: impl Into<SmolStr>, range: TextRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    /// The comment body with the `#` marker and one leading space stripped.
    pub fn content(&self) -> &str {
        let body = self.text.strip_prefix('#').unwrap_or(&self.text);
        body.strip_prefix(' ').unwrap_or(body)
    }
}

/// Comments keyed by the node they document, in source order per node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentMap {
    map: FxHashMap<NodeId, Vec<Comment>>,
}

impl CommentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, node: NodeId, comment: Comment) {
        self.map.entry(node).or_default().push(comment);
    }

    /// The comments documenting a node, empty if it has none.
    pub fn comments_for(&self, node: NodeId) -> &[Comment] {
        self.map.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes that have at least one comment.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[Comment])> {
        self.map.iter().map(|(id, cs)| (*id, cs.as_slice()))
    }
}

/// Associates raw comments with the AST nodes they document.
///
/// Line adjacency drives the heuristic, so the associator is built over the
/// [`LineIndex`] of the text the AST was parsed from.
pub struct CommentAssociator<'a> {
    line_index: &'a LineIndex,
}

impl<'a> CommentAssociator<'a> {
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self { line_index }
    }

    pub fn associate(&self, root: &Node, comments: &[Comment]) -> CommentMap {
        let mut map = CommentMap::new();
        if comments.is_empty() {
            return map;
        }

        // Node starts grouped by line.
        let mut starts_by_line: FxHashMap<u32, Vec<(u32, NodeId)>> = FxHashMap::default();
        root.walk(&mut |node| {
            let offset = u32::from(node.range.start());
            let line = self.line_index.line(node.range.start());
            starts_by_line.entry(line).or_default().push((offset, node.id));
        });

        // Trailing comments first; what remains forms leading blocks.
        // Trailing: latest-starting node before the comment, innermost
        // (smallest id) on an offset tie.
        let mut leading: Vec<&Comment> = Vec::new();
        for comment in comments {
            let line = self.line_index.line(comment.range.start());
            let offset = u32::from(comment.range.start());
            let trailing_target = starts_by_line.get(&line).and_then(|starts| {
                starts
                    .iter()
                    .filter(|(start, _)| *start < offset)
                    .max_by_key(|(start, id)| (*start, Reverse(*id)))
            });
            match trailing_target {
                Some((_, id)) => {
                    tracing::trace!(node = %id, comment = %comment.text, "trailing comment");
                    map.attach(*id, comment.clone());
                }
                None => leading.push(comment),
            }
        }

        // Group contiguous comment-only lines into blocks and attach each
        // block to the outermost node on the line below it: earliest start,
        // largest id on an offset tie.
        let mut block: Vec<&Comment> = Vec::new();
        for (i, comment) in leading.iter().enumerate() {
            block.push(comment);
            let line = self.line_index.line(comment.range.start());
            let next_is_contiguous = leading
                .get(i + 1)
                .is_some_and(|next| self.line_index.line(next.range.start()) == line + 1);
            if next_is_contiguous {
                continue;
            }
            if let Some((_, id)) = starts_by_line.get(&(line + 1)).and_then(|starts| {
                starts
                    .iter()
                    .min_by_key(|(start, id)| (*start, Reverse(*id)))
            }) {
                for c in block.drain(..) {
                    tracing::trace!(node = %id, comment = %c.text, "leading comment");
                    map.attach(*id, c.clone());
                }
            } else {
                block.clear();
            }
        }

        map
    }
}
