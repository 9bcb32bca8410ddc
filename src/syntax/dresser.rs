//! Tree decoration.
//!
//! The parser produces a bare AST; decoration enriches it into the
//! [`DecoratedTree`] downstream analysis consumes. [`TreeDresser`] is the
//! injectable seam, [`StandardDresser`] the stock implementation: it bundles
//! the AST with its comment map and computes fully qualified names for every
//! definition node (`A::B` for nested namespaces, `A::B#m` for instance
//! methods, `A::B.m` for singleton methods).

use crate::base::NodeId;
use crate::syntax::ast::{Node, NodeKind};
use crate::syntax::comments::{Comment, CommentMap};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Decorates a bare AST and comment map into an analysis-ready tree.
///
/// `ast` is absent for empty or whitespace-only input; the comment map is
/// absent exactly when the AST is. Implementations must handle the degenerate
/// case without failing.
pub trait TreeDresser {
    fn dress(&self, ast: Option<Node>, comments: Option<CommentMap>) -> DecoratedTree;
}

/// The stock [`TreeDresser`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDresser;

impl TreeDresser for StandardDresser {
    fn dress(&self, ast: Option<Node>, comments: Option<CommentMap>) -> DecoratedTree {
        let mut qualified_names = FxHashMap::default();
        if let Some(root) = &ast {
            let mut namespace = Vec::new();
            collect_qualified_names(root, &mut namespace, &mut qualified_names);
        }
        DecoratedTree {
            root: ast,
            comments: comments.unwrap_or_default(),
            qualified_names,
        }
    }
}

fn collect_qualified_names(
    node: &Node,
    namespace: &mut Vec<SmolStr>,
    out: &mut FxHashMap<NodeId, SmolStr>,
) {
    match &node.kind {
        NodeKind::ClassDef { name, .. } | NodeKind::ModuleDef { name } => {
            namespace.push(name.clone());
            out.insert(node.id, join_namespace(namespace));
            for child in &node.children {
                collect_qualified_names(child, namespace, out);
            }
            namespace.pop();
        }
        NodeKind::MethodDef {
            name, singleton, ..
        } => {
            let qualified = if namespace.is_empty() {
                name.clone()
            } else {
                let sep = if *singleton { "." } else { "#" };
                SmolStr::from(format!("{}{}{}", join_namespace(namespace), sep, name))
            };
            out.insert(node.id, qualified);
            // Methods do not open a namespace for nested definitions.
            for child in &node.children {
                collect_qualified_names(child, namespace, out);
            }
        }
        _ => {
            for child in &node.children {
                collect_qualified_names(child, namespace, out);
            }
        }
    }
}

fn join_namespace(namespace: &[SmolStr]) -> SmolStr {
    SmolStr::from(
        namespace
            .iter()
            .map(SmolStr::as_str)
            .collect::<Vec<_>>()
            .join("::"),
    )
}

/// The decorated syntax tree: the AST plus per-node analysis helpers.
#[derive(Debug, Clone, Default)]
pub struct DecoratedTree {
    root: Option<Node>,
    comments: CommentMap,
    qualified_names: FxHashMap<NodeId, SmolStr>,
}

impl DecoratedTree {
    /// The AST root, absent for empty input.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Whether the tree holds no parsed code at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The comments documenting a node, empty if it has none.
    pub fn comments_for(&self, node: NodeId) -> &[Comment] {
        self.comments.comments_for(node)
    }

    pub fn comment_map(&self) -> &CommentMap {
        &self.comments
    }

    /// The fully qualified name of a definition node.
    pub fn qualified_name(&self, node: NodeId) -> Option<&str> {
        self.qualified_names.get(&node).map(SmolStr::as_str)
    }

    /// All definition nodes (classes, modules, methods) in preorder.
    pub fn definitions(&self) -> Vec<&Node> {
        let mut defs = Vec::new();
        if let Some(root) = &self.root {
            root.walk(&mut |n| {
                if n.is_definition() {
                    defs.push(n);
                }
            });
        }
        defs
    }

    /// Preorder traversal over every node in the tree.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        if let Some(root) = &self.root {
            root.walk(f);
        }
    }
}
