//! Typed AST produced by the parser.
//!
//! Every node carries a [`NodeId`] and a byte [`TextRange`]. The id is the
//! node's identity for side tables such as the comment map; the range is used
//! for diagnostics and comment adjacency.
//!
//! Children are stored generically in source order. Kinds with structured
//! children document their layout:
//!
//! - `ClassDef` / `ModuleDef` / `MethodDef`: `[body]` where `body` is a
//!   `Begin` (possibly empty)
//! - `If` / `Unless`: `[condition, then-branch, else-branch]`, branches are
//!   `Begin` nodes
//! - `Assign`: `[value]`
//! - `Send`: `[receiver?, args...]` - `receiver` present iff `has_receiver`
//! - `BinaryOp`: `[lhs, rhs]`
//! - `Return`: `[value?]`

use crate::base::{NodeId, TextRange};
use smol_str::SmolStr;

/// The kind of a variable an assignment writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Local,
    Instance,
    Constant,
}

/// All node kinds in the ingested language.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// `class Name < Super ... end`
    ClassDef {
        name: SmolStr,
        superclass: Option<SmolStr>,
    },
    /// `module Name ... end`
    ModuleDef { name: SmolStr },
    /// `def name(params) ... end`, `singleton` for `def self.name`
    MethodDef {
        name: SmolStr,
        params: Vec<SmolStr>,
        singleton: bool,
    },
    /// A statement sequence.
    Begin,
    /// `if cond ... elsif ... else ... end` (elsif chains nest in the
    /// else-branch)
    If,
    /// `unless cond ... else ... end`
    Unless,
    /// `target = value`
    Assign { target: SmolStr, kind: VarKind },
    /// A method call, with or without an explicit receiver.
    Send { name: SmolStr, has_receiver: bool },
    /// A binary operator application.
    BinaryOp { op: SmolStr },
    /// `return value?`
    Return,
    /// A (possibly `::`-qualified) constant reference.
    ConstRef { name: SmolStr },
    /// A bare lowercase identifier read.
    LocalRef { name: SmolStr },
    /// An `@ivar` read.
    IvarRef { name: SmolStr },
    SelfRef,
    IntLit { value: i64 },
    FloatLit { value: f64 },
    StrLit { value: SmolStr },
    SymLit { name: SmolStr },
    NilLit,
    TrueLit,
    FalseLit,
}

/// A single AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub range: TextRange,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind, range: TextRange, children: Vec<Node>) -> Self {
        Self {
            id,
            kind,
            range,
            children,
        }
    }

    /// Whether this node defines a namespace or method.
    pub fn is_definition(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::ClassDef { .. } | NodeKind::ModuleDef { .. } | NodeKind::MethodDef { .. }
        )
    }

    /// The declared or referenced name, where the kind carries one.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::ClassDef { name, .. }
            | NodeKind::ModuleDef { name }
            | NodeKind::MethodDef { name, .. }
            | NodeKind::Send { name, .. }
            | NodeKind::ConstRef { name }
            | NodeKind::LocalRef { name }
            | NodeKind::IvarRef { name }
            | NodeKind::SymLit { name } => Some(name),
            NodeKind::Assign { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Preorder traversal over this node and all descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Find the first node (preorder) matching a predicate.
    pub fn find(&self, pred: &impl Fn(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}
