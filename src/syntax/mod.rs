//! Syntax layer: AST node types, comments, and tree decoration.

pub mod ast;
pub mod comments;
pub mod dresser;

pub use ast::{Node, NodeKind, VarKind};
pub use comments::{Comment, CommentAssociator, CommentMap};
pub use dresser::{DecoratedTree, StandardDresser, TreeDresser};
