//! # smelt
//!
//! Core library for source ingestion, parsing, and comment-aware syntax
//! trees. Heterogeneous inputs (files, streams, paths, raw strings) are
//! normalized into text plus an origin label, parsed into a typed AST,
//! enriched with comment associations, and decorated with qualified names.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! source    → InputSource resolution, SourceCode facade, ParseFailure
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, SourceParser trait
//!   ↓
//! syntax    → AST types, comments and association, tree decoration
//!   ↓
//! base      → Primitives (NodeId, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → source)
// ============================================================================

/// Foundation types: NodeId, LineIndex, TextRange
pub mod base;

/// Syntax: AST types, comment association, tree decoration
pub mod syntax;

/// Parser: Logos lexer, recursive-descent parser, SourceParser trait
pub mod parser;

/// Source ingestion: InputSource, SourceCode facade, ParseFailure
pub mod source;

// Re-export foundation types
pub use base::{LineCol, LineIndex, NodeId, TextRange, TextSize};

// Re-export the primary entry points
pub use parser::{ParseOutput, SourceParser, StandardParser, SyntaxError};
pub use source::{InputSource, ParseFailure, SourceCode};
pub use syntax::{Comment, CommentMap, DecoratedTree, Node, NodeKind, StandardDresser, TreeDresser};
