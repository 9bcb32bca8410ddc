//! Lexing and parsing.
//!
//! The [`parse`] entry point turns source text into a [`ParseOutput`]: a
//! typed AST plus the comments the lexer saw. [`SourceParser`] is the seam
//! through which alternate parser implementations can be injected; the
//! default is [`StandardParser`], a thin wrapper over [`parse`].

mod error;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;

pub use error::SyntaxError;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseOutput, parse};

use tracing::debug;

/// Parser abstraction used by the ingestion facade.
///
/// `origin` is a human-readable source label and is only used for
/// diagnostics; the parse itself depends solely on `text`.
pub trait SourceParser {
    fn parse_with_comments(&self, text: &str, origin: &str) -> Result<ParseOutput, SyntaxError>;
}

/// Default [`SourceParser`] backed by the built-in grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardParser;

impl SourceParser for StandardParser {
    fn parse_with_comments(&self, text: &str, origin: &str) -> Result<ParseOutput, SyntaxError> {
        debug!(origin, bytes = text.len(), "parsing source");
        let output = parse(text)?;
        debug!(
            origin,
            comments = output.comments.len(),
            has_ast = output.ast.is_some(),
            "parse complete"
        );
        Ok(output)
    }
}
