//! Logos-based lexer for the ingested language.
//!
//! Fast tokenization using the logos crate. Newlines are significant
//! (statement terminators) and are lexed separately from other whitespace;
//! `#` comments are ordinary tokens here and get pulled out of the stream by
//! the parser.

use crate::base::{TextRange, TextSize};
use logos::Logos;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match result {
            Ok(kind) => kind,
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// All token kinds in the ingested language
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r]+")]
    Whitespace,

    /// Significant: terminates a statement.
    #[token("\n")]
    Newline,

    #[regex(r"#[^\n]*")]
    Comment,

    // =========================================================================
    // LITERALS AND NAMES
    // =========================================================================
    #[regex(r"[a-z_][a-zA-Z0-9_]*[?!]?")]
    Ident,

    #[regex(r"[A-Z][a-zA-Z0-9_]*")]
    Const,

    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
    Ivar,

    #[regex(r":[a-zA-Z_][a-zA-Z0-9_]*[?!]?")]
    Symbol,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'[^'\n]*'")]
    String,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("::")]
    ColonColon,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("class")]
    ClassKw,
    #[token("def")]
    DefKw,
    #[token("else")]
    ElseKw,
    #[token("elsif")]
    ElsifKw,
    #[token("end")]
    EndKw,
    #[token("false")]
    FalseKw,
    #[token("if")]
    IfKw,
    #[token("module")]
    ModuleKw,
    #[token("nil")]
    NilKw,
    #[token("return")]
    ReturnKw,
    #[token("self")]
    SelfKw,
    #[token("then")]
    ThenKw,
    #[token("true")]
    TrueKw,
    #[token("unless")]
    UnlessKw,

    /// Unrecognized input (lexical failure). The catch-all loses every
    /// tie, so it only fires when nothing else matches.
    #[regex(r"[^\s]", priority = 0)]
    Error,
}

impl TokenKind {
    /// Trivia carries no grammar meaning. Newlines are NOT trivia.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// Statement terminators.
    pub fn is_terminator(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Semicolon)
    }

    /// Human-readable description for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Comment => "comment",
            TokenKind::Ident => "identifier",
            TokenKind::Const => "constant",
            TokenKind::Ivar => "instance variable",
            TokenKind::Symbol => "symbol",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::ColonColon => "`::`",
            TokenKind::EqEq => "`==`",
            TokenKind::BangEq => "`!=`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Dot => "`.`",
            TokenKind::Eq => "`=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::ClassKw => "`class`",
            TokenKind::DefKw => "`def`",
            TokenKind::ElseKw => "`else`",
            TokenKind::ElsifKw => "`elsif`",
            TokenKind::EndKw => "`end`",
            TokenKind::FalseKw => "`false`",
            TokenKind::IfKw => "`if`",
            TokenKind::ModuleKw => "`module`",
            TokenKind::NilKw => "`nil`",
            TokenKind::ReturnKw => "`return`",
            TokenKind::SelfKw => "`self`",
            TokenKind::ThenKw => "`then`",
            TokenKind::TrueKw => "`true`",
            TokenKind::UnlessKw => "`unless`",
            TokenKind::Error => "unrecognized input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_class() {
        let tokens = tokenize("class C; end");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ClassKw,
                TokenKind::Whitespace,
                TokenKind::Const,
                TokenKind::Semicolon,
                TokenKind::Whitespace,
                TokenKind::EndKw,
            ]
        );
    }

    #[test]
    fn test_lex_qualified_const() {
        let tokens = tokenize("A::B");
        assert_eq!(tokens[0].kind, TokenKind::Const);
        assert_eq!(tokens[1].kind, TokenKind::ColonColon);
        assert_eq!(tokens[2].kind, TokenKind::Const);
    }

    #[test]
    fn test_lex_comment_and_newline() {
        let tokens = tokenize("# note\ndef m");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "# note");
        assert_eq!(tokens[1].kind, TokenKind::Newline);
        assert_eq!(tokens[2].kind, TokenKind::DefKw);
    }

    #[test]
    fn test_lex_predicate_method_name() {
        let tokens = tokenize("empty?");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "empty?");
    }

    #[test]
    fn test_lex_literals() {
        let tokens = tokenize("42 3.14 \"hi\" 'lo' :sym @ivar");
        let kinds: Vec<_> = tokens
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer,
                TokenKind::Float,
                TokenKind::String,
                TokenKind::String,
                TokenKind::Symbol,
                TokenKind::Ivar,
            ]
        );
    }

    #[test]
    fn test_lex_offsets() {
        let tokens = tokenize("a = 1");
        assert_eq!(u32::from(tokens[0].offset), 0);
        assert_eq!(u32::from(tokens[2].offset), 2);
        assert_eq!(u32::from(tokens[4].offset), 4);
    }

    #[test]
    fn test_lex_unrecognized_input() {
        let tokens = tokenize("a $ b");
        assert_eq!(tokens[2].kind, TokenKind::Error);
        assert_eq!(tokens[2].text, "$");
    }
}
