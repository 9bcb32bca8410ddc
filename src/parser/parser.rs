//! Recursive descent parser for the ingested language.
//!
//! Builds a typed [`Node`] tree from tokens. Unlike an IDE-grade parser this
//! one is fail-fast: the first lexical or syntactic error aborts the parse
//! with a [`SyntaxError`], because downstream analysis has no use for a
//! partial tree.
//!
//! Comments never reach the grammar; they are captured out-of-band and
//! returned alongside the AST in [`ParseOutput`].

use super::error::SyntaxError;
use super::lexer::{Lexer, Token, TokenKind};
use crate::base::{LineIndex, NodeId, TextRange, TextSize};
use crate::syntax::ast::{Node, NodeKind, VarKind};
use crate::syntax::comments::Comment;
use smol_str::SmolStr;

/// Parse result: the AST root (absent for empty input) plus the raw comment
/// tokens in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub ast: Option<Node>,
    pub comments: Vec<Comment>,
}

/// Parse source text into an AST and comment list.
///
/// Zero top-level statements yield an absent AST, a single statement is
/// returned bare, and two or more are wrapped in a `Begin` node.
pub fn parse(input: &str) -> Result<ParseOutput, SyntaxError> {
    let mut comments = Vec::new();
    let mut tokens = Vec::new();
    for token in Lexer::new(input) {
        match token.kind {
            TokenKind::Whitespace => {}
            TokenKind::Comment => comments.push(Comment::new(token.text, token.range())),
            _ => tokens.push(token),
        }
    }

    let line_index = LineIndex::new(input);
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        line_index: &line_index,
        eof: TextSize::of(input),
        next_id: 0,
    };
    let ast = parser.parse_program()?;
    Ok(ParseOutput { ast, comments })
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    line_index: &'a LineIndex,
    eof: TextSize,
    next_id: u32,
}

impl<'a> Parser<'a> {
    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        self.current_kind().is_some_and(|k| kinds.contains(&k))
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current_offset(&self) -> TextSize {
        self.current().map(|t| t.offset).unwrap_or(self.eof)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Consume the current token. Callers must have checked it exists.
    fn bump(&mut self) -> Token<'a> {
        debug_assert!(self.pos < self.tokens.len());
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: TokenKind) -> Option<Token<'a>> {
        if self.at(kind) { Some(self.bump()) } else { None }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, SyntaxError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    fn skip_terminators(&mut self) {
        while self.current_kind().is_some_and(TokenKind::is_terminator) {
            self.pos += 1;
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn unexpected(&self, expected: &str) -> SyntaxError {
        match self.current() {
            None => SyntaxError::new(
                format!("unexpected end of input, expected {expected}"),
                TextRange::empty(self.eof),
                self.line_index,
            ),
            Some(token) if token.kind == TokenKind::Error => SyntaxError::new(
                format!("unrecognized token `{}`", token.text),
                token.range(),
                self.line_index,
            ),
            Some(token) => SyntaxError::new(
                format!("unexpected {}, expected {expected}", token.kind.describe()),
                token.range(),
                self.line_index,
            ),
        }
    }

    // =========================================================================
    // Node building
    // =========================================================================

    fn node(&mut self, kind: NodeKind, range: TextRange, children: Vec<Node>) -> Node {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        Node::new(id, kind, range, children)
    }

    /// Wrap statements into a `Begin` body node.
    fn make_body(&mut self, stmts: Vec<Node>, fallback: TextSize) -> Node {
        let range = match (stmts.first(), stmts.last()) {
            (Some(first), Some(last)) => TextRange::new(first.range.start(), last.range.end()),
            _ => TextRange::empty(fallback),
        };
        self.node(NodeKind::Begin, range, stmts)
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Program = Stmts EOF
    fn parse_program(&mut self) -> Result<Option<Node>, SyntaxError> {
        let mut stmts = self.parse_stmts_until(&[])?;
        if stmts.len() <= 1 {
            return Ok(stmts.pop());
        }
        let range = TextRange::new(
            stmts[0].range.start(),
            stmts[stmts.len() - 1].range.end(),
        );
        Ok(Some(self.node(NodeKind::Begin, range, stmts)))
    }

    /// Stmts = (Stmt (Newline | ';')*)* - stops at EOF or any stop kind
    fn parse_stmts_until(&mut self, stop: &[TokenKind]) -> Result<Vec<Node>, SyntaxError> {
        let mut stmts = Vec::new();
        loop {
            self.skip_terminators();
            if self.at_eof() || self.at_any(stop) {
                break;
            }
            stmts.push(self.parse_stmt()?);
            if !self.at_eof()
                && !self.at_any(stop)
                && !self.current_kind().is_some_and(TokenKind::is_terminator)
            {
                return Err(self.unexpected("a newline or `;`"));
            }
        }
        Ok(stmts)
    }

    fn parse_stmt(&mut self) -> Result<Node, SyntaxError> {
        match self.current_kind() {
            Some(TokenKind::ClassKw) => self.parse_class(),
            Some(TokenKind::ModuleKw) => self.parse_module(),
            Some(TokenKind::DefKw) => self.parse_def(),
            Some(TokenKind::IfKw) => {
                let kw = self.bump();
                self.parse_conditional(kw, false)
            }
            Some(TokenKind::UnlessKw) => {
                let kw = self.bump();
                self.parse_conditional(kw, true)
            }
            Some(TokenKind::ReturnKw) => self.parse_return(),
            _ => self.parse_expr(),
        }
    }

    /// Class = 'class' ConstPath ('<' ConstPath)? Stmts 'end'
    fn parse_class(&mut self) -> Result<Node, SyntaxError> {
        let kw = self.expect(TokenKind::ClassKw)?;
        let (name, _) = self.parse_const_path()?;
        let superclass = if self.eat(TokenKind::Lt).is_some() {
            Some(self.parse_const_path()?.0)
        } else {
            None
        };
        let (body, end) = self.parse_body_until_end()?;
        let range = TextRange::new(kw.offset, end);
        Ok(self.node(NodeKind::ClassDef { name, superclass }, range, vec![body]))
    }

    /// Module = 'module' ConstPath Stmts 'end'
    fn parse_module(&mut self) -> Result<Node, SyntaxError> {
        let kw = self.expect(TokenKind::ModuleKw)?;
        let (name, _) = self.parse_const_path()?;
        let (body, end) = self.parse_body_until_end()?;
        let range = TextRange::new(kw.offset, end);
        Ok(self.node(NodeKind::ModuleDef { name }, range, vec![body]))
    }

    /// Def = 'def' ('self' '.')? MethodName Params? Stmts 'end'
    fn parse_def(&mut self) -> Result<Node, SyntaxError> {
        let kw = self.expect(TokenKind::DefKw)?;
        let singleton = if self.at(TokenKind::SelfKw) {
            self.bump();
            self.expect(TokenKind::Dot)?;
            true
        } else {
            false
        };
        let name_token = if self.at(TokenKind::Ident) {
            self.bump()
        } else {
            return Err(self.unexpected("a method name"));
        };

        let mut params = Vec::new();
        if self.eat(TokenKind::LParen).is_some() {
            if !self.at(TokenKind::RParen) {
                loop {
                    let param = self.expect(TokenKind::Ident)?;
                    params.push(SmolStr::from(param.text));
                    if self.eat(TokenKind::Comma).is_none() {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen)?;
        }

        let (body, end) = self.parse_body_until_end()?;
        let range = TextRange::new(kw.offset, end);
        Ok(self.node(
            NodeKind::MethodDef {
                name: SmolStr::from(name_token.text),
                params,
                singleton,
            },
            range,
            vec![body],
        ))
    }

    /// Statements up to a matching 'end', returned as a `Begin` body plus the
    /// offset just past the 'end' keyword.
    fn parse_body_until_end(&mut self) -> Result<(Node, TextSize), SyntaxError> {
        let stmts = self.parse_stmts_until(&[TokenKind::EndKw])?;
        let fallback = self.current_offset();
        let body = self.make_body(stmts, fallback);
        let end = self.expect(TokenKind::EndKw)?;
        Ok((body, end.range().end()))
    }

    /// If     = 'if' Expr 'then'? Stmts ('elsif' ... | 'else' Stmts)? 'end'
    /// Unless = 'unless' Expr 'then'? Stmts ('else' Stmts)? 'end'
    ///
    /// `elsif` chains nest as an `If` inside the else-branch. The keyword
    /// token has already been consumed by the caller.
    fn parse_conditional(&mut self, kw: Token<'a>, negated: bool) -> Result<Node, SyntaxError> {
        let cond = self.parse_expr()?;
        self.eat(TokenKind::ThenKw);

        let stop: &[TokenKind] = if negated {
            &[TokenKind::ElseKw, TokenKind::EndKw]
        } else {
            &[TokenKind::ElsifKw, TokenKind::ElseKw, TokenKind::EndKw]
        };
        let then_stmts = self.parse_stmts_until(stop)?;
        let then_fallback = self.current_offset();
        let then_body = self.make_body(then_stmts, then_fallback);

        let (else_body, end) = match self.current_kind() {
            Some(TokenKind::ElsifKw) => {
                let elsif = self.bump();
                let nested = self.parse_conditional(elsif, false)?;
                let end = nested.range.end();
                let body = self.make_body(vec![nested], end);
                (body, end)
            }
            Some(TokenKind::ElseKw) => {
                self.bump();
                let else_stmts = self.parse_stmts_until(&[TokenKind::EndKw])?;
                let fallback = self.current_offset();
                let body = self.make_body(else_stmts, fallback);
                let end = self.expect(TokenKind::EndKw)?;
                (body, end.range().end())
            }
            _ => {
                let end = self.expect(TokenKind::EndKw)?;
                let body = self.make_body(Vec::new(), end.offset);
                (body, end.range().end())
            }
        };

        let kind = if negated { NodeKind::Unless } else { NodeKind::If };
        let range = TextRange::new(kw.offset, end);
        Ok(self.node(kind, range, vec![cond, then_body, else_body]))
    }

    /// Return = 'return' Expr?
    fn parse_return(&mut self) -> Result<Node, SyntaxError> {
        let kw = self.expect(TokenKind::ReturnKw)?;
        let ends_stmt = self.at_eof()
            || self.current_kind().is_some_and(TokenKind::is_terminator)
            || self.at_any(&[TokenKind::EndKw, TokenKind::ElsifKw, TokenKind::ElseKw]);
        if ends_stmt {
            return Ok(self.node(NodeKind::Return, kw.range(), vec![]));
        }
        let value = self.parse_expr()?;
        let range = TextRange::new(kw.offset, value.range.end());
        Ok(self.node(NodeKind::Return, range, vec![value]))
    }

    /// ConstPath = Const ('::' Const)*
    fn parse_const_path(&mut self) -> Result<(SmolStr, TextRange), SyntaxError> {
        let first = self.expect(TokenKind::Const)?;
        let start = first.offset;
        let mut end = first.range().end();
        let mut name = String::from(first.text);
        while self.eat(TokenKind::ColonColon).is_some() {
            let segment = self.expect(TokenKind::Const)?;
            name.push_str("::");
            name.push_str(segment.text);
            end = segment.range().end();
        }
        Ok((SmolStr::from(name), TextRange::new(start, end)))
    }

    // =========================================================================
    // Expressions (precedence climbing)
    // =========================================================================

    /// Expr = Assignment | Equality
    fn parse_expr(&mut self) -> Result<Node, SyntaxError> {
        let lhs = self.parse_binary(&[TokenKind::EqEq, TokenKind::BangEq], Self::parse_comparison)?;
        if !self.at(TokenKind::Eq) {
            return Ok(lhs);
        }

        let target = match &lhs.kind {
            NodeKind::LocalRef { name } => Some((name.clone(), VarKind::Local)),
            NodeKind::IvarRef { name } => Some((name.clone(), VarKind::Instance)),
            NodeKind::ConstRef { name } => Some((name.clone(), VarKind::Constant)),
            _ => None,
        };
        let Some((target, kind)) = target else {
            return Err(self.unexpected("a newline or `;`"));
        };
        self.bump(); // =
        let value = self.parse_expr()?;
        let range = TextRange::new(lhs.range.start(), value.range.end());
        Ok(self.node(NodeKind::Assign { target, kind }, range, vec![value]))
    }

    fn parse_comparison(&mut self) -> Result<Node, SyntaxError> {
        self.parse_binary(
            &[TokenKind::Lt, TokenKind::Gt, TokenKind::LtEq, TokenKind::GtEq],
            Self::parse_additive,
        )
    }

    fn parse_additive(&mut self) -> Result<Node, SyntaxError> {
        self.parse_binary(&[TokenKind::Plus, TokenKind::Minus], Self::parse_term)
    }

    fn parse_term(&mut self) -> Result<Node, SyntaxError> {
        self.parse_binary(&[TokenKind::Star, TokenKind::Slash], Self::parse_postfix)
    }

    /// Left-associative binary operator chain at one precedence level.
    fn parse_binary(
        &mut self,
        ops: &[TokenKind],
        next: fn(&mut Self) -> Result<Node, SyntaxError>,
    ) -> Result<Node, SyntaxError> {
        let mut lhs = next(self)?;
        while self.at_any(ops) {
            let op = self.bump();
            let rhs = next(self)?;
            let range = TextRange::new(lhs.range.start(), rhs.range.end());
            lhs = self.node(
                NodeKind::BinaryOp {
                    op: SmolStr::from(op.text),
                },
                range,
                vec![lhs, rhs],
            );
        }
        Ok(lhs)
    }

    /// Postfix = Primary ('.' MethodName Args?)*
    fn parse_postfix(&mut self) -> Result<Node, SyntaxError> {
        let mut receiver = self.parse_primary()?;
        while self.eat(TokenKind::Dot).is_some() {
            let name = if self.at(TokenKind::Ident) {
                self.bump()
            } else {
                return Err(self.unexpected("a method name"));
            };
            let mut end = name.range().end();
            let mut children = vec![receiver];
            if self.at(TokenKind::LParen) {
                let (args, close) = self.parse_call_args()?;
                children.extend(args);
                end = close;
            }
            let range = TextRange::new(children[0].range.start(), end);
            receiver = self.node(
                NodeKind::Send {
                    name: SmolStr::from(name.text),
                    has_receiver: true,
                },
                range,
                children,
            );
        }
        Ok(receiver)
    }

    /// Args = '(' (Expr (',' Expr)*)? ')'
    fn parse_call_args(&mut self) -> Result<(Vec<Node>, TextSize), SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if self.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        let close = self.expect(TokenKind::RParen)?;
        Ok((args, close.range().end()))
    }

    /// Primary = Literal | ConstPath | Ident Args? | Ivar | 'self' | '(' Expr ')'
    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        let Some(kind) = self.current_kind() else {
            return Err(self.unexpected("an expression"));
        };
        match kind {
            TokenKind::Integer => {
                let token = self.bump();
                let value = token.text.parse::<i64>().map_err(|_| {
                    SyntaxError::new(
                        "integer literal out of range",
                        token.range(),
                        self.line_index,
                    )
                })?;
                Ok(self.node(NodeKind::IntLit { value }, token.range(), vec![]))
            }
            TokenKind::Float => {
                let token = self.bump();
                let value = token.text.parse::<f64>().map_err(|_| {
                    SyntaxError::new("malformed float literal", token.range(), self.line_index)
                })?;
                Ok(self.node(NodeKind::FloatLit { value }, token.range(), vec![]))
            }
            TokenKind::String => {
                let token = self.bump();
                let value = SmolStr::from(&token.text[1..token.text.len() - 1]);
                Ok(self.node(NodeKind::StrLit { value }, token.range(), vec![]))
            }
            TokenKind::Symbol => {
                let token = self.bump();
                let name = SmolStr::from(&token.text[1..]);
                Ok(self.node(NodeKind::SymLit { name }, token.range(), vec![]))
            }
            TokenKind::NilKw => {
                let token = self.bump();
                Ok(self.node(NodeKind::NilLit, token.range(), vec![]))
            }
            TokenKind::TrueKw => {
                let token = self.bump();
                Ok(self.node(NodeKind::TrueLit, token.range(), vec![]))
            }
            TokenKind::FalseKw => {
                let token = self.bump();
                Ok(self.node(NodeKind::FalseLit, token.range(), vec![]))
            }
            TokenKind::SelfKw => {
                let token = self.bump();
                Ok(self.node(NodeKind::SelfRef, token.range(), vec![]))
            }
            TokenKind::Ivar => {
                let token = self.bump();
                Ok(self.node(
                    NodeKind::IvarRef {
                        name: SmolStr::from(token.text),
                    },
                    token.range(),
                    vec![],
                ))
            }
            TokenKind::Const => {
                let (name, range) = self.parse_const_path()?;
                Ok(self.node(NodeKind::ConstRef { name }, range, vec![]))
            }
            TokenKind::Ident => {
                let token = self.bump();
                if self.at(TokenKind::LParen) {
                    let (args, close) = self.parse_call_args()?;
                    let range = TextRange::new(token.offset, close);
                    Ok(self.node(
                        NodeKind::Send {
                            name: SmolStr::from(token.text),
                            has_receiver: false,
                        },
                        range,
                        args,
                    ))
                } else {
                    Ok(self.node(
                        NodeKind::LocalRef {
                            name: SmolStr::from(token.text),
                        },
                        token.range(),
                        vec![],
                    ))
                }
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.unexpected("an expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ast(input: &str) -> Node {
        parse(input)
            .unwrap_or_else(|e| panic!("parse failed: {e}"))
            .ast
            .expect("no AST produced")
    }

    #[test]
    fn test_parse_empty() {
        let output = parse("").unwrap();
        assert!(output.ast.is_none());
        assert!(output.comments.is_empty());
    }

    #[test]
    fn test_parse_whitespace_only() {
        let output = parse("  \n\t\n").unwrap();
        assert!(output.ast.is_none());
    }

    #[test]
    fn test_parse_comments_only() {
        let output = parse("# just\n# comments\n").unwrap();
        assert!(output.ast.is_none());
        assert_eq!(output.comments.len(), 2);
    }

    #[test]
    fn test_parse_class() {
        let ast = parse_ast("class C; end");
        assert!(matches!(&ast.kind, NodeKind::ClassDef { name, superclass: None } if name == "C"));
        // Body is a single empty Begin.
        assert_eq!(ast.children.len(), 1);
        assert!(ast.children[0].children.is_empty());
    }

    #[test]
    fn test_parse_class_with_superclass() {
        let ast = parse_ast("class C < Base::Error\nend");
        match &ast.kind {
            NodeKind::ClassDef { name, superclass } => {
                assert_eq!(name, "C");
                assert_eq!(superclass.as_deref(), Some("Base::Error"));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested_module() {
        let ast = parse_ast("module A\n  class B\n  end\nend");
        assert!(matches!(&ast.kind, NodeKind::ModuleDef { name } if name == "A"));
        let class = ast
            .find(&|n| matches!(n.kind, NodeKind::ClassDef { .. }))
            .unwrap();
        assert_eq!(class.name(), Some("B"));
    }

    #[test]
    fn test_parse_method_with_params() {
        let ast = parse_ast("def add(a, b)\n  a + b\nend");
        match &ast.kind {
            NodeKind::MethodDef {
                name,
                params,
                singleton,
            } => {
                assert_eq!(name, "add");
                assert_eq!(params.len(), 2);
                assert!(!singleton);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_parse_singleton_method() {
        let ast = parse_ast("def self.build\nend");
        assert!(matches!(
            &ast.kind,
            NodeKind::MethodDef { singleton: true, .. }
        ));
    }

    #[test]
    fn test_parse_unterminated_def_fails() {
        let err = parse("def m(").unwrap_err();
        assert!(err.message.contains("end of input"), "got: {}", err.message);
    }

    #[test]
    fn test_parse_missing_end_fails() {
        let err = parse("class C").unwrap_err();
        assert!(err.message.contains("`end`"), "got: {}", err.message);
    }

    #[test]
    fn test_parse_lexical_error() {
        let err = parse("a = $\n").unwrap_err();
        assert!(
            err.message.contains("unrecognized token"),
            "got: {}",
            err.message
        );
    }

    #[test]
    fn test_parse_two_statements_wrap_in_begin() {
        let ast = parse_ast("a = 1\nb = 2\n");
        assert!(matches!(ast.kind, NodeKind::Begin));
        assert_eq!(ast.children.len(), 2);
    }

    #[test]
    fn test_parse_assignment_kinds() {
        let ast = parse_ast("x = 1; @y = 2; Z = 3");
        let kinds: Vec<_> = ast
            .children
            .iter()
            .map(|n| match &n.kind {
                NodeKind::Assign { kind, .. } => *kind,
                other => panic!("unexpected kind: {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![VarKind::Local, VarKind::Instance, VarKind::Constant]
        );
    }

    #[test]
    fn test_parse_send_chain() {
        let ast = parse_ast("list.first.name(1, :sym)");
        match &ast.kind {
            NodeKind::Send { name, has_receiver } => {
                assert_eq!(name, "name");
                assert!(has_receiver);
                // receiver + two args
                assert_eq!(ast.children.len(), 3);
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn test_parse_if_elsif_else() {
        let ast = parse_ast("if a\n  1\nelsif b\n  2\nelse\n  3\nend");
        assert!(matches!(ast.kind, NodeKind::If));
        assert_eq!(ast.children.len(), 3);
        // The elsif nests as an If inside the else-branch.
        let else_branch = &ast.children[2];
        assert!(matches!(else_branch.children[0].kind, NodeKind::If));
    }

    #[test]
    fn test_parse_unless() {
        let ast = parse_ast("unless done?\n  run\nend");
        assert!(matches!(ast.kind, NodeKind::Unless));
    }

    #[test]
    fn test_parse_return_with_and_without_value() {
        let ast = parse_ast("def m\n  return 1\n  return\nend");
        let body = &ast.children[0];
        assert_eq!(body.children.len(), 2);
        assert_eq!(body.children[0].children.len(), 1);
        assert!(body.children[1].children.is_empty());
    }

    #[test]
    fn test_parse_operator_precedence() {
        let ast = parse_ast("a + b * c");
        match &ast.kind {
            NodeKind::BinaryOp { op } => assert_eq!(op, "+"),
            other => panic!("unexpected kind: {other:?}"),
        }
        assert!(matches!(&ast.children[1].kind, NodeKind::BinaryOp { op } if op == "*"));
    }

    #[test]
    fn test_parse_missing_terminator_fails() {
        let err = parse("a = 1 b = 2").unwrap_err();
        assert!(err.message.contains("newline"), "got: {}", err.message);
    }

    #[test]
    fn test_node_ids_are_unique() {
        let ast = parse_ast("class C\n  def m\n    @x = 1\n  end\nend");
        let mut ids = Vec::new();
        ast.walk(&mut |n| ids.push(n.id));
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn test_comments_carry_ranges() {
        let output = parse("# leading\nx = 1\n").unwrap();
        assert_eq!(output.comments.len(), 1);
        assert_eq!(output.comments[0].text, "# leading");
        assert_eq!(u32::from(output.comments[0].range.start()), 0);
        assert_eq!(u32::from(output.comments[0].range.end()), 9);
    }
}
