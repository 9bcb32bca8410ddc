//! Behavioral tests for the `SourceCode` facade: memoization, failure
//! handling, and the parser injection seam.

use std::cell::Cell;
use std::rc::Rc;

use smelt::parser::parse;
use smelt::{NodeKind, ParseOutput, SourceCode, SourceParser, SyntaxError};

/// Parser wrapper that counts invocations, for pinning down when the facade
/// actually parses.
struct CountingParser {
    calls: Rc<Cell<usize>>,
}

impl SourceParser for CountingParser {
    fn parse_with_comments(&self, text: &str, _origin: &str) -> Result<ParseOutput, SyntaxError> {
        self.calls.set(self.calls.get() + 1);
        parse(text)
    }
}

#[test]
fn successful_parse_runs_once_across_repeated_access() {
    let calls = Rc::new(Cell::new(0));
    let source = SourceCode::from_string("class C\nend\n").with_parser(CountingParser {
        calls: Rc::clone(&calls),
    });

    source.syntax_tree().unwrap();
    source.syntax_tree().unwrap();
    source.syntax_tree().unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn failed_parse_is_not_cached() {
    let calls = Rc::new(Cell::new(0));
    let source = SourceCode::from_string("class C").with_parser(CountingParser {
        calls: Rc::clone(&calls),
    });

    assert!(source.syntax_tree().is_err());
    assert!(source.syntax_tree().is_err());
    assert_eq!(calls.get(), 2);
}

#[test]
fn repeated_access_returns_the_same_tree() {
    let source = SourceCode::from_string("x = 1\n");
    let first = source.syntax_tree().unwrap();
    let second = source.syntax_tree().unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn empty_input_yields_empty_tree() {
    let source = SourceCode::from_string("");
    let tree = source.syntax_tree().unwrap();
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(tree.definitions().is_empty());
}

#[test]
fn class_definition_is_reachable_from_tree() {
    let source = SourceCode::from_string("class Report\n  def render\n  end\nend\n");
    let tree = source.syntax_tree().unwrap();
    let defs = tree.definitions();
    assert_eq!(defs.len(), 2);
    assert!(matches!(&defs[0].kind, NodeKind::ClassDef { name, .. } if name == "Report"));
    assert_eq!(tree.qualified_name(defs[1].id), Some("Report#render"));
}

#[test]
fn parse_failure_names_the_origin() {
    let source = SourceCode::from_string("def broken(");
    let failure = source.syntax_tree().unwrap_err();
    assert_eq!(failure.origin, "string");
    assert_eq!(failure.cause.line, 1);
    assert!(failure.to_string().starts_with("string: 1:"));
}

#[test]
fn parse_failure_wraps_the_syntax_error() {
    use std::error::Error as _;
    let source = SourceCode::from_string("module M");
    let failure = source.syntax_tree().unwrap_err();
    let cause = failure.source().expect("cause must be exposed");
    assert_eq!(cause.to_string(), failure.cause.to_string());
}

#[test]
fn custom_parser_output_flows_through_decoration() {
    struct FixedParser;
    impl SourceParser for FixedParser {
        fn parse_with_comments(
            &self,
            _text: &str,
            _origin: &str,
        ) -> Result<ParseOutput, SyntaxError> {
            parse("module Fixed\nend\n")
        }
    }

    let source = SourceCode::from_string("ignored").with_parser(FixedParser);
    let tree = source.syntax_tree().unwrap();
    let root = tree.root().unwrap();
    assert_eq!(tree.qualified_name(root.id), Some("Fixed"));
}
