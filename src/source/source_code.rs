//! The ingestion facade.
//!
//! [`SourceCode`] owns one piece of source text and lazily produces its
//! decorated syntax tree. Parsing happens at most once per instance on the
//! success path; a failed parse is never cached, so a later call retries
//! from scratch.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, trace};

use crate::base::LineIndex;
use crate::parser::{SourceParser, StandardParser, SyntaxError};
use crate::syntax::{CommentAssociator, DecoratedTree, StandardDresser, TreeDresser};

use super::input::InputSource;

/// A parse that could not produce a tree, labeled with where the text came
/// from. I/O problems are not parse failures and surface as [`io::Error`]
/// at construction time instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{origin}: {cause}")]
pub struct ParseFailure {
    pub origin: String,
    #[source]
    pub cause: SyntaxError,
}

/// Source text plus its memoized syntax tree.
///
/// The cache cell makes this type single-threaded by construction; build one
/// `SourceCode` per thread instead of sharing.
pub struct SourceCode {
    text: String,
    origin: String,
    parser: Box<dyn SourceParser>,
    dresser: Box<dyn TreeDresser>,
    tree: RefCell<Option<Rc<DecoratedTree>>>,
}

impl SourceCode {
    /// Ingest any [`InputSource`], reading it to completion now.
    pub fn from_source(source: InputSource) -> io::Result<Self> {
        let (text, origin) = source.resolve()?;
        Ok(Self::new(text, origin))
    }

    /// Ingest raw text, labeled `"string"`.
    pub fn from_string(text: impl Into<String>) -> Self {
        Self::new(text.into(), super::input::STRING_ORIGIN.to_string())
    }

    /// Open and read a file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::from_source(InputSource::Path(path.as_ref().to_path_buf()))
    }

    /// Read an already-open file, keeping `path` as the origin label.
    pub fn from_file(path: impl AsRef<Path>, file: File) -> io::Result<Self> {
        Self::from_source(InputSource::File {
            path: path.as_ref().to_path_buf(),
            file,
        })
    }

    /// Drain a stream, labeled `"STDIN"`.
    pub fn from_stream(reader: impl Read + 'static) -> io::Result<Self> {
        Self::from_source(InputSource::Stream(Box::new(reader)))
    }

    fn new(text: String, origin: String) -> Self {
        Self {
            text,
            origin,
            parser: Box::new(StandardParser),
            dresser: Box::new(StandardDresser),
            tree: RefCell::new(None),
        }
    }

    /// Replace the default parser. Clears any cached tree.
    pub fn with_parser(mut self, parser: impl SourceParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self.tree = RefCell::new(None);
        self
    }

    /// Replace the default dresser. Clears any cached tree.
    pub fn with_dresser(mut self, dresser: impl TreeDresser + 'static) -> Self {
        self.dresser = Box::new(dresser);
        self.tree = RefCell::new(None);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The decorated syntax tree for this source.
    ///
    /// The first successful call parses, associates comments, and decorates;
    /// later calls return the same [`Rc`]. Failures propagate without being
    /// cached, so calling again after an error re-runs the parser.
    pub fn syntax_tree(&self) -> Result<Rc<DecoratedTree>, ParseFailure> {
        if let Some(tree) = self.tree.borrow().as_ref() {
            trace!(origin = %self.origin, "returning cached syntax tree");
            return Ok(Rc::clone(tree));
        }

        let output = self
            .parser
            .parse_with_comments(&self.text, &self.origin)
            .map_err(|cause| ParseFailure {
                origin: self.origin.clone(),
                cause,
            })?;

        let comment_map = output.ast.as_ref().map(|root| {
            let line_index = LineIndex::new(&self.text);
            CommentAssociator::new(&line_index).associate(root, &output.comments)
        });

        let tree = Rc::new(self.dresser.dress(output.ast, comment_map));
        debug!(
            origin = %self.origin,
            nodes = tree.root().map_or(0, |r| r.node_count()),
            comments = tree.comment_map().len(),
            "built syntax tree"
        );
        *self.tree.borrow_mut() = Some(Rc::clone(&tree));
        Ok(tree)
    }
}

impl std::fmt::Debug for SourceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceCode")
            .field("origin", &self.origin)
            .field("bytes", &self.text.len())
            .field("cached", &self.tree.borrow().is_some())
            .finish()
    }
}
