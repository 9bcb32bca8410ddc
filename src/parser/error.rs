//! The lexical/syntactic failure type.

use crate::base::{LineIndex, TextRange};
use thiserror::Error;

/// A lexical or syntactic error that aborted a parse.
///
/// Carries the byte range of the offending input plus a 1-based line/column
/// pair for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    /// 1-based line for display.
    pub line: u32,
    /// 1-based column for display.
    pub column: u32,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange, line_index: &LineIndex) -> Self {
        let pos = line_index.line_col(range.start());
        Self {
            message: message.into(),
            range,
            line: pos.line + 1,
            column: pos.col + 1,
        }
    }
}
