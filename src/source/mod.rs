//! Source ingestion and the syntax-tree facade.

mod input;
mod source_code;

pub use input::{InputSource, STDIN_ORIGIN, STRING_ORIGIN};
pub use source_code::{ParseFailure, SourceCode};
