//! Foundation types for the Smelt toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`NodeId`] - Dense AST node identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other smelt modules.

mod line_index;
mod node_id;

pub use line_index::{LineCol, LineIndex};
pub use node_id::NodeId;

pub use text_size::{TextRange, TextSize};

// Re-export the text-size crate for convenience
pub use text_size;
