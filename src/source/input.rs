//! Input ingestion.
//!
//! [`InputSource`] is the closed set of shapes source text can arrive in.
//! Resolving one yields the text plus an origin label used in diagnostics.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

/// Origin label for stream inputs.
pub const STDIN_ORIGIN: &str = "STDIN";

/// Origin label for raw string inputs.
pub const STRING_ORIGIN: &str = "string";

/// A source of program text.
///
/// Each variant resolves to `(text, origin)`; the origin is a display label,
/// not necessarily a filesystem path.
pub enum InputSource {
    /// An already-open file with the path it was opened from.
    File { path: PathBuf, file: File },
    /// An arbitrary byte stream, labeled [`STDIN_ORIGIN`].
    Stream(Box<dyn Read>),
    /// A path to open and read.
    Path(PathBuf),
    /// Raw text, labeled [`STRING_ORIGIN`].
    Text(String),
}

impl InputSource {
    /// Read the source to completion, returning the text and origin label.
    ///
    /// I/O failures propagate untranslated; they are not parse failures.
    pub fn resolve(self) -> io::Result<(String, String)> {
        match self {
            InputSource::File { path, mut file } => {
                let origin = path.display().to_string();
                let mut text = String::new();
                file.read_to_string(&mut text)?;
                debug!(%origin, bytes = text.len(), "read source from open file");
                Ok((text, origin))
            }
            InputSource::Stream(mut reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text)?;
                debug!(bytes = text.len(), "read source from stream");
                Ok((text, STDIN_ORIGIN.to_string()))
            }
            InputSource::Path(path) => {
                let origin = path.display().to_string();
                let text = std::fs::read_to_string(&path)?;
                debug!(%origin, bytes = text.len(), "read source from path");
                Ok((text, origin))
            }
            InputSource::Text(text) => Ok((text, STRING_ORIGIN.to_string())),
        }
    }
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File { path, .. } => {
                f.debug_struct("File").field("path", path).finish_non_exhaustive()
            }
            InputSource::Stream(_) => f.write_str("Stream(..)"),
            InputSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            InputSource::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<String> for InputSource {
    fn from(text: String) -> Self {
        InputSource::Text(text)
    }
}

impl From<&str> for InputSource {
    fn from(text: &str) -> Self {
        InputSource::Text(text.to_string())
    }
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        InputSource::Path(path)
    }
}

impl From<&std::path::Path> for InputSource {
    fn from(path: &std::path::Path) -> Self {
        InputSource::Path(path.to_path_buf())
    }
}
