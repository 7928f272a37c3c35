//! Where the user configuration comes from.

use camino::Utf8Path;
use serde_json::Value;

use super::{parse_file, parse_text};
use crate::{CfgResult, DocumentOrigin};

/// User configuration handed to the resolver, either as text or as a file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigSource<'a> {
    /// Raw document text.
    Text(&'a str),
    /// Path to a document on disk.
    File(&'a Utf8Path),
}

impl<'a> ConfigSource<'a> {
    /// Source backed by in-memory `text`.
    #[must_use]
    pub const fn text(text: &'a str) -> Self {
        Self::Text(text)
    }

    /// Source backed by the file at `path`.
    #[must_use]
    pub fn file<P: AsRef<Utf8Path> + ?Sized>(path: &'a P) -> Self {
        Self::File(path.as_ref())
    }

    /// Origin attached to errors about this source.
    #[must_use]
    pub fn origin(&self) -> DocumentOrigin {
        match self {
            Self::Text(_) => DocumentOrigin::Config,
            Self::File(path) => DocumentOrigin::ConfigFile(path.to_path_buf()),
        }
    }

    /// Parse the source into a document value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CfgError::Parse`] for malformed text and
    /// [`crate::CfgError::File`] when a file cannot be read.
    pub fn load(&self) -> CfgResult<Value> {
        match self {
            Self::Text(text) => parse_text(text, DocumentOrigin::Config),
            Self::File(path) => parse_file(path),
        }
    }
}
