//! Primary error enum for resolution, accessor and emit flows.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::document::ValueKind;

/// Names the document a parse failure originated from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DocumentOrigin {
    /// Configuration supplied as in-memory text.
    Config,
    /// Configuration read from a file.
    ConfigFile(Utf8PathBuf),
    /// The defaults document.
    Defaults,
    /// A standalone fragment handed to an accessor.
    Fragment,
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => f.write_str("config"),
            Self::ConfigFile(path) => write!(f, "config file '{path}'"),
            Self::Defaults => f.write_str("default config"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors that can occur while resolving or manipulating a component.
///
/// Every variant is recoverable; the caller decides whether to abort.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CfgError {
    /// Document text was not well formed.
    #[error("{origin} line {line}, column {column}: {message}")]
    Parse {
        /// Document that failed to parse.
        origin: DocumentOrigin,
        /// One-based line reported by the parser, or zero when the failure
        /// has no source position.
        line: usize,
        /// One-based column reported by the parser, or zero when the failure
        /// has no source position.
        column: usize,
        /// Parser message without the position suffix.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while reading the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The user configuration lacks the requested component.
    #[error("config lacks '{component}' object")]
    MissingUserSection {
        /// Name of the requested component.
        component: String,
    },

    /// The defaults document lacks the requested component.
    #[error("default config lacks '{component}' object")]
    MissingDefaultsSection {
        /// Name of the requested component.
        component: String,
    },

    /// A located section is not an object.
    #[error("{origin} section '{section}' is {found}, expected an object")]
    NotAnObject {
        /// Document holding the offending section.
        origin: DocumentOrigin,
        /// Component name, or `(root)` when the whole document was used.
        section: String,
        /// Kind of value actually found.
        found: ValueKind,
    },

    /// The accessor key is absent from the target object.
    #[error("key '{key}' not found")]
    KeyNotFound {
        /// Key that was looked up.
        key: String,
    },

    /// The accessor key holds a value of another kind.
    #[error("key '{key}' holds {found}, expected {expected}")]
    WrongKind {
        /// Key that was looked up.
        key: String,
        /// Kind the accessor works with.
        expected: ValueKind,
        /// Kind stored under the key.
        found: ValueKind,
    },

    /// The component could not be serialised.
    #[error("failed to emit component: {source}")]
    Emit {
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },
}
