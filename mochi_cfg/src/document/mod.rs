//! Parsing and classification of document values.
//!
//! The document model is [`serde_json::Value`] with insertion order
//! preserved. This module turns configuration text, configuration files and
//! accessor fragments into values, attaching a [`DocumentOrigin`] to every
//! parse failure so callers can tell which input was malformed.
//!
//! [`DocumentOrigin`]: crate::DocumentOrigin

mod kind;
mod parser;
mod source;

pub use kind::ValueKind;
pub use parser::{DocumentFormat, parse_file, parse_text};
pub use source::ConfigSource;
