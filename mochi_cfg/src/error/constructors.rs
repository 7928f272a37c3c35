//! Shorthand constructors returning shared [`CfgError`] values.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;

use super::{CfgError, DocumentOrigin};
use crate::document::ValueKind;

/// Label used for sections when no component name was supplied.
pub(crate) const ROOT_SECTION: &str = "(root)";

impl CfgError {
    /// Build a parse error from a `serde_json` failure.
    ///
    /// The position suffix `serde_json` appends to its message is stripped
    /// because line and column are carried separately.
    pub(crate) fn json_parse(origin: DocumentOrigin, err: &serde_json::Error) -> Arc<Self> {
        let text = err.to_string();
        let message = text
            .rsplit_once(" at line ")
            .map_or(text.as_str(), |(head, _)| head)
            .to_owned();
        Arc::new(Self::Parse {
            origin,
            line: err.line(),
            column: err.column(),
            message,
        })
    }

    pub(crate) fn file(path: &Utf8Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: err.into(),
        })
    }

    pub(crate) fn missing_user_section(component: &str) -> Arc<Self> {
        Arc::new(Self::MissingUserSection {
            component: component.to_owned(),
        })
    }

    pub(crate) fn missing_defaults_section(component: &str) -> Arc<Self> {
        Arc::new(Self::MissingDefaultsSection {
            component: component.to_owned(),
        })
    }

    pub(crate) fn not_an_object(
        origin: DocumentOrigin,
        component: Option<&str>,
        found: ValueKind,
    ) -> Arc<Self> {
        Arc::new(Self::NotAnObject {
            origin,
            section: component.unwrap_or(ROOT_SECTION).to_owned(),
            found,
        })
    }

    pub(crate) fn key_not_found(key: &str) -> Arc<Self> {
        Arc::new(Self::KeyNotFound {
            key: key.to_owned(),
        })
    }

    pub(crate) fn wrong_kind(key: &str, expected: ValueKind, found: ValueKind) -> Arc<Self> {
        Arc::new(Self::WrongKind {
            key: key.to_owned(),
            expected,
            found,
        })
    }

    /// Returns `true` when the error reports an absent accessor key.
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }

    /// Returns `true` when the error originates from malformed document text.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
