//! Conversions from external error types into [`CfgError`].

use super::CfgError;

/// Serialisation failures surface as [`CfgError::Emit`].
///
/// Every `serde_json::Error` converted here is labelled `Emit`, so parse
/// failures must not use this conversion (or `?` on a parse result). They
/// need a [`super::DocumentOrigin`] and go through `CfgError::json_parse`.
impl From<serde_json::Error> for CfgError {
    fn from(source: serde_json::Error) -> Self {
        Self::Emit { source }
    }
}
