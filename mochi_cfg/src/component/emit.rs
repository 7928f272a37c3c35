//! Serialisation of components back to document text.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::Component;
use crate::{CfgResult, CfgResultExt};

/// Indentation used for emitted documents.
const INDENT: &[u8] = b"    ";

impl Component {
    /// Serialise the component as pretty-printed JSON.
    ///
    /// When `component_name` is given the component becomes the sole member
    /// of a wrapper object keyed by that name. The wrapper only borrows the
    /// component; the returned text is independent of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use mochi_cfg::{ConfigSource, resolve};
    ///
    /// # fn main() -> mochi_cfg::CfgResult<()> {
    /// let component = resolve(ConfigSource::text(r#"{"a": 1}"#), None, r#"{"b": 2}"#)?;
    /// assert_eq!(component.emit(None)?, "{\n    \"a\": 1,\n    \"b\": 2\n}");
    /// assert_eq!(
    ///     component.emit(Some("abt-io"))?,
    ///     "{\n    \"abt-io\": {\n        \"a\": 1,\n        \"b\": 2\n    }\n}"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::CfgError::Emit`] if serialisation fails.
    pub fn emit(&self, component_name: Option<&str>) -> CfgResult<String> {
        match component_name {
            Some(name) => to_pretty(&BTreeMap::from([(name, &self.members)])),
            None => to_pretty(&self.members),
        }
    }

    /// Serialise the component wrapped under the name it was resolved with.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CfgError::Emit`] if serialisation fails.
    pub fn emit_named(&self) -> CfgResult<String> {
        self.emit(self.name())
    }
}

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> CfgResult<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer).into_cfg()?;
    String::from_utf8(buffer)
        .map_err(<serde_json::Error as serde::ser::Error>::custom)
        .into_cfg()
}
