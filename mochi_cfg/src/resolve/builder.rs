//! Reusable resolver configuration.

use camino::Utf8Path;

use super::resolve;
use crate::document::ConfigSource;
use crate::{CfgResult, Component};

/// Holds a defaults document and an optional component name so the same
/// settings can resolve several user configurations.
///
/// Every call parses the defaults afresh, so components resolved by one
/// `Resolver` never share values.
///
/// # Examples
///
/// ```
/// use mochi_cfg::{ObjectAccess, Resolver};
///
/// # fn main() -> mochi_cfg::CfgResult<()> {
/// let resolver = Resolver::new(r#"{"margo": {"rpc_thread_count": 0, "progress": "auto"}}"#)
///     .component("margo");
///
/// let first = resolver.resolve_text(r#"{"margo": {"rpc_thread_count": 4}}"#)?;
/// let second = resolver.resolve_text(r#"{"margo": {"progress": "busy"}}"#)?;
/// assert_eq!(first.get_int("rpc_thread_count")?, 4);
/// assert_eq!(first.get_string("progress")?, "auto");
/// assert_eq!(second.get_int("rpc_thread_count")?, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Resolver {
    defaults: String,
    component: Option<String>,
}

impl Resolver {
    /// Creates a resolver that fills gaps from the `defaults` document text.
    #[must_use]
    pub fn new(defaults: impl Into<String>) -> Self {
        Self {
            defaults: defaults.into(),
            component: None,
        }
    }

    /// Restricts resolution to the component called `name`.
    #[must_use]
    pub fn component(mut self, name: impl Into<String>) -> Self {
        self.component = Some(name.into());
        self
    }

    /// Name of the component this resolver extracts, if any.
    #[must_use]
    pub fn component_name(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Defaults document text.
    #[must_use]
    pub fn defaults(&self) -> &str {
        &self.defaults
    }

    /// Resolves `source` with this resolver's settings.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(&self, source: ConfigSource<'_>) -> CfgResult<Component> {
        resolve(source, self.component_name(), &self.defaults)
    }

    /// Resolves configuration supplied as `text`.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve_text(&self, text: &str) -> CfgResult<Component> {
        self.resolve(ConfigSource::text(text))
    }

    /// Resolves configuration read from the file at `path`.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve_file(&self, path: impl AsRef<Utf8Path>) -> CfgResult<Component> {
        self.resolve(ConfigSource::File(path.as_ref()))
    }
}
