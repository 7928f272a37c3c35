//! Resolve configuration components and fill in their defaults.
//!
//! A configuration document usually carries one object per component, for
//! example `{"margo": {...}, "abt-io": {...}}`. [`resolve`] extracts one of
//! those components from the user's document and fills every parameter the
//! user left out from a defaults document. Values the user supplied always
//! win. Defaults are merged at the top level of the component and one level
//! into nested objects.
//!
//! The resolved [`Component`] exposes typed accessors through
//! [`ObjectAccess`] and [`ObjectAccessMut`] and serialises back to
//! pretty-printed JSON with [`Component::emit`].
//!
//! ```
//! use mochi_cfg::{ConfigSource, ObjectAccess, ObjectAccessMut, resolve};
//!
//! # fn main() -> mochi_cfg::CfgResult<()> {
//! let mut component = resolve(
//!     ConfigSource::text(r#"{"abt-io": {"a": 1, "list": [1, 2]}}"#),
//!     Some("abt-io"),
//!     r#"{"abt-io": {"a": 2, "b": 3}}"#,
//! )?;
//! assert_eq!(component.get_int("a")?, 1);
//! assert_eq!(component.get_int("b")?, 3);
//!
//! component.append_array_by_text("list", "7")?;
//! assert_eq!(component.get_array("list")?.len(), 3);
//!
//! let text = component.emit(Some("abt-io"))?;
//! assert!(text.starts_with("{\n    \"abt-io\": {"));
//! # Ok(())
//! # }
//! ```
//!
//! All operations run synchronously on the calling thread. Components are
//! plain owned values: callers that share one across threads must provide
//! their own synchronisation.

mod access;
mod component;
mod document;
mod error;
mod resolve;
mod result_ext;

pub use access::{ObjectAccess, ObjectAccessMut, ObjectMut, ObjectRef};
pub use component::Component;
pub use document::{ConfigSource, DocumentFormat, ValueKind, parse_file, parse_text};
pub use error::{CfgError, DocumentOrigin};
pub use resolve::{Resolver, resolve};
pub use result_ext::{CfgResult, CfgResultExt};
pub use serde_json::{Map, Value};
