//! Component resolution: parse, locate and fill defaults.
//!
//! Resolution parses the user configuration and the defaults document,
//! extracts the named component from both (or uses the whole documents when
//! no name is given) and moves every default the user did not specify into
//! the user's component. Both parsed trees are consumed by the call, so a
//! failed resolution leaves nothing behind and a successful one owns only the
//! merged component.

mod builder;
mod merge;

pub use builder::Resolver;

use serde_json::{Map, Value};

use crate::document::{ConfigSource, ValueKind, parse_text};
use crate::error::ROOT_SECTION;
use crate::{CfgError, CfgResult, Component, DocumentOrigin};

use merge::{NESTED_MERGE_DEPTH, fill_defaults};

/// Resolve `component_name` from `source`, filling gaps from `defaults_text`.
///
/// When `component_name` is `None` the whole source document and the whole
/// defaults document are merged directly.
///
/// # Examples
///
/// ```
/// use mochi_cfg::{ConfigSource, ObjectAccess, resolve};
///
/// # fn main() -> mochi_cfg::CfgResult<()> {
/// let component = resolve(
///     ConfigSource::text(r#"{"abt-io": {"a": 1}}"#),
///     Some("abt-io"),
///     r#"{"abt-io": {"a": 2, "b": 3}}"#,
/// )?;
/// assert_eq!(component.get_int("a")?, 1);
/// assert_eq!(component.get_int("b")?, 3);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`CfgError::Parse`] when either document is malformed, and
///   [`CfgError::File`] when a file source cannot be read.
/// - [`CfgError::MissingDefaultsSection`] when the defaults lack the
///   component; this is checked before the user document.
/// - [`CfgError::MissingUserSection`] when the user document lacks it.
/// - [`CfgError::NotAnObject`] when either located section is not an object.
pub fn resolve(
    source: ConfigSource<'_>,
    component_name: Option<&str>,
    defaults_text: &str,
) -> CfgResult<Component> {
    let config = source.load()?;
    let defaults = parse_text(defaults_text, DocumentOrigin::Defaults)?;
    let (mut component, component_defaults) =
        locate(config, defaults, component_name, source.origin())?;
    let filled = fill_defaults(&mut component, component_defaults, NESTED_MERGE_DEPTH);
    tracing::debug!(
        component = component_name.unwrap_or(ROOT_SECTION),
        filled,
        "resolved component"
    );
    Ok(Component::new(component_name.map(str::to_owned), component))
}

type Sections = (Map<String, Value>, Map<String, Value>);

fn locate(
    config: Value,
    defaults: Value,
    component_name: Option<&str>,
    origin: DocumentOrigin,
) -> CfgResult<Sections> {
    let (user, user_defaults) = match component_name {
        Some(name) => {
            let section_defaults = take_member(defaults, name)
                .ok_or_else(|| CfgError::missing_defaults_section(name))?;
            let section =
                take_member(config, name).ok_or_else(|| CfgError::missing_user_section(name))?;
            (section, section_defaults)
        }
        None => (config, defaults),
    };
    let user = into_object(user, origin, component_name)?;
    let user_defaults = into_object(user_defaults, DocumentOrigin::Defaults, component_name)?;
    Ok((user, user_defaults))
}

fn take_member(document: Value, key: &str) -> Option<Value> {
    match document {
        Value::Object(mut members) => members.remove(key),
        _ => None,
    }
}

fn into_object(
    value: Value,
    origin: DocumentOrigin,
    component_name: Option<&str>,
) -> CfgResult<Map<String, Value>> {
    match value {
        Value::Object(members) => Ok(members),
        other => Err(CfgError::not_an_object(
            origin,
            component_name,
            ValueKind::of(&other),
        )),
    }
}
