//! Default-filling merge over document objects.

use serde_json::{Map, Value};

use crate::document::ValueKind;

/// Depth at which the resolver merges defaults key by key: the top level plus
/// one nested level of objects.
///
/// Default objects nested deeper are copied wholesale when their parent key
/// is absent and are never merged member by member. Raising this value is
/// the extension point for arbitrary-depth merging.
pub(crate) const NESTED_MERGE_DEPTH: usize = 1;

/// Move every entry of `defaults` that `target` lacks into `target`.
///
/// Existing entries in `target` always win. Object-valued defaults are merged
/// member by member while `depth` is non-zero, after an ensure-container step
/// that inserts an empty object for an absent key.
///
/// Returns the number of entries inserted at any level.
pub(crate) fn fill_defaults(
    target: &mut Map<String, Value>,
    defaults: Map<String, Value>,
    depth: usize,
) -> usize {
    let mut filled = 0;
    for (key, default) in defaults {
        match default {
            Value::Object(nested) if depth > 0 => {
                filled += fill_nested(target, &key, nested, depth - 1);
            }
            other => {
                if !target.contains_key(&key) {
                    target.insert(key, other);
                    filled += 1;
                }
            }
        }
    }
    filled
}

fn fill_nested(
    target: &mut Map<String, Value>,
    key: &str,
    defaults: Map<String, Value>,
    depth: usize,
) -> usize {
    let (container, created) = ensure_container(target, key);
    match container {
        Value::Object(existing) => usize::from(created) + fill_defaults(existing, defaults, depth),
        other => {
            tracing::debug!(
                key,
                found = %ValueKind::of(other),
                "user value is not an object; nested defaults skipped"
            );
            0
        }
    }
}

/// Ensure `target[key]` exists, inserting an empty object when it is absent.
///
/// The flag reports whether the container was created.
fn ensure_container<'a>(target: &'a mut Map<String, Value>, key: &str) -> (&'a mut Value, bool) {
    let mut created = false;
    let container = target.entry(key).or_insert_with(|| {
        created = true;
        Value::Object(Map::new())
    });
    (container, created)
}
