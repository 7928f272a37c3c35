//! Typed accessors over component objects.
//!
//! [`ObjectAccess`] provides the read side and [`ObjectAccessMut`] the write
//! side. Both are implemented by [`crate::Component`] and by the nested views
//! [`ObjectRef`] and [`ObjectMut`], so the same accessors work at every level
//! of a component.
//!
//! Accessors never coerce between value kinds: reading an integer from a
//! string slot fails with [`CfgError::WrongKind`], and setters only replace
//! existing slots of the matching kind. A failed accessor leaves its target
//! untouched.

mod view;

pub use view::{ObjectMut, ObjectRef};

use serde_json::map::Keys;
use serde_json::{Map, Value};

use crate::document::{ValueKind, parse_text};
use crate::{CfgError, CfgResult, DocumentOrigin};

/// Read access to an object inside a component.
pub trait ObjectAccess {
    /// Members of the underlying object.
    fn members(&self) -> &Map<String, Value>;

    /// Returns `true` when `key` is present.
    fn contains_key(&self, key: &str) -> bool {
        self.members().contains_key(key)
    }

    /// Keys of the object in storage order.
    fn keys(&self) -> Keys<'_> {
        self.members().keys()
    }

    /// Raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent.
    fn get_value(&self, key: &str) -> CfgResult<&Value> {
        self.members()
            .get(key)
            .ok_or_else(|| CfgError::key_not_found(key))
    }

    /// Integer stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the value is not an `i64`.
    fn get_int(&self, key: &str) -> CfgResult<i64> {
        let value = self.get_value(key)?;
        value
            .as_i64()
            .ok_or_else(|| CfgError::wrong_kind(key, ValueKind::Integer, ValueKind::of(value)))
    }

    /// String stored under `key`, borrowed from the object.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the value is not a string.
    fn get_string(&self, key: &str) -> CfgResult<&str> {
        let value = self.get_value(key)?;
        value
            .as_str()
            .ok_or_else(|| CfgError::wrong_kind(key, ValueKind::String, ValueKind::of(value)))
    }

    /// Boolean stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the value is not a boolean.
    fn get_bool(&self, key: &str) -> CfgResult<bool> {
        let value = self.get_value(key)?;
        value
            .as_bool()
            .ok_or_else(|| CfgError::wrong_kind(key, ValueKind::Bool, ValueKind::of(value)))
    }

    /// Elements of the array stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the value is not an array.
    fn get_array(&self, key: &str) -> CfgResult<&[Value]> {
        let value = self.get_value(key)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| CfgError::wrong_kind(key, ValueKind::Array, ValueKind::of(value)))
    }

    /// Borrowed view of the object stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the value is not an object.
    fn get_object(&self, key: &str) -> CfgResult<ObjectRef<'_>> {
        let value = self.get_value(key)?;
        value
            .as_object()
            .map(ObjectRef::new)
            .ok_or_else(|| CfgError::wrong_kind(key, ValueKind::Object, ValueKind::of(value)))
    }
}

/// Write access to an object inside a component.
pub trait ObjectAccessMut: ObjectAccess {
    /// Mutable members of the underlying object.
    fn members_mut(&mut self) -> &mut Map<String, Value>;

    /// Mutable value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent.
    fn get_value_mut(&mut self, key: &str) -> CfgResult<&mut Value> {
        self.members_mut()
            .get_mut(key)
            .ok_or_else(|| CfgError::key_not_found(key))
    }

    /// Overwrite the existing integer under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the slot holds something other than an
    /// integer.
    fn set_int(&mut self, key: &str, value: i64) -> CfgResult<()> {
        replace_scalar(self.get_value_mut(key)?, key, ValueKind::Integer, Value::from(value))
    }

    /// Overwrite the existing string under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the slot holds something other than a
    /// string.
    fn set_string(&mut self, key: &str, value: &str) -> CfgResult<()> {
        replace_scalar(self.get_value_mut(key)?, key, ValueKind::String, Value::from(value))
    }

    /// Overwrite the existing boolean under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the slot holds something other than a
    /// boolean.
    fn set_bool(&mut self, key: &str, value: bool) -> CfgResult<()> {
        replace_scalar(self.get_value_mut(key)?, key, ValueKind::Bool, Value::from(value))
    }

    /// Mutable view of the object stored under `key`.
    ///
    /// Changes made through the view are changes to this object.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the value is not an object.
    fn get_object_mut(&mut self, key: &str) -> CfgResult<ObjectMut<'_>> {
        match self.get_value_mut(key)? {
            Value::Object(members) => Ok(ObjectMut::new(members)),
            other => Err(CfgError::wrong_kind(
                key,
                ValueKind::Object,
                ValueKind::of(other),
            )),
        }
    }

    /// Parse `item_text` and append it to the array stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::Parse`] when `item_text` is malformed,
    /// [`CfgError::KeyNotFound`] when `key` is absent and
    /// [`CfgError::WrongKind`] when the value is not an array.
    fn append_array_by_text(&mut self, key: &str, item_text: &str) -> CfgResult<()> {
        let item = parse_text(item_text, DocumentOrigin::Fragment)?;
        match self.get_value_mut(key)? {
            Value::Array(items) => {
                items.push(item);
                Ok(())
            }
            other => Err(CfgError::wrong_kind(
                key,
                ValueKind::Array,
                ValueKind::of(other),
            )),
        }
    }

    /// Replace the value under `key` with the member `key` of the object
    /// parsed from `wrapped_text`.
    ///
    /// The replacement is wholesale; nothing of the previous value is kept.
    /// An absent `key` in this object is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use mochi_cfg::{ConfigSource, ObjectAccess, ObjectAccessMut, resolve};
    ///
    /// # fn main() -> mochi_cfg::CfgResult<()> {
    /// let mut component = resolve(
    ///     ConfigSource::text(r#"{"pool": {"kind": "fifo", "size": 2}}"#),
    ///     None,
    ///     "{}",
    /// )?;
    /// component.set_object_by_text("pool", r#"{"pool": {"kind": "prio"}}"#)?;
    /// let pool = component.get_object("pool")?;
    /// assert_eq!(pool.get_string("kind")?, "prio");
    /// assert!(!pool.contains_key("size"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CfgError::Parse`] when `wrapped_text` is malformed,
    /// [`CfgError::NotAnObject`] when it is not an object and
    /// [`CfgError::KeyNotFound`] when it lacks `key`.
    fn set_object_by_text(&mut self, key: &str, wrapped_text: &str) -> CfgResult<()> {
        let mut wrapper = match parse_text(wrapped_text, DocumentOrigin::Fragment)? {
            Value::Object(members) => members,
            other => {
                return Err(CfgError::not_an_object(
                    DocumentOrigin::Fragment,
                    None,
                    ValueKind::of(&other),
                ));
            }
        };
        let replacement = wrapper
            .remove(key)
            .ok_or_else(|| CfgError::key_not_found(key))?;
        self.members_mut().insert(key.to_owned(), replacement);
        Ok(())
    }
}

fn replace_scalar(
    slot: &mut Value,
    key: &str,
    expected: ValueKind,
    replacement: Value,
) -> CfgResult<()> {
    let found = ValueKind::of(slot);
    if found != expected {
        return Err(CfgError::wrong_kind(key, expected, found));
    }
    *slot = replacement;
    Ok(())
}

#[cfg(test)]
mod tests;
