//! The resolved component handle.

mod emit;

use serde_json::{Map, Value};

use crate::access::{ObjectAccess, ObjectAccessMut};

/// A resolved configuration component.
///
/// The handle exclusively owns its object tree. Nested views obtained through
/// [`ObjectAccess::get_object`] and [`ObjectAccessMut::get_object_mut`] borrow
/// from it, so they cannot outlive the component, and releasing the component
/// (explicitly through [`Component::release`] or by dropping it) frees the
/// whole tree exactly once.
///
/// A component is not internally synchronised. Sharing one between threads
/// requires the caller to wrap it, for example in a `Mutex`.
#[derive(Clone, Debug, PartialEq)]
pub struct Component {
    name: Option<String>,
    members: Map<String, Value>,
}

impl Component {
    pub(crate) const fn new(name: Option<String>, members: Map<String, Value>) -> Self {
        Self { name, members }
    }

    /// Name the component was resolved under, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Borrow the component's members.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.members
    }

    /// Copy the component into a standalone document value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.members.clone())
    }

    /// Consume the component, returning its tree as a document value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.members)
    }

    /// Release the component and everything reachable through it.
    ///
    /// Equivalent to dropping the handle; provided so release points read
    /// explicitly at call sites.
    pub fn release(self) {
        tracing::trace!(
            component = self.name.as_deref().unwrap_or(crate::error::ROOT_SECTION),
            "released component"
        );
    }
}

impl ObjectAccess for Component {
    fn members(&self) -> &Map<String, Value> {
        &self.members
    }
}

impl ObjectAccessMut for Component {
    fn members_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.members
    }
}
