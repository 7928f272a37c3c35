//! Borrowed views of nested objects.

use serde_json::{Map, Value};

use super::{ObjectAccess, ObjectAccessMut};

/// Shared view of an object nested inside a component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectRef<'a> {
    members: &'a Map<String, Value>,
}

impl<'a> ObjectRef<'a> {
    pub(crate) const fn new(members: &'a Map<String, Value>) -> Self {
        Self { members }
    }

    /// Members of the viewed object, borrowed for the view's full lifetime.
    #[must_use]
    pub const fn as_map(&self) -> &'a Map<String, Value> {
        self.members
    }
}

impl ObjectAccess for ObjectRef<'_> {
    fn members(&self) -> &Map<String, Value> {
        self.members
    }
}

/// Mutable view of an object nested inside a component.
///
/// Writes through the view land directly in the component's tree.
#[derive(Debug)]
pub struct ObjectMut<'a> {
    members: &'a mut Map<String, Value>,
}

impl<'a> ObjectMut<'a> {
    pub(crate) const fn new(members: &'a mut Map<String, Value>) -> Self {
        Self { members }
    }

    /// Consume the view, returning the viewed members.
    #[must_use]
    pub fn into_map(self) -> &'a mut Map<String, Value> {
        self.members
    }
}

impl ObjectAccess for ObjectMut<'_> {
    fn members(&self) -> &Map<String, Value> {
        &*self.members
    }
}

impl ObjectAccessMut for ObjectMut<'_> {
    fn members_mut(&mut self) -> &mut Map<String, Value> {
        &mut *self.members
    }
}
