//! Variant tags for document values.

use std::fmt;

use serde_json::Value;

/// Kind of a document value, as reported in accessor errors.
///
/// Numbers are split into [`ValueKind::Integer`] (representable as `i64`)
/// and [`ValueKind::Number`] (floats and integers outside the `i64` range)
/// because the integer accessors only accept the former.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// A number representable as `i64`.
    Integer,
    /// Any other number.
    Number,
    /// A string.
    String,
    /// An ordered sequence.
    Array,
    /// A string-keyed mapping.
    Object,
}

impl ValueKind {
    /// Classify `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mochi_cfg::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!(7)), ValueKind::Integer);
    /// assert_eq!(ValueKind::of(&json!(0.5)), ValueKind::Number);
    /// assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Object);
    /// ```
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(number) if number.is_i64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lower-case name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
