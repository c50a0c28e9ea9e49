//! The dynamically-typed JSON value tree.
//!
//! A [`Value`] always holds exactly one of seven variants. Integers and floats
//! are separate variants: the parser decides between them once, by the
//! presence of a decimal point in the source token, and the model never
//! converts between them on its own.

use std::fmt;

use crate::error::{Error, Result};
use crate::map::Map;

/// A JSON value. Trees are acyclic and own their children.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Float(f32),
    /// Raw string contents. Escape pairs read by the parser are stored
    /// verbatim (`\n` stays a backslash followed by `n`).
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order, keys unique.
    Object(Map),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    /// The integer payload. A `Float` is a mismatch, never truncated.
    pub fn as_int(&self) -> Result<i32> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.mismatch("int")),
        }
    }

    /// The float payload. An `Int` is a mismatch, never widened.
    pub fn as_float(&self) -> Result<f32> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(other.mismatch("float")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_object(&self) -> Result<&Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn into_array(self) -> Result<Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn into_object(self) -> Result<Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    /// Look up a key if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up an element if this is an array.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Name of the active variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

/// Renders the compact canonical form; see [`crate::serializer`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::serializer::write_value(self, f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
