//! serde integration.
//!
//! `Value` implements [`serde::Serialize`], so any serde format can render
//! it (the CLI uses `serde_json` for pretty output). Conversions to and from
//! [`serde_json::Value`] are provided for callers that already hold one.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

use crate::error::Error;
use crate::format::format_float;
use crate::map::Map;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i32(*n),
            Value::Float(f) => serializer.serialize_f32(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            out.serialize_entry(k, v)?;
        }
        out.end()
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(n) => serde_json::Value::Number(n.into()),
            Value::Float(f) => float_to_number(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// Widen through the shortest decimal form so `95.7f32` becomes `95.7`
/// rather than `95.69999694824219`.
fn float_to_number(f: f32) -> Option<Number> {
    let widened: f64 = format_float(f).parse().ok()?;
    Number::from_f64(widened)
}

/// Fails with [`Error::InvalidValue`] for numbers outside `i32`, or floats
/// that are not finite as `f32`.
impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n)?,
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(obj) => {
                let mut map = Map::with_capacity(obj.len());
                for (k, v) in obj {
                    map.insert(k, Value::try_from(v)?);
                }
                Value::Object(map)
            }
        })
    }
}

fn number_to_value(n: &Number) -> Result<Value, Error> {
    if n.is_i64() || n.is_u64() {
        return n
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .map(Value::Int)
            .ok_or_else(|| Error::InvalidValue(format!("integer {n} does not fit in 32 bits")));
    }
    match n.as_f64() {
        Some(f) if (f as f32).is_finite() => Ok(Value::Float(f as f32)),
        _ => Err(Error::InvalidValue(format!(
            "number {n} is not a finite 32-bit float"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serde_json_renders_value() {
        let v = crate::parse(r#"{"b":1,"a":[true,null,2.5,"s"]}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"b":1,"a":[true,null,2.5,"s"]}"#
        );
    }

    #[test]
    fn into_serde_json_value() {
        let v = crate::parse(r#"{"score":95.7,"n":3,"s":"x"}"#).unwrap();
        let j: serde_json::Value = v.into();
        assert_eq!(j, json!({"score": 95.7, "n": 3, "s": "x"}));
    }

    #[test]
    fn from_serde_json_value() {
        let j = json!({"a": [1, 2.5, null], "b": {"c": false}});
        let v = Value::try_from(j).unwrap();
        assert_eq!(v.get("a").unwrap().get_index(1), Some(&Value::Float(2.5)));
        assert_eq!(v.get("b").unwrap().get("c"), Some(&Value::Bool(false)));
    }

    #[test]
    fn out_of_range_numbers_are_invalid_values() {
        let err = Value::try_from(json!(4_000_000_000u64)).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
        let err = Value::try_from(json!(1e300)).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }
}
