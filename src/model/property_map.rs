//! PropertyMap: the flat name → value projection of a bean.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::TypedValue;
use crate::{Error, Result};

/// A map of property names to typed values, ordered by name.
pub type PropertyMap = BTreeMap<String, TypedValue>;

/// Convert from TypedValue to concrete types.
pub trait FromTypedValue: Sized {
    fn from_typed_value(val: &TypedValue) -> Result<Self>;
}

fn type_error(expected: &str, val: &TypedValue) -> Error {
    Error::TypeError {
        expected: expected.into(),
        got: val.type_name().into(),
    }
}

impl FromTypedValue for String {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        match val {
            TypedValue::String(s) => Ok(s.clone()),
            TypedValue::Enum { symbolic_name, .. } => Ok(symbolic_name.clone()),
            _ => Err(type_error("string", val)),
        }
    }
}

impl FromTypedValue for i32 {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        match val {
            TypedValue::Int(i) => Ok(*i),
            _ => Err(type_error("int", val)),
        }
    }
}

impl FromTypedValue for i64 {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        val.as_long().ok_or_else(|| type_error("long", val))
    }
}

impl FromTypedValue for f64 {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        val.as_double().ok_or_else(|| type_error("double", val))
    }
}

impl FromTypedValue for bool {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        val.as_bool().ok_or_else(|| type_error("boolean", val))
    }
}

impl FromTypedValue for DateTime<Utc> {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        val.as_date().ok_or_else(|| type_error("date", val))
    }
}

impl FromTypedValue for Vec<String> {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        match val {
            TypedValue::StringArray(l) => Ok(l.clone()),
            _ => Err(type_error("array<string>", val)),
        }
    }
}

impl FromTypedValue for BTreeMap<String, String> {
    fn from_typed_value(val: &TypedValue) -> Result<Self> {
        match val {
            TypedValue::StringMap(m) => Ok(m.clone()),
            _ => Err(type_error("map<string,string>", val)),
        }
    }
}

/// Get a typed value from the map.
pub fn get_as<T: FromTypedValue>(props: &PropertyMap, key: &str) -> Result<T> {
    let val = props.get(key)
        .ok_or_else(|| Error::NotFound(format!("Property '{key}'")))?;
    T::from_typed_value(val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_as() {
        let mut props = PropertyMap::new();
        props.insert("qualifiedName".into(), TypedValue::from("emp:42"));
        props.insert("priority".into(), TypedValue::Int(3));

        assert_eq!(get_as::<String>(&props, "qualifiedName").unwrap(), "emp:42");
        assert_eq!(get_as::<i32>(&props, "priority").unwrap(), 3);
        assert_eq!(get_as::<i64>(&props, "priority").unwrap(), 3);
    }

    #[test]
    fn test_get_as_errors() {
        let mut props = PropertyMap::new();
        props.insert("priority".into(), TypedValue::Int(3));

        assert!(matches!(get_as::<String>(&props, "missing"), Err(Error::NotFound(_))));
        match get_as::<bool>(&props, "priority") {
            Err(Error::TypeError { expected, got }) => {
                assert_eq!(expected, "boolean");
                assert_eq!(got, "int");
            }
            other => panic!("expected type error, got {other:?}"),
        }
    }
}
