//! Primitive value encoder.
//!
//! Every function threads an optional [`PropertyMap`] through one insertion:
//! an absent value (or an empty collection) returns the map untouched, a
//! present value allocates the map if needed and writes `name → value`,
//! replacing any earlier value under the same name.
//!
//! ```
//! use openmeta_projection::projection::helper::{add_string, add_int};
//!
//! let props = add_string(None, "qualifiedName", Some("emp:42"));
//! let props = add_int(props, "priority", None);
//! assert_eq!(props.map(|p| p.len()), Some(1));
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::{OpenMetadataEnum, PropertyMap, TypedValue};

fn insert(props: Option<PropertyMap>, name: &str, value: TypedValue) -> Option<PropertyMap> {
    let mut props = props.unwrap_or_default();
    props.insert(name.to_owned(), value);
    Some(props)
}

/// Writes a non-empty collection, leaves the map alone otherwise.
fn insert_collection<C>(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&C>,
    is_empty: impl Fn(&C) -> bool,
    wrap: impl FnOnce(&C) -> TypedValue,
) -> Option<PropertyMap> {
    match value {
        Some(v) if !is_empty(v) => insert(props, name, wrap(v)),
        _ => props,
    }
}

// ============================================================================
// Primitives
// ============================================================================

pub fn add_string(props: Option<PropertyMap>, name: &str, value: Option<&str>) -> Option<PropertyMap> {
    match value {
        Some(v) => insert(props, name, TypedValue::String(v.to_owned())),
        None => props,
    }
}

pub fn add_int(props: Option<PropertyMap>, name: &str, value: Option<i32>) -> Option<PropertyMap> {
    match value {
        Some(v) => insert(props, name, TypedValue::Int(v)),
        None => props,
    }
}

pub fn add_long(props: Option<PropertyMap>, name: &str, value: Option<i64>) -> Option<PropertyMap> {
    match value {
        Some(v) => insert(props, name, TypedValue::Long(v)),
        None => props,
    }
}

pub fn add_float(props: Option<PropertyMap>, name: &str, value: Option<f32>) -> Option<PropertyMap> {
    match value {
        Some(v) => insert(props, name, TypedValue::Float(v)),
        None => props,
    }
}

pub fn add_double(props: Option<PropertyMap>, name: &str, value: Option<f64>) -> Option<PropertyMap> {
    match value {
        Some(v) => insert(props, name, TypedValue::Double(v)),
        None => props,
    }
}

pub fn add_boolean(props: Option<PropertyMap>, name: &str, value: Option<bool>) -> Option<PropertyMap> {
    match value {
        Some(v) => insert(props, name, TypedValue::Boolean(v)),
        None => props,
    }
}

pub fn add_date(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<DateTime<Utc>>,
) -> Option<PropertyMap> {
    match value {
        Some(v) => insert(props, name, TypedValue::Date(v)),
        None => props,
    }
}

/// Add an enum literal given its type name and symbolic name.
pub fn add_enum(
    props: Option<PropertyMap>,
    name: &str,
    enum_type_name: &str,
    symbolic_name: Option<&str>,
) -> Option<PropertyMap> {
    match symbolic_name {
        Some(s) => insert(props, name, TypedValue::Enum {
            type_name: enum_type_name.to_owned(),
            symbolic_name: s.to_owned(),
        }),
        None => props,
    }
}

/// Add an enum literal from a typed open metadata enum.
pub fn add_enum_value<E: OpenMetadataEnum>(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<E>,
) -> Option<PropertyMap> {
    add_enum(props, name, E::TYPE_NAME, value.map(|v| v.symbolic_name()))
}

// ============================================================================
// Collections
// ============================================================================

pub fn add_string_array(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&[String]>,
) -> Option<PropertyMap> {
    match value {
        Some(v) if !v.is_empty() => insert(props, name, TypedValue::StringArray(v.to_vec())),
        _ => props,
    }
}

pub fn add_string_map(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&BTreeMap<String, String>>,
) -> Option<PropertyMap> {
    insert_collection(props, name, value, BTreeMap::is_empty, |m| TypedValue::StringMap(m.clone()))
}

pub fn add_int_map(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&BTreeMap<String, i32>>,
) -> Option<PropertyMap> {
    insert_collection(props, name, value, BTreeMap::is_empty, |m| TypedValue::IntMap(m.clone()))
}

pub fn add_boolean_map(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&BTreeMap<String, bool>>,
) -> Option<PropertyMap> {
    insert_collection(props, name, value, BTreeMap::is_empty, |m| TypedValue::BooleanMap(m.clone()))
}

pub fn add_date_map(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&BTreeMap<String, DateTime<Utc>>>,
) -> Option<PropertyMap> {
    insert_collection(props, name, value, BTreeMap::is_empty, |m| TypedValue::DateMap(m.clone()))
}

pub fn add_long_map(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&BTreeMap<String, i64>>,
) -> Option<PropertyMap> {
    insert_collection(props, name, value, BTreeMap::is_empty, |m| TypedValue::LongMap(m.clone()))
}

pub fn add_double_map(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&BTreeMap<String, f64>>,
) -> Option<PropertyMap> {
    insert_collection(props, name, value, BTreeMap::is_empty, |m| TypedValue::DoubleMap(m.clone()))
}

/// Add a map whose values are string arrays.
pub fn add_string_array_map(
    props: Option<PropertyMap>,
    name: &str,
    value: Option<&BTreeMap<String, Vec<String>>>,
) -> Option<PropertyMap> {
    insert_collection(props, name, value, BTreeMap::is_empty, |m| TypedValue::StringArrayMap(m.clone()))
}

/// Add every entry of `values` as its own string property.
pub fn merge_string_map(
    props: Option<PropertyMap>,
    values: Option<&BTreeMap<String, String>>,
) -> Option<PropertyMap> {
    values
        .into_iter()
        .flatten()
        .fold(props, |props, (k, v)| add_string(props, k, Some(v.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn test_absent_value_keeps_none() {
        assert_eq!(add_string(None, "a", None), None);
        assert_eq!(add_int(None, "a", None), None);
        assert_eq!(add_date(None, "a", None), None);
        assert_eq!(add_enum(None, "a", "CommentType", None), None);
        assert_eq!(add_string_array(None, "a", Some(&[])), None);
        assert_eq!(add_string_map(None, "a", Some(&BTreeMap::new())), None);
        assert_eq!(add_long_map(None, "a", Some(&BTreeMap::new())), None);
        assert_eq!(merge_string_map(None, Some(&BTreeMap::new())), None);
    }

    #[test]
    fn test_absent_value_keeps_existing_map() {
        let props = add_string(None, "a", Some("x"));
        let props = add_double(props, "b", None);
        let props = add_double_map(props, "c", Some(&BTreeMap::new()));
        let props = props.unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["a"], TypedValue::from("x"));
    }

    #[test]
    fn test_empty_string_is_present() {
        let props = add_string(None, "a", Some("")).unwrap();
        assert_eq!(props["a"], TypedValue::String(String::new()));
    }

    #[test]
    fn test_last_write_wins() {
        let props = add_string(None, "a", Some("first"));
        let props = add_int(props, "a", Some(2)).unwrap();
        assert_eq!(props["a"], TypedValue::Int(2));
    }

    #[test]
    fn test_each_kind_is_tagged() {
        let when = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut dates = BTreeMap::new();
        dates.insert("d".to_string(), when);
        let mut groups = BTreeMap::new();
        groups.insert("readers".to_string(), vec!["a".to_string(), "b".to_string()]);
        let mut ints = BTreeMap::new();
        ints.insert("i".to_string(), 1);
        let mut flags = BTreeMap::new();
        flags.insert("f".to_string(), false);

        let props = add_long(None, "long", Some(9));
        let props = add_float(props, "float", Some(0.5));
        let props = add_boolean(props, "bool", Some(false));
        let props = add_date(props, "date", Some(when));
        let props = add_enum_value(props, "enum", Some(crate::model::CommentType::Answer));
        let props = add_date_map(props, "dates", Some(&dates));
        let props = add_string_array_map(props, "groups", Some(&groups));
        let props = add_int_map(props, "ints", Some(&ints));
        let props = add_boolean_map(props, "flags", Some(&flags));
        let props = props.unwrap();

        assert_eq!(props["long"], TypedValue::Long(9));
        assert_eq!(props["float"], TypedValue::Float(0.5));
        assert_eq!(props["bool"], TypedValue::Boolean(false));
        assert_eq!(props["date"], TypedValue::Date(when));
        assert_eq!(props["enum"], TypedValue::Enum {
            type_name: "CommentType".into(),
            symbolic_name: "Answer".into(),
        });
        assert_eq!(props["dates"], TypedValue::DateMap(dates));
        assert_eq!(props["groups"], TypedValue::StringArrayMap(groups));
        assert_eq!(props["ints"], TypedValue::IntMap(ints));
        assert_eq!(props["flags"], TypedValue::BooleanMap(flags));
    }

    #[test]
    fn test_merge_string_map_overwrites() {
        let props = add_int(None, "custom", Some(1));
        let mut extra = BTreeMap::new();
        extra.insert("custom".to_string(), "v".to_string());
        extra.insert("other".to_string(), "w".to_string());
        let props = merge_string_map(props, Some(&extra)).unwrap();
        assert_eq!(props["custom"], TypedValue::from("v"));
        assert_eq!(props["other"], TypedValue::from("w"));
    }

    proptest! {
        #[test]
        fn prop_string_map_presence(entries in proptest::collection::btree_map("[a-z]{1,6}", "[a-z]{0,6}", 0..5)) {
            let props = add_string_map(None, "m", Some(&entries));
            prop_assert_eq!(props.is_some(), !entries.is_empty());
        }

        #[test]
        fn prop_absent_never_changes_map(key in "[a-z]{1,8}", value in any::<i64>()) {
            let before = add_long(None, &key, Some(value));
            let after = add_long(before.clone(), "other", None);
            prop_assert_eq!(before, after);
        }
    }
}
