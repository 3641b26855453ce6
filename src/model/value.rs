//! Typed value carried in a property map.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tagged value stored under a property name.
///
/// Covers the primitive and collection kinds a metadata store accepts:
/// - Primitives: String, Int, Long, Float, Double, Boolean, Date
/// - Enum literal: symbolic name qualified by its enum type name
/// - Collections: string array and string-keyed maps of each primitive kind,
///   plus a map of string arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypedValue {
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    #[serde(rename_all = "camelCase")]
    Enum { type_name: String, symbolic_name: String },

    // Collections
    StringArray(Vec<String>),
    StringMap(BTreeMap<String, String>),
    IntMap(BTreeMap<String, i32>),
    BooleanMap(BTreeMap<String, bool>),
    DateMap(BTreeMap<String, DateTime<Utc>>),
    LongMap(BTreeMap<String, i64>),
    DoubleMap(BTreeMap<String, f64>),
    StringArrayMap(BTreeMap<String, Vec<String>>),
}

// ============================================================================
// Type checking
// ============================================================================

impl TypedValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::String(_) => "string",
            TypedValue::Int(_) => "int",
            TypedValue::Long(_) => "long",
            TypedValue::Float(_) => "float",
            TypedValue::Double(_) => "double",
            TypedValue::Boolean(_) => "boolean",
            TypedValue::Date(_) => "date",
            TypedValue::Enum { .. } => "enum",
            TypedValue::StringArray(_) => "array<string>",
            TypedValue::StringMap(_) => "map<string,string>",
            TypedValue::IntMap(_) => "map<string,int>",
            TypedValue::BooleanMap(_) => "map<string,boolean>",
            TypedValue::DateMap(_) => "map<string,date>",
            TypedValue::LongMap(_) => "map<string,long>",
            TypedValue::DoubleMap(_) => "map<string,double>",
            TypedValue::StringArrayMap(_) => "map<string,array<string>>",
        }
    }

    pub fn is_collection(&self) -> bool {
        !matches!(
            self,
            TypedValue::String(_)
                | TypedValue::Int(_)
                | TypedValue::Long(_)
                | TypedValue::Float(_)
                | TypedValue::Double(_)
                | TypedValue::Boolean(_)
                | TypedValue::Date(_)
                | TypedValue::Enum { .. }
        )
    }

    /// False when a float or double (or any map entry) is NaN or infinite.
    /// JSON has no encoding for those.
    pub fn is_finite(&self) -> bool {
        match self {
            TypedValue::Float(f) => f.is_finite(),
            TypedValue::Double(d) => d.is_finite(),
            TypedValue::DoubleMap(m) => m.values().all(|d| d.is_finite()),
            _ => true,
        }
    }

    /// Attempt to extract as &str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempt to extract as i64. Int widens, nothing else converts.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            TypedValue::Long(l) => Some(*l),
            TypedValue::Int(i) => Some(i64::from(*i)),
            _ => None,
        }
    }

    /// Attempt to extract as f64. Float widens.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            TypedValue::Double(d) => Some(*d),
            TypedValue::Float(f) => Some(f64::from(*f)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            TypedValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Symbolic name of an enum literal.
    pub fn as_enum_symbol(&self) -> Option<&str> {
        match self {
            TypedValue::Enum { symbolic_name, .. } => Some(symbolic_name),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for TypedValue { fn from(v: bool) -> Self { TypedValue::Boolean(v) } }
impl From<i32> for TypedValue { fn from(v: i32) -> Self { TypedValue::Int(v) } }
impl From<i64> for TypedValue { fn from(v: i64) -> Self { TypedValue::Long(v) } }
impl From<f32> for TypedValue { fn from(v: f32) -> Self { TypedValue::Float(v) } }
impl From<f64> for TypedValue { fn from(v: f64) -> Self { TypedValue::Double(v) } }
impl From<String> for TypedValue { fn from(v: String) -> Self { TypedValue::String(v) } }
impl From<&str> for TypedValue { fn from(v: &str) -> Self { TypedValue::String(v.to_owned()) } }
impl From<DateTime<Utc>> for TypedValue { fn from(v: DateTime<Utc>) -> Self { TypedValue::Date(v) } }
impl From<Vec<String>> for TypedValue { fn from(v: Vec<String>) -> Self { TypedValue::StringArray(v) } }
impl From<BTreeMap<String, String>> for TypedValue {
    fn from(v: BTreeMap<String, String>) -> Self { TypedValue::StringMap(v) }
}

// ============================================================================
// Display
// ============================================================================

fn write_map<V>(
    f: &mut fmt::Formatter<'_>,
    m: &BTreeMap<String, V>,
    mut item: impl FnMut(&mut fmt::Formatter<'_>, &V) -> fmt::Result,
) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (k, v)) in m.iter().enumerate() {
        if i > 0 { write!(f, ", ")?; }
        write!(f, "{k}: ")?;
        item(f, v)?;
    }
    write!(f, "}}")
}

fn write_list(f: &mut fmt::Formatter<'_>, l: &[String]) -> fmt::Result {
    write!(f, "[")?;
    for (i, s) in l.iter().enumerate() {
        if i > 0 { write!(f, ", ")?; }
        write!(f, "\"{}\"", s.replace('"', "\\\""))?;
    }
    write!(f, "]")
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            TypedValue::Int(i) => write!(f, "{i}"),
            TypedValue::Long(l) => write!(f, "{l}"),
            TypedValue::Float(v) => write!(f, "{v}"),
            TypedValue::Double(v) => write!(f, "{v}"),
            TypedValue::Boolean(b) => write!(f, "{b}"),
            TypedValue::Date(d) => write!(f, "{}", d.to_rfc3339()),
            TypedValue::Enum { type_name, symbolic_name } => write!(f, "{type_name}::{symbolic_name}"),
            TypedValue::StringArray(l) => write_list(f, l),
            TypedValue::StringMap(m) => write_map(f, m, |f, v| write!(f, "\"{}\"", v.replace('"', "\\\""))),
            TypedValue::IntMap(m) => write_map(f, m, |f, v| write!(f, "{v}")),
            TypedValue::BooleanMap(m) => write_map(f, m, |f, v| write!(f, "{v}")),
            TypedValue::DateMap(m) => write_map(f, m, |f, v| write!(f, "{}", v.to_rfc3339())),
            TypedValue::LongMap(m) => write_map(f, m, |f, v| write!(f, "{v}")),
            TypedValue::DoubleMap(m) => write_map(f, m, |f, v| write!(f, "{v}")),
            TypedValue::StringArrayMap(m) => write_map(f, m, |f, v| write_list(f, v)),
        }
    }
}
