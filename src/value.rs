//! The dynamic value universe that predicates classify.
//!
//! Every predicate in this crate takes values from a single tagged
//! representation covering primitives, composites, and the host-object
//! shapes (DOM elements, form-data containers) the classifiers care about.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dynamically typed value.
///
/// `Undefined` and `Null` are distinct sentinels: `Undefined` marks an
/// absent value, `Null` a present-but-null one. Composites that are not
/// plain key-value maps (class instances, DOM elements, form data) carry
/// their own tags so shape predicates can tell them apart.
///
/// # Examples
///
/// ```
/// use isit::Value;
///
/// let n = Value::Int(42);
/// let s = Value::from("hello");
///
/// assert!(n.is_int());
/// assert!(s.is_string());
/// assert_eq!(n.type_name(), "int");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Instance {
        class: String,
        fields: BTreeMap<String, Value>,
    },
    Function(String),
    Symbol(String),
    Regex(String),
    Date(DateTime<Utc>),
    Dom {
        tag: String,
        attributes: BTreeMap<String, String>,
    },
    FormData(Vec<(String, Value)>),
}

impl Value {
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub const fn is_instance(&self) -> bool {
        matches!(self, Self::Instance { .. })
    }

    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    pub const fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(_))
    }

    pub const fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    pub const fn is_dom(&self) -> bool {
        matches!(self, Self::Dom { .. })
    }

    pub const fn is_form_data(&self) -> bool {
        matches!(self, Self::FormData(_))
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric reading of the value. `Int` widens to `f64`.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Instance { .. } => "instance",
            Self::Function(_) => "function",
            Self::Symbol(_) => "symbol",
            Self::Regex(_) => "regex",
            Self::Date(_) => "date",
            Self::Dom { .. } => "dom",
            Self::FormData(_) => "form_data",
        }
    }

    /// Textual rendering used by string-contract predicates.
    ///
    /// Strings render as their content, numbers and booleans as their
    /// display form. Shapes with no sensible textual rendering (composites,
    /// sentinels, host objects) return `None` and fail those predicates.
    #[must_use]
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(v) => Some(Cow::Borrowed(v)),
            Self::Bool(v) => Some(Cow::Owned(v.to_string())),
            Self::Int(v) => Some(Cow::Owned(v.to_string())),
            Self::Float(v) => Some(Cow::Owned(v.to_string())),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Undefined
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Array(v) => write!(f, "array[{}]", v.len()),
            Self::Object(v) => write!(f, "object{{{}}}", v.len()),
            Self::Instance { class, .. } => write!(f, "instance:{class}"),
            Self::Function(name) => write!(f, "function:{name}"),
            Self::Symbol(desc) => write!(f, "symbol({desc})"),
            Self::Regex(pattern) => write!(f, "/{pattern}/"),
            Self::Date(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Dom { tag, .. } => write!(f, "<{tag}>"),
            Self::FormData(entries) => write!(f, "form_data[{}]", entries.len()),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
