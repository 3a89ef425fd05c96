//! Value predicates: type, shape, and numeric classifiers.
//!
//! Every function here is total over [`Value`] and returns a strict
//! `bool`. Inputs outside a predicate's contract (say, a string handed to
//! a comparison) classify as `false` rather than erroring. Composite
//! predicates call their siblings directly as module-level bindings, so
//! there is no dispatch or initialization-order concern.

pub mod format;
pub mod numeric;

pub use format::{email, is_json, is_url, phone};
pub use numeric::{
    between, greater, is_even, is_float, is_int, is_nan, is_numeric, is_odd, less, negative,
    positive,
};

use crate::value::Value;

/// Check whether the given value is the null sentinel.
#[must_use]
pub const fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// Check whether the given value is the undefined (absent) sentinel.
#[must_use]
pub const fn is_undefined(value: &Value) -> bool {
    value.is_undefined()
}

/// Check whether the given value is a string.
#[must_use]
pub const fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Check whether the given value is a boolean.
#[must_use]
pub const fn is_bool(value: &Value) -> bool {
    value.is_bool()
}

/// Check whether the given value is an array.
#[must_use]
pub const fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Check whether the given value is a composite (key-value or indexed)
/// type: array, plain object, class instance, DOM element, or form data.
/// Null is not an object.
#[must_use]
pub const fn is_object(value: &Value) -> bool {
    matches!(
        value,
        Value::Array(_)
            | Value::Object(_)
            | Value::Instance { .. }
            | Value::Dom { .. }
            | Value::FormData(_)
    )
}

/// Check whether the given value is a plain object: a generic key-value
/// map whose constructor is the base object type, not an array and not a
/// custom class.
#[must_use]
pub const fn is_plain_object(value: &Value) -> bool {
    !is_null(value) && !is_undefined(value) && matches!(value, Value::Object(_))
}

/// Check whether the given value can produce a lazy sequence of elements
/// (arrays, strings, and form-data containers).
#[must_use]
pub const fn is_iterable(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::String(_) | Value::FormData(_))
}

/// Check whether the given value is a DOM element.
#[must_use]
pub const fn is_dom(value: &Value) -> bool {
    value.is_dom()
}

/// Check whether the given value is a multipart form-data container.
#[must_use]
pub const fn is_form_data(value: &Value) -> bool {
    value.is_form_data()
}

/// Check whether the given value is invocable.
#[must_use]
pub const fn is_function(value: &Value) -> bool {
    value.is_function()
}

/// Check whether the given value is a callback function.
#[must_use]
pub const fn is_callback(value: &Value) -> bool {
    is_function(value)
}

/// Check whether the given value is a unique identifier token.
#[must_use]
pub const fn is_symbol(value: &Value) -> bool {
    value.is_symbol()
}

/// Check whether the given value is a regular expression: not undefined,
/// and tagged as a regex.
#[must_use]
pub const fn is_regex(value: &Value) -> bool {
    !is_undefined(value) && value.is_regex()
}

/// Check whether the given value is a non-null date/time instance.
#[must_use]
pub const fn is_date(value: &Value) -> bool {
    !is_null(value) && value.is_date()
}

/// Check whether the given value is empty.
///
/// Undefined and null are empty. Strings are empty at zero length.
/// Composites are judged by their length when they have one (arrays,
/// form data) and by their own-key count otherwise. Anything else is
/// empty unless it is numeric: numeric values, zero included, are never
/// empty.
#[must_use]
pub fn empty(value: &Value) -> bool {
    if is_undefined(value) || is_null(value) {
        return true;
    }
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::FormData(entries) => entries.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Instance { fields, .. } => fields.is_empty(),
        Value::Dom { attributes, .. } => attributes.is_empty(),
        _ => !is_numeric(value),
    }
}
