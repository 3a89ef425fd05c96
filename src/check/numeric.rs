//! Numeric classifiers and comparisons.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::Value;

/// Optional leading `-` followed by decimal digits, whole string anchored.
static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("numeric pattern compiles"));

/// Check whether the given value is an integral number: an `Int`, or a
/// finite `Float` with no fractional part.
#[must_use]
pub fn is_int(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(f) => f.is_finite() && f.fract() == 0.0,
        _ => false,
    }
}

/// Check whether the given value is a float with a nonzero fractional
/// part. Non-finite floats (NaN, infinities) have no fractional part and
/// classify as `false`.
#[must_use]
pub fn is_float(value: &Value) -> bool {
    matches!(value, Value::Float(f) if f.is_finite() && f.fract() != 0.0)
}

/// Check whether the given value is the not-a-number sentinel.
#[must_use]
pub fn is_nan(value: &Value) -> bool {
    matches!(value, Value::Float(f) if f.is_nan())
}

/// Check whether the given value reads as a decimal integer, whatever its
/// type: the textual rendering must match optional `-` then digits.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    value.text().is_some_and(|t| NUMERIC_PATTERN.is_match(&t))
}

/// Integral reading of a numeric value. Digit strings outside the `i64`
/// range do not reduce.
fn integral(value: &Value) -> Option<i64> {
    if !is_numeric(value) {
        return None;
    }
    match value {
        Value::Int(n) => Some(*n),
        // The textual match guarantees no fractional part; the cast must
        // not saturate, so floats past the i64 range do not reduce.
        #[allow(clippy::cast_precision_loss)]
        Value::Float(f) => {
            if *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                Some(*f as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Check whether the given value is an even number, whatever its type.
/// Values the integral reduction rejects are neither even nor odd.
#[must_use]
pub fn is_even(value: &Value) -> bool {
    integral(value).is_some_and(|n| n % 2 == 0)
}

/// Check whether the given value is an odd number, whatever its type.
#[must_use]
pub fn is_odd(value: &Value) -> bool {
    integral(value).is_some_and(|n| n % 2 != 0)
}

/// Check whether the left-hand side is greater than the right-hand side.
/// Non-numeric operands compare as `false`.
#[must_use]
pub fn greater(lhs: &Value, rhs: &Value) -> bool {
    match (lhs.as_float(), rhs.as_float()) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

/// Check whether the left-hand side is less than the right-hand side.
/// Non-numeric operands compare as `false`.
#[must_use]
pub fn less(lhs: &Value, rhs: &Value) -> bool {
    match (lhs.as_float(), rhs.as_float()) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    }
}

/// Check whether the value lies strictly between `x` and `y`, whichever
/// order the bounds arrive in.
#[must_use]
pub fn between(value: &Value, x: &Value, y: &Value) -> bool {
    let (Some(a), Some(b)) = (x.as_float(), y.as_float()) else {
        return false;
    };
    if a < b {
        greater(value, x) && less(value, y)
    } else {
        less(value, x) && greater(value, y)
    }
}

/// Check whether the given value is a positive number.
#[must_use]
pub fn positive(value: &Value) -> bool {
    greater(value, &Value::Int(0))
}

/// Check whether the given value is a negative number.
#[must_use]
pub fn negative(value: &Value) -> bool {
    less(value, &Value::Int(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_and_float_partition() {
        for n in [-3i64, 0, 7, 1000] {
            assert!(is_int(&Value::Int(n)), "{n} is int");
            assert!(!is_float(&Value::Int(n)), "{n} is not float");
        }
        // Floats with no fractional part still count as integral.
        assert!(is_int(&Value::Float(4.0)));
        assert!(!is_float(&Value::Float(4.0)));

        for x in [0.5f64, -2.25, 3.125] {
            assert!(is_float(&Value::Float(x)), "{x} is float");
            assert!(!is_int(&Value::Float(x)), "{x} is not int");
        }
    }

    #[test]
    fn test_non_numbers_are_neither() {
        assert!(!is_int(&Value::from("3")));
        assert!(!is_float(&Value::from("3.5")));
        assert!(!is_int(&Value::Null));
    }

    #[test]
    fn test_nan() {
        assert!(is_nan(&Value::Float(f64::NAN)));
        assert!(!is_nan(&Value::Float(1.0)));
        assert!(!is_nan(&Value::Int(1)));
        assert!(!is_float(&Value::Float(f64::NAN)));
    }

    #[test]
    fn test_numeric_strings() {
        assert!(is_numeric(&Value::from("123")));
        assert!(is_numeric(&Value::from("-123")));
        assert!(!is_numeric(&Value::from("12.3")));
        assert!(!is_numeric(&Value::from("abc")));
        assert!(!is_numeric(&Value::from("")));
        assert!(!is_numeric(&Value::from("1e3")));
    }

    #[test]
    fn test_numeric_coerces_numbers() {
        assert!(is_numeric(&Value::Int(42)));
        assert!(is_numeric(&Value::Int(-42)));
        assert!(is_numeric(&Value::Float(7.0))); // renders as "7"
        assert!(!is_numeric(&Value::Float(7.5)));
        assert!(!is_numeric(&Value::Bool(true)));
        assert!(!is_numeric(&Value::Array(vec![])));
    }

    #[test]
    fn test_even_odd() {
        assert!(is_even(&Value::Int(4)));
        assert!(!is_even(&Value::Int(5)));
        assert!(is_odd(&Value::Int(5)));
        assert!(!is_odd(&Value::Int(4)));
        assert!(is_even(&Value::from("10")));
        assert!(is_odd(&Value::from("-7")));
        assert!(is_even(&Value::Int(0)));
        assert!(!is_odd(&Value::Int(0)));
    }

    #[test]
    fn test_even_odd_never_both() {
        for v in [
            Value::Int(-9),
            Value::Int(0),
            Value::Int(13),
            Value::from("42"),
            Value::from("-101"),
            Value::Float(6.0),
        ] {
            assert!(
                !(is_even(&v) && is_odd(&v)),
                "{v} classified both even and odd"
            );
            assert!(is_even(&v) || is_odd(&v), "{v} is numeric, one must hold");
        }
    }

    #[test]
    fn test_even_odd_reject_non_numeric() {
        assert!(!is_even(&Value::from("12.5")));
        assert!(!is_odd(&Value::from("abc")));
        assert!(!is_even(&Value::Null));
        // Past the i64 range the reduction gives up.
        assert!(!is_even(&Value::from("999999999999999999999999")));
        assert!(!is_odd(&Value::from("999999999999999999999999")));
        // Floats past that range must not saturate into a parity.
        assert!(!is_odd(&Value::Float(2e30)));
        assert!(!is_even(&Value::Float(2e30)));
        assert!(!is_odd(&Value::Float(-2e30)));
        assert!(!is_even(&Value::Float(-2e30)));
    }

    #[test]
    fn test_greater_less() {
        assert!(greater(&Value::Int(5), &Value::Int(3)));
        assert!(!greater(&Value::Int(3), &Value::Int(5)));
        assert!(!greater(&Value::Int(3), &Value::Int(3)));
        assert!(less(&Value::Int(3), &Value::Int(5)));
        assert!(!less(&Value::Int(5), &Value::Int(3)));
        assert!(greater(&Value::Float(2.5), &Value::Int(2)));
        assert!(!greater(&Value::from("5"), &Value::Int(3)));
    }

    #[test]
    fn test_between_is_symmetric_and_strict() {
        assert!(between(&Value::Int(5), &Value::Int(1), &Value::Int(10)));
        assert!(between(&Value::Int(5), &Value::Int(10), &Value::Int(1)));
        assert!(!between(&Value::Int(10), &Value::Int(1), &Value::Int(10)));
        assert!(!between(&Value::Int(1), &Value::Int(1), &Value::Int(10)));
        assert!(!between(&Value::Int(0), &Value::Int(1), &Value::Int(10)));
        assert!(!between(&Value::from("5"), &Value::Int(1), &Value::Int(10)));
    }

    #[test]
    fn test_positive_negative() {
        assert!(positive(&Value::Int(1)));
        assert!(!positive(&Value::Int(0)));
        assert!(!positive(&Value::Int(-1)));
        assert!(negative(&Value::Float(-0.5)));
        assert!(!negative(&Value::Int(0)));
        assert!(!negative(&Value::from("-1")));
    }
}
