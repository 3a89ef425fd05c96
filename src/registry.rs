//! The predicate registry: a fixed mapping from name to function.
//!
//! The registry is the dynamic-dispatch surface over the value
//! predicates in [`check`]. It is constructed once and never mutated;
//! [`registry`] hands out the process-wide instance. Environment
//! sniffers are not registered here because they need an injected
//! [`Env`](crate::Env) snapshot rather than value arguments.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::check;
use crate::error::{IsResult, RegistryError};
use crate::value::Value;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Returns the process-wide registry, constructed on first use.
#[must_use]
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// A registered predicate function with its fixed arity.
#[derive(Debug, Clone, Copy)]
pub enum PredicateFn {
    /// Classifies a single value.
    Unary(fn(&Value) -> bool),
    /// Relates two values.
    Binary(fn(&Value, &Value) -> bool),
    /// Relates three values.
    Ternary(fn(&Value, &Value, &Value) -> bool),
}

impl PredicateFn {
    /// Number of arguments the predicate takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
            Self::Ternary(_) => 3,
        }
    }

    fn call(&self, name: &'static str, args: &[Value]) -> IsResult<bool> {
        match (self, args) {
            (Self::Unary(f), [a]) => Ok(f(a)),
            (Self::Binary(f), [a, b]) => Ok(f(a, b)),
            (Self::Ternary(f), [a, b, c]) => Ok(f(a, b, c)),
            _ => Err(RegistryError::ArityMismatch {
                name,
                expected: self.arity(),
                actual: args.len(),
            }),
        }
    }
}

/// The immutable predicate set, keyed by the predicate names of the
/// public contract. Aliases (`bool`/`boolean`, `function`/`callback`)
/// are distinct entries bound to the same behavior.
///
/// # Examples
///
/// ```
/// use isit::{registry, Value};
///
/// let reg = registry();
/// assert_eq!(reg.apply("numeric", &[Value::from("123")]), Ok(true));
/// assert_eq!(reg.apply("between", &[
///     Value::Int(5), Value::Int(1), Value::Int(10),
/// ]), Ok(true));
/// ```
#[derive(Debug)]
pub struct Registry {
    entries: BTreeMap<&'static str, PredicateFn>,
}

impl Registry {
    /// Builds the full predicate set.
    #[must_use]
    pub fn new() -> Self {
        use PredicateFn::{Binary, Ternary, Unary};

        let entries = BTreeMap::from([
            ("null", Unary(check::is_null)),
            ("undefined", Unary(check::is_undefined)),
            ("string", Unary(check::is_string)),
            ("int", Unary(check::is_int)),
            ("float", Unary(check::is_float)),
            ("numeric", Unary(check::is_numeric)),
            ("even", Unary(check::is_even)),
            ("odd", Unary(check::is_odd)),
            ("NaN", Unary(check::is_nan)),
            ("bool", Unary(check::is_bool)),
            ("boolean", Unary(check::is_bool)),
            ("array", Unary(check::is_array)),
            ("object", Unary(check::is_object)),
            ("plainObject", Unary(check::is_plain_object)),
            ("json", Unary(check::is_json)),
            ("url", Unary(check::is_url)),
            ("iterable", Unary(check::is_iterable)),
            ("dom", Unary(check::is_dom)),
            ("formData", Unary(check::is_form_data)),
            ("function", Unary(check::is_function)),
            ("callback", Unary(check::is_callback)),
            ("symbol", Unary(check::is_symbol)),
            ("regex", Unary(check::is_regex)),
            ("date", Unary(check::is_date)),
            ("greater", Binary(check::greater)),
            ("less", Binary(check::less)),
            ("between", Ternary(check::between)),
            ("positive", Unary(check::positive)),
            ("negative", Unary(check::negative)),
            ("empty", Unary(check::empty)),
            ("email", Unary(check::email)),
            ("phone", Binary(check::phone)),
        ]);

        Self { entries }
    }

    /// Looks up a predicate by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PredicateFn> {
        self.entries.get(name)
    }

    /// Returns true if the registry knows the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the arity of the named predicate, if registered.
    #[must_use]
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.get(name).map(PredicateFn::arity)
    }

    /// Iterates over the registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered predicates, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no predicates are registered. Never the case for
    /// a constructed registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies the named predicate to the given arguments.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownPredicate`] for an unregistered name,
    /// [`RegistryError::ArityMismatch`] when the argument count does not
    /// match the predicate's arity.
    pub fn apply(&self, name: &str, args: &[Value]) -> IsResult<bool> {
        let (key, func) =
            self.entries
                .get_key_value(name)
                .ok_or_else(|| RegistryError::UnknownPredicate {
                    name: name.to_string(),
                })?;
        func.call(key, args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_census() {
        let reg = Registry::new();
        assert_eq!(reg.len(), 32);
        assert!(!reg.is_empty());
        for name in [
            "null", "undefined", "string", "int", "float", "numeric", "even", "odd", "NaN",
            "bool", "boolean", "array", "object", "plainObject", "json", "url", "iterable",
            "dom", "formData", "function", "callback", "symbol", "regex", "date", "greater",
            "less", "between", "positive", "negative", "empty", "email", "phone",
        ] {
            assert!(reg.contains(name), "missing predicate '{name}'");
        }
    }

    #[test]
    fn test_registry_arities() {
        let reg = Registry::new();
        assert_eq!(reg.arity("null"), Some(1));
        assert_eq!(reg.arity("greater"), Some(2));
        assert_eq!(reg.arity("phone"), Some(2));
        assert_eq!(reg.arity("between"), Some(3));
        assert_eq!(reg.arity("bogus"), None);
    }

    #[test]
    fn test_apply_unary() {
        let reg = Registry::new();
        assert_eq!(reg.apply("null", &[Value::Null]), Ok(true));
        assert_eq!(reg.apply("null", &[Value::Int(1)]), Ok(false));
        assert_eq!(reg.apply("even", &[Value::Int(4)]), Ok(true));
    }

    #[test]
    fn test_apply_unknown_name() {
        let reg = Registry::new();
        let err = reg.apply("nope", &[Value::Null]).unwrap_err();
        assert!(err.is_unknown());
    }

    #[test]
    fn test_apply_arity_mismatch() {
        let reg = Registry::new();
        let err = reg.apply("between", &[Value::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::ArityMismatch {
                name: "between",
                expected: 3,
                actual: 1,
            }
        );
        let err = reg.apply("null", &[]).unwrap_err();
        assert!(err.is_arity_mismatch());
    }

    #[test]
    fn test_aliases_agree() {
        let reg = Registry::new();
        for probe in [
            Value::Bool(true),
            Value::Int(0),
            Value::from("x"),
            Value::Function("f".to_string()),
            Value::Null,
        ] {
            assert_eq!(
                reg.apply("bool", std::slice::from_ref(&probe)),
                reg.apply("boolean", std::slice::from_ref(&probe)),
            );
            assert_eq!(
                reg.apply("function", std::slice::from_ref(&probe)),
                reg.apply("callback", std::slice::from_ref(&probe)),
            );
        }
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = registry();
        let b = registry();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), Registry::new().len());
    }
}
