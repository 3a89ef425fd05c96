//! # isit - Type check values
//!
//! A stateless predicate library: small, deterministic classifiers for a
//! dynamic value's type, shape, or numeric property, plus environment
//! sniffers (browser, device, cookie support) over an injected snapshot.
//!
//! ## Core Concepts
//!
//! - **Value**: the dynamic value universe the predicates classify
//! - **Registry**: the fixed name-to-predicate mapping, built once
//! - **Env**: an explicit snapshot of ambient browser state for the
//!   environment sniffers
//!
//! ## Usage
//!
//! ```
//! use isit::{check, registry, Value};
//!
//! // Direct calls
//! assert!(check::is_numeric(&Value::from("-123")));
//! assert!(check::between(&Value::Int(5), &Value::Int(10), &Value::Int(1)));
//!
//! // Dynamic dispatch by name
//! let reg = registry();
//! assert_eq!(reg.apply("empty", &[Value::from("")]), Ok(true));
//! assert_eq!(reg.apply("empty", &[Value::Int(0)]), Ok(false));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod check;
pub mod env;
pub mod error;
pub mod registry;
pub mod value;

// Re-export primary types at crate root for convenience
pub use env::{Env, EnvBuilder, Features};
pub use error::{IsResult, RegistryError};
pub use registry::{registry, PredicateFn, Registry};
pub use value::Value;
