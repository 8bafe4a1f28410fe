//! Typed value extraction from nested dynamic data via dot-delimited paths.
//!
//! Decoded payloads and configuration trees arrive untyped; this crate
//! turns "some value, somewhere in there" into a typed result without
//! scattering null and shape checks through calling code.
//!
//! A path like `"server.port"` is trimmed, split on `.`, and walked through
//! maps (by key), sequences (by index), and [`Record`]s (by field name).
//! Each operation then applies the coercion rule for its target kind:
//!
//! ```
//! use dotget::Value;
//! use serde_json::json;
//!
//! let data = Value::from(json!({
//!     "server": {"host": "localhost", "port": "8080", "tags": ["a", "b"]}
//! }));
//!
//! assert_eq!(dotget::require_string("server.host", &data), Ok("localhost".to_string()));
//! assert_eq!(dotget::int("server.port", &data, 80), Ok(8080));
//! assert_eq!(dotget::bool("server.tls", &data, false), Ok(false)); // absent -> default
//! assert_eq!(dotget::string("server.tags.0", &data, ""), Ok("a".to_string()));
//! ```
//!
//! Absence and found-null are distinct outcomes: a present key holding null
//! is a found value (it fails scalar coercion and passes through [`get`]
//! verbatim), while only true absence triggers defaults or, on the
//! `require_*` operations, [`Error::RequiredMissing`].
//!
//! [`Scope`] binds one root so call sites don't repeat it:
//!
//! ```
//! use dotget::{Scope, Value};
//! use serde_json::json;
//!
//! let scope = Scope::wrap(Value::from(json!({"retry": {"max": 5}})));
//! assert_eq!(scope.require_int("retry.max"), Ok(5));
//! ```
//!
//! Structured types participate in traversal through the [`Record`] trait,
//! usually via `#[derive(Record)]`; see the trait docs.

mod coerce;
mod error;
mod extract;
mod path;
mod record;
mod scope;
mod value;

pub use dotget_macros::Record;
pub use error::{Error, NumericKind, Result};
pub use extract::{
    DEFAULT_BOOL, DEFAULT_FLOAT, DEFAULT_INT, DEFAULT_STRING, array, array_of, bool, float, get,
    int, object_of, require_bool, require_float, require_int, require_string, string,
};
pub use record::Record;
pub use scope::Scope;
pub use value::{Map, Value};
