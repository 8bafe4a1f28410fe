//! The named-field container shape.
//!
//! Maps and records are the two container shapes a path can traverse. A map
//! is looked up by key; anything else that wants to participate exposes its
//! fields by name through [`Record`]. Dispatch is a capability check on the
//! shape, never runtime inspection of the concrete type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A structured object that exposes named fields for path traversal.
///
/// Most types should use `#[derive(Record)]` from this crate, which covers
/// structs with named fields whose field types are `Clone` and convertible
/// into [`Value`]:
///
/// ```
/// use std::sync::Arc;
///
/// use dotget::{Record, Scope};
///
/// #[derive(Debug, Record)]
/// struct Endpoint {
///     host: String,
///     port: i64,
/// }
///
/// let scope = Scope::wrap(Arc::new(Endpoint {
///     host: "localhost".to_string(),
///     port: 8080,
/// }));
/// assert_eq!(scope.require_int("port"), Ok(8080));
/// ```
///
/// Implementing by hand is a `match` over field names plus the downcast
/// plumbing:
///
/// ```
/// use std::any::Any;
/// use std::sync::Arc;
///
/// use dotget::{Record, Value};
///
/// #[derive(Debug)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// impl Record for Point {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "x" => Some(Value::Float(self.x)),
///             "y" => Some(Value::Float(self.y)),
///             _ => None,
///         }
///     }
///
///     fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
///         self
///     }
/// }
/// ```
pub trait Record: fmt::Debug + Send + Sync + 'static {
    /// Look up a field by name.
    ///
    /// `Some(Value::Null)` is a present field holding null; `None` means the
    /// record has no such field. Path resolution treats only `None` as
    /// absence.
    fn field(&self, name: &str) -> Option<Value>;

    /// Upcast for concrete-type recovery by [`object_of`](crate::object_of).
    fn as_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}
