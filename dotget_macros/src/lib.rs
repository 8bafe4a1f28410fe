//! Procedural macros for dotget

mod record;

use proc_macro::TokenStream;

/// Derives the `Record` trait for a struct with named fields.
///
/// Every non-skipped field must be `Clone` and convertible into
/// `dotget::Value`. Field lookup matches the field name, or the name given
/// with `#[record(rename = "...")]`; `#[record(skip)]` leaves a field out
/// of lookup entirely.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Record)]
/// struct Server {
///     host: String,
///
///     #[record(rename = "maxConnections")]
///     max_connections: i64,
///
///     #[record(skip)]
///     secret: String,
/// }
/// ```
///
/// This will generate:
///
/// - `Record::field` dispatching over the (renamed) field names
/// - `Record::as_any_arc` so `object_of` can recover the concrete type
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
