//! Dot-delimited path normalization and traversal.

use crate::value::Value;

/// Characters stripped from both ends of a path before splitting.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\u{b}', '\0', '.'];

/// Resolve `path` against `data`.
///
/// `Some(value)` is a found value, including a found null; `None` means the
/// path does not exist in the data. The distinction drives default-vs-found
/// semantics upstream, so a found null must never collapse into `None`.
pub(crate) fn resolve(path: &str, data: &Value) -> Option<Value> {
    let found = walk(path, data);
    if found.is_none() {
        tracing::trace!("nothing found by path {path:?}");
    }
    found
}

/// Walk the token chain, descending through map keys, sequence indices, and
/// record fields.
///
/// A trimmed-empty path splits into a single empty token, which is looked up
/// like any other key; `explode`-style splitting is kept as-is rather than
/// special-cased.
fn walk(path: &str, data: &Value) -> Option<Value> {
    let mut current: Option<Value> = None;
    for token in path.trim_matches(TRIM_CHARS).split('.') {
        let node = current.as_ref().unwrap_or(data);
        let next = match node {
            Value::Map(map) => map.get(token)?.clone(),
            Value::Array(items) => items.get(token.parse::<usize>().ok()?)?.clone(),
            Value::Record(record) => record.field(token)?,
            _ => return None,
        };
        current = Some(next);
    }
    current
}
