//! Error taxonomy for typed path extraction.
//!
//! Every failure carries the offending path so callers can report which
//! location in the data violated the requested type, without re-deriving it
//! from call context.

use strum::Display;
use thiserror::Error;

/// Result type for the `dotget` library.
pub type Result<T> = core::result::Result<T, Error>;

/// The numeric kind a coercion was asked to produce.
///
/// Rendered into [`Error::NotNumeric`] diagnostics as `an int` / `a float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NumericKind {
    /// Integer target.
    #[strum(serialize = "an int")]
    Int,
    /// Floating-point target.
    #[strum(serialize = "a float")]
    Float,
}

/// Typed extraction failures.
///
/// The `Display` strings are part of the library's contract and are kept
/// stable; match on the variant for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value exists at the path but is a container (or null) where a
    /// scalar was required.
    #[error("Item found by path {path} isn't scalar")]
    NotScalar {
        /// Path that resolved to the offending value.
        path: String,
    },

    /// A scalar exists at the path but cannot be read as the requested
    /// numeric kind.
    #[error("Item found by path {path} isn't {kind} number")]
    NotNumeric {
        /// Path that resolved to the offending value.
        path: String,
        /// Numeric kind that was requested.
        kind: NumericKind,
    },

    /// A value exists at the path but is not a sequence.
    #[error("Item found by path {path} isn't an array")]
    NotArray {
        /// Path that resolved to the offending value.
        path: String,
    },

    /// The path is absent, or the value found is not an instance of the
    /// requested record type.
    #[error("Item found by path {path} isn't an instance of {type_name}")]
    NotInstance {
        /// Path that was requested.
        path: String,
        /// Fully-qualified name of the requested record type.
        type_name: String,
    },

    /// The path resolved to nothing on a `require_*` operation.
    #[error("Item isn't found by path {path}")]
    RequiredMissing {
        /// Path that was requested.
        path: String,
    },
}

impl Error {
    /// A container (or null) was found where a scalar was required.
    pub fn not_scalar(path: impl Into<String>) -> Self {
        Self::NotScalar { path: path.into() }
    }

    /// A scalar was found that isn't readable as the requested numeric kind.
    pub fn not_numeric(path: impl Into<String>, kind: NumericKind) -> Self {
        Self::NotNumeric {
            path: path.into(),
            kind,
        }
    }

    /// A non-sequence value was found where a sequence was required.
    pub fn not_array(path: impl Into<String>) -> Self {
        Self::NotArray { path: path.into() }
    }

    /// The value (or its absence) is not an instance of the requested type.
    pub fn not_instance(path: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::NotInstance {
            path: path.into(),
            type_name: type_name.into(),
        }
    }

    /// Nothing was found on a required extraction.
    pub fn missing(path: impl Into<String>) -> Self {
        Self::RequiredMissing { path: path.into() }
    }

    /// The path the failing operation was asked to resolve.
    pub fn path(&self) -> &str {
        match self {
            Self::NotScalar { path }
            | Self::NotNumeric { path, .. }
            | Self::NotArray { path }
            | Self::NotInstance { path, .. }
            | Self::RequiredMissing { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wording_is_stable() {
        let cases = [
            (
                Error::not_scalar("test"),
                "Item found by path test isn't scalar",
            ),
            (
                Error::not_numeric("test", NumericKind::Int),
                "Item found by path test isn't an int number",
            ),
            (
                Error::not_numeric("test", NumericKind::Float),
                "Item found by path test isn't a float number",
            ),
            (
                Error::not_array("test"),
                "Item found by path test isn't an array",
            ),
            (
                Error::not_instance("test", "my::Config"),
                "Item found by path test isn't an instance of my::Config",
            ),
            (Error::missing("test"), "Item isn't found by path test"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn path_accessor_covers_every_variant() {
        let errors = [
            Error::not_scalar("a.b"),
            Error::not_numeric("a.b", NumericKind::Float),
            Error::not_array("a.b"),
            Error::not_instance("a.b", "T"),
            Error::missing("a.b"),
        ];

        for error in errors {
            assert_eq!(error.path(), "a.b");
        }
    }
}
