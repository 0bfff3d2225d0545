//! Error types.

use std::{fmt, io, path::PathBuf};

/// Curve generation errors.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A closed-form formula disagrees with its literal counterpart, or a
    /// derived constant failed its consistency check.
    FormulaMismatch {
        /// Curve name.
        curve: &'static str,
        /// Parameter which failed to match.
        parameter: &'static str,
    },

    /// The curve has a shape the consuming arithmetic does not support.
    UnsupportedCurveShape {
        /// Curve name.
        curve: &'static str,
        /// Which restriction was violated.
        reason: &'static str,
    },

    /// Modular inverse requested for a value which is not a unit.
    NotInvertible,

    /// A hexadecimal literal in a curve description could not be parsed.
    MalformedLiteral {
        /// Curve name.
        curve: &'static str,
        /// Parameter holding the malformed literal.
        parameter: &'static str,
    },

    /// The template references a placeholder with no value.
    MissingPlaceholder {
        /// Placeholder name.
        name: String,
    },

    /// The template contains an unterminated placeholder.
    MalformedTemplate {
        /// Byte offset of the unterminated `${`.
        offset: usize,
    },

    /// I/O error while writing an artifact.
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FormulaMismatch { curve, parameter } => write!(
                f,
                "{curve}: closed form of `{parameter}` doesn't match the literal given in the curve description"
            ),
            Error::UnsupportedCurveShape { curve, reason } => {
                write!(f, "{curve}: unsupported curve: {reason}")
            }
            Error::NotInvertible => f.write_str("value is not invertible modulo the given modulus"),
            Error::MalformedLiteral { curve, parameter } => {
                write!(f, "{curve}: `{parameter}` is not a valid hexadecimal literal")
            }
            Error::MissingPlaceholder { name } => {
                write!(f, "template placeholder `{name}` has no value")
            }
            Error::MalformedTemplate { offset } => {
                write!(f, "unterminated template placeholder at byte {offset}")
            }
            Error::Io { path, .. } => write!(f, "I/O error on {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
