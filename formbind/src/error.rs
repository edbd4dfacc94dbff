//! Error types for form decoding.

use std::{
    error::Error,
    fmt::{self, Debug, Display},
};

use formbind_core::{AssignError, BoxError, Shape};

/// Error returned when decoding form values fails.
///
/// The first error aborts the decode call; the target may have been partially
/// written to by then.
pub struct DecodeError {
    /// The specific kind of error
    pub(crate) kind: DecodeErrorKind,
    /// The key, or the part of it consumed so far
    pub(crate) key: Option<String>,
    /// The shape being decoded into when the error happened
    pub(crate) shape: &'static Shape,
}

impl DecodeError {
    /// Returns a reference to the error kind for detailed error inspection.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the offending key, as far as it had been consumed.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the shape implicated in the error.
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Returns a stable error code, such as `form::nesting`.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub(crate) fn new(kind: DecodeErrorKind, shape: &'static Shape) -> Self {
        DecodeError {
            kind,
            key: None,
            shape,
        }
    }

    /// Attaches a key, unless a more precise one is already set.
    pub(crate) fn with_key(mut self, key: impl Into<String>) -> Self {
        if self.key.is_none() {
            self.key = Some(key.into());
        }
        self
    }

    pub(crate) fn syntax(shape: &'static Shape, kind: SyntaxErrorKind, part: &str) -> Self {
        Self::new(
            DecodeErrorKind::Syntax {
                kind,
                part: part.to_owned(),
            },
            shape,
        )
    }

    pub(crate) fn nesting(shape: &'static Shape, nesting: &str) -> Self {
        Self::new(
            DecodeErrorKind::Nesting {
                nesting: nesting.to_owned(),
            },
            shape,
        )
    }

    pub(crate) fn singleton(shape: &'static Shape, values: &[String]) -> Self {
        Self::new(
            DecodeErrorKind::Singleton {
                values: values.to_vec(),
            },
            shape,
        )
    }

    pub(crate) fn value(shape: &'static Shape, value: &str, cause: Option<BoxError>) -> Self {
        Self::new(
            DecodeErrorKind::Value {
                value: value.to_owned(),
                cause,
            },
            shape,
        )
    }

    pub(crate) fn invalid_shape(shape: &'static Shape, hint: impl Into<Option<String>>) -> Self {
        Self::new(DecodeErrorKind::InvalidShape { hint: hint.into() }, shape)
    }

    /// A fresh value of `shape` was needed but it has no zero value.
    pub(crate) fn no_zero(shape: &'static Shape) -> Self {
        let err = AssignError::NoZero {
            type_name: shape.type_name(),
        };
        Self::invalid_shape(shape, err.to_string())
    }

    /// Turns a vtable failure into a decode error. `value` is the raw text
    /// being stored, if any.
    pub(crate) fn assign(shape: &'static Shape, value: Option<&str>, err: AssignError) -> Self {
        match (err, value) {
            (AssignError::Rejected(cause), Some(value)) => Self::value(shape, value, Some(cause)),
            (err @ AssignError::OutOfRange, Some(value)) => {
                Self::value(shape, value, Some(Box::new(err)))
            }
            (err, _) => Self::invalid_shape(shape, err.to_string()),
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.key {
            write!(f, "key `{key}`: ")?;
        }

        let shape = self.shape;
        match &self.kind {
            DecodeErrorKind::Syntax { kind, part } => match kind {
                SyntaxErrorKind::MissingOpeningBracket => {
                    write!(f, "expected `[` at the start of `{part}`")
                }
                SyntaxErrorKind::MissingClosingBracket => {
                    write!(f, "missing `]` after `[{part}`")
                }
                SyntaxErrorKind::EmptyMapKey => write!(f, "empty map key in `{part}`"),
            },
            DecodeErrorKind::Nesting { nesting } => {
                write!(f, "{shape} cannot be nested into, got `{nesting}`")
            }
            DecodeErrorKind::Singleton { values } => {
                write!(f, "{shape} takes exactly one value, got {}", values.len())
            }
            DecodeErrorKind::Value { value, cause } => {
                write!(f, "invalid value {value:?} for {shape}")?;
                if let Some(cause) = cause {
                    write!(f, ": {cause}")?;
                }
                Ok(())
            }
            DecodeErrorKind::Key {
                field,
                full_key,
                expected,
            } => {
                write!(f, "unknown field `{field}` in {shape} (full key `{full_key}`)")?;
                if !expected.is_empty() {
                    write!(f, ", expected one of: {}", expected.join(", "))?;
                }
                Ok(())
            }
            DecodeErrorKind::InvalidShape { hint } => {
                write!(f, "cannot decode into {shape}")?;
                if let Some(hint) = hint {
                    write!(f, ": {hint}")?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeError")
            .field("code", &self.code())
            .field("key", &self.key)
            .field("shape", &format_args!("{}", self.shape))
            .field("kind", &self.kind)
            .finish()
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            DecodeErrorKind::Value {
                cause: Some(cause), ..
            } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// Detailed classification of decode errors.
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// A key has malformed brackets.
    Syntax {
        /// What is wrong with the brackets
        kind: SyntaxErrorKind,
        /// The part of the key that could not be read
        part: String,
    },

    /// A leaf received nested key segments, or a list received anything but `[]`.
    Nesting {
        /// The unconsumed rest of the key
        nesting: String,
    },

    /// A leaf received zero or several values.
    Singleton {
        /// The values that were supplied
        values: Vec<String>,
    },

    /// A value could not be converted to the target type.
    Value {
        /// The offending value
        value: String,
        /// Why it was refused, if there is more to say than "it's invalid"
        cause: Option<BoxError>,
    },

    /// A key names a field the record does not have.
    Key {
        /// The unknown field name
        field: String,
        /// The whole key as it was supplied
        full_key: String,
        /// Names the record does accept
        expected: Vec<&'static str>,
    },

    /// The target, or something inside it, cannot be decoded into.
    InvalidShape {
        /// Extra explanation
        hint: Option<String>,
    },
}

impl DecodeErrorKind {
    /// Returns an error code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeErrorKind::Syntax { .. } => "form::syntax",
            DecodeErrorKind::Nesting { .. } => "form::nesting",
            DecodeErrorKind::Singleton { .. } => "form::singleton",
            DecodeErrorKind::Value { .. } => "form::value",
            DecodeErrorKind::Key { .. } => "form::key",
            DecodeErrorKind::InvalidShape { .. } => "form::invalid_shape",
        }
    }
}

/// The ways bracket syntax can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A segment did not start with `[`.
    MissingOpeningBracket,
    /// A `[` was never closed.
    MissingClosingBracket,
    /// A map was addressed with `[]` instead of `[key]`.
    EmptyMapKey,
}
