use core::fmt;
use std::error::Error;

/// A boxed error, as returned by [`crate::TextDecodable`] implementations.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Failure reported by a shape's vtable when writing into a value.
///
/// The decoder turns these into its own, key-carrying error type.
#[derive(Debug)]
#[non_exhaustive]
pub enum AssignError {
    /// The erased value was not of the type the shape describes.
    TypeMismatch {
        /// Name of the type the vtable expected.
        expected: &'static str,
    },

    /// A number parsed fine but does not fit the target width.
    OutOfRange,

    /// A container needed a fresh element but the element type has no zero value.
    NoZero {
        /// Name of the element type.
        type_name: &'static str,
    },

    /// The value's own text decoder rejected the input.
    Rejected(BoxError),
}

impl AssignError {
    /// Type mismatch against `T`.
    pub fn type_mismatch<T: ?Sized>() -> Self {
        AssignError::TypeMismatch {
            expected: core::any::type_name::<T>(),
        }
    }

    /// Missing zero value for `T`.
    pub fn no_zero<T: ?Sized>() -> Self {
        AssignError::NoZero {
            type_name: core::any::type_name::<T>(),
        }
    }
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::TypeMismatch { expected } => {
                write!(f, "value is not a `{expected}`")
            }
            AssignError::OutOfRange => f.write_str("number out of range for target type"),
            AssignError::NoZero { type_name } => {
                write!(f, "`{type_name}` has no zero value to start from")
            }
            AssignError::Rejected(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AssignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssignError::Rejected(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
