use core::fmt;

mod scalar;
pub use scalar::*;

mod map;
pub use map::*;

mod list;
pub use list::*;

mod option;
pub use option::*;

mod pointer;
pub use pointer::*;

mod record;
pub use record::*;

/// The semantic definition of a shape: is it a scalar, a map, a list?
///
/// Each variant carries the vtable the decoder needs to write into values
/// of that kind without knowing their concrete type.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Def {
    /// A leaf value: boolean, number or string.
    Scalar(ScalarDef),

    /// String-keyed map with homogeneous values
    ///
    /// e.g. `HashMap<String, T>`
    Map(MapDef),

    /// Growable, ordered list of homogeneous values
    ///
    /// e.g. `Vec<T>`
    List(ListDef),

    /// A value that may be absent
    ///
    /// e.g. `Option<T>`
    Option(OptionDef),

    /// An owning pointer that always holds a value
    ///
    /// e.g. `Box<T>`
    Pointer(PointerDef),

    /// A struct with fields addressable by name.
    Record(RecordDef),

    /// Something the form decoder cannot write into.
    Unsupported(UnsupportedKind),
}

/// The kinds of types the decoder refuses to handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnsupportedKind {
    /// `()`
    Unit,
    /// `(A, B, ..)`
    Tuple,
    /// `[T; N]`
    Array,
    /// Channel endpoints
    Channel,
    /// Function pointers
    Function,
    /// Anything else without a structural description
    Opaque,
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnsupportedKind::Unit => "unit",
            UnsupportedKind::Tuple => "tuple",
            UnsupportedKind::Array => "fixed-size array",
            UnsupportedKind::Channel => "channel",
            UnsupportedKind::Function => "function",
            UnsupportedKind::Opaque => "opaque type",
        })
    }
}

/// Downcasts an erased value to `T`, reporting a [`crate::AssignError`] on mismatch.
pub(crate) fn downcast_mut<T: 'static>(
    target: &mut dyn core::any::Any,
) -> Result<&mut T, crate::AssignError> {
    target
        .downcast_mut::<T>()
        .ok_or_else(crate::AssignError::type_mismatch::<T>)
}

/// Unboxes an erased value to `T`, reporting a [`crate::AssignError`] on mismatch.
pub(crate) fn downcast_box<T: 'static>(
    value: Box<dyn core::any::Any>,
) -> Result<T, crate::AssignError> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| crate::AssignError::type_mismatch::<T>())
}
