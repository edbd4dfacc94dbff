use core::any::Any;

use crate::{AssignError, Shape};

/// Returns the inner value, first installing the inner type's zero value if
/// the option is empty.
pub type OptionGetOrInsertFn = fn(option: &mut dyn Any) -> Result<&mut dyn Any, AssignError>;

/// Describes an `Option<T>`
#[derive(Clone, Copy, Debug)]
pub struct OptionDef {
    /// shape of the inner type of the option
    pub t: &'static Shape,
    /// cf. [`OptionGetOrInsertFn`]
    pub get_or_insert: OptionGetOrInsertFn,
}

impl OptionDef {
    /// Construct an `OptionDef` from the inner shape and its vtable.
    pub const fn new(t: &'static Shape, get_or_insert: OptionGetOrInsertFn) -> Self {
        Self { t, get_or_insert }
    }
}
