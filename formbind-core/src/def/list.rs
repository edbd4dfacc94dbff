use core::any::Any;

use crate::{AssignError, Shape};

/// Replaces the whole content of a list with the given elements.
pub type ListReplaceFn = fn(list: &mut dyn Any, items: Vec<Box<dyn Any>>) -> Result<(), AssignError>;

/// Fields for list types
#[derive(Clone, Copy, Debug)]
pub struct ListDef {
    /// shape of the items in the list
    pub t: &'static Shape,
    /// cf. [`ListReplaceFn`]
    pub replace: ListReplaceFn,
}

impl ListDef {
    /// Construct a `ListDef` from the item shape and its vtable.
    pub const fn new(t: &'static Shape, replace: ListReplaceFn) -> Self {
        Self { t, replace }
    }
}
