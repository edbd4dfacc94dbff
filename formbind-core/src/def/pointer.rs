use core::any::Any;

use crate::{AssignError, Shape};

/// Borrows the pointee mutably.
pub type PointerDerefMutFn = fn(pointer: &mut dyn Any) -> Result<&mut dyn Any, AssignError>;

/// Describes an owning pointer such as `Box<T>`.
#[derive(Clone, Copy, Debug)]
pub struct PointerDef {
    /// shape of the pointee
    pub pointee: &'static Shape,
    /// cf. [`PointerDerefMutFn`]
    pub deref_mut: PointerDerefMutFn,
}

impl PointerDef {
    /// Construct a `PointerDef` from the pointee shape and its vtable.
    pub const fn new(pointee: &'static Shape, deref_mut: PointerDerefMutFn) -> Self {
        Self { pointee, deref_mut }
    }
}
