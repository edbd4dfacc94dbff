use core::any::Any;

use crate::def::downcast_mut;
use crate::{AssignError, Def, Form, PointerDef, Shape, zero_of};

fn box_deref_mut<T: Form>(target: &mut dyn Any) -> Result<&mut dyn Any, AssignError> {
    let boxed = downcast_mut::<Box<T>>(target)?;
    let inner: &mut dyn Any = &mut **boxed;
    Ok(inner)
}

fn box_zero<T: Form>() -> Option<Box<dyn Any>> {
    let inner = zero_of::<T>()?;
    Some(Box::new(Box::new(inner)))
}

impl<T: Form> Form for Box<T> {
    const SHAPE: &'static Shape = &const {
        Shape::of::<Box<T>>("Box", Def::Pointer(PointerDef::new(T::SHAPE, box_deref_mut::<T>)))
            .with_zero(box_zero::<T>)
    };
}
