use core::any::Any;

use crate::def::{downcast_box, downcast_mut};
use crate::{AssignError, Def, Form, ListDef, Shape};

fn vec_replace<T: Form>(target: &mut dyn Any, items: Vec<Box<dyn Any>>) -> Result<(), AssignError> {
    let list = downcast_mut::<Vec<T>>(target)?;
    *list = items
        .into_iter()
        .map(downcast_box::<T>)
        .collect::<Result<_, _>>()?;
    Ok(())
}

impl<T: Form> Form for Vec<T> {
    const SHAPE: &'static Shape = &const {
        Shape::of::<Vec<T>>("Vec", Def::List(ListDef::new(T::SHAPE, vec_replace::<T>)))
            .zeroed::<Vec<T>>()
    };
}
