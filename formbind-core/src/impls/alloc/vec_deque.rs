use core::any::Any;
use std::collections::VecDeque;

use crate::def::{downcast_box, downcast_mut};
use crate::{AssignError, Def, Form, ListDef, Shape};

fn vec_deque_replace<T: Form>(
    target: &mut dyn Any,
    items: Vec<Box<dyn Any>>,
) -> Result<(), AssignError> {
    let list = downcast_mut::<VecDeque<T>>(target)?;
    *list = items
        .into_iter()
        .map(downcast_box::<T>)
        .collect::<Result<_, _>>()?;
    Ok(())
}

impl<T: Form> Form for VecDeque<T> {
    const SHAPE: &'static Shape = &const {
        Shape::of::<VecDeque<T>>(
            "VecDeque",
            Def::List(ListDef::new(T::SHAPE, vec_deque_replace::<T>)),
        )
        .zeroed::<VecDeque<T>>()
    };
}
