//! Form implementation for `Option<T>`

use core::any::Any;

use crate::def::downcast_mut;
use crate::{AssignError, Def, Form, OptionDef, Shape, zero_of};

fn option_get_or_insert<T: Form>(target: &mut dyn Any) -> Result<&mut dyn Any, AssignError> {
    let option = downcast_mut::<Option<T>>(target)?;
    let value = match option.take() {
        Some(value) => value,
        None => zero_of::<T>().ok_or_else(AssignError::no_zero::<T>)?,
    };
    let inner: &mut dyn Any = option.insert(value);
    Ok(inner)
}

impl<T: Form> Form for Option<T> {
    const SHAPE: &'static Shape = &const {
        Shape::of::<Option<T>>(
            "Option",
            Def::Option(OptionDef::new(T::SHAPE, option_get_or_insert::<T>)),
        )
        .zeroed::<Option<T>>()
    };
}
