use crate::{Def, Form, Shape, UnsupportedKind};

impl Form for () {
    const SHAPE: &'static Shape = &const { Shape::of::<()>("()", Def::Unsupported(UnsupportedKind::Unit)) };
}

macro_rules! impl_form_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: 'static),+> Form for ($($name,)+) {
            const SHAPE: &'static Shape = &const {
                Shape::of::<($($name,)+)>("(⋯)", Def::Unsupported(UnsupportedKind::Tuple))
            };
        }
    };
}

impl_form_for_tuple!(A, B);
impl_form_for_tuple!(A, B, C);
impl_form_for_tuple!(A, B, C, D);
