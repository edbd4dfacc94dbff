use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::{Def, Form, ScalarDef, Shape, StrDef};

macro_rules! impl_form_for_string {
    ($($ty:ty => $ident:literal),+ $(,)?) => {
        $(
            impl Form for $ty {
                const SHAPE: &'static Shape = &const {
                    Shape::of::<$ty>($ident, Def::Scalar(ScalarDef::Str(StrDef::of::<$ty>())))
                        .zeroed::<$ty>()
                };
            }
        )+
    };
}

impl_form_for_string!(
    String => "String",
    Box<str> => "Box<str>",
    Arc<str> => "Arc<str>",
    Rc<str> => "Rc<str>",
    Cow<'static, str> => "Cow<str>",
);
