use crate::{Def, Form, Shape, UnsupportedKind};

impl<R: 'static> Form for fn() -> R {
    const SHAPE: &'static Shape =
        &const { Shape::of::<fn() -> R>("fn", Def::Unsupported(UnsupportedKind::Function)) };
}
