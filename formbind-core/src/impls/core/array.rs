use crate::{Def, Form, Shape, UnsupportedKind};

impl<T: 'static, const N: usize> Form for [T; N] {
    const SHAPE: &'static Shape = &const { Shape::of::<[T; N]>("[T; N]", Def::Unsupported(UnsupportedKind::Array)) };
}
