use crate::{BoolDef, Def, FloatDef, Form, ScalarDef, Shape, SignedDef, UnsignedDef};

impl Form for bool {
    const SHAPE: &'static Shape = &const {
        Shape::of::<bool>("bool", Def::Scalar(ScalarDef::Bool(BoolDef::of::<bool>()))).zeroed::<bool>()
    };
}

macro_rules! impl_form_for_integer {
    ($variant:ident, $def:ident: $($ty:ident),+) => {
        $(
            impl Form for $ty {
                const SHAPE: &'static Shape = &const {
                    Shape::of::<$ty>(
                        stringify!($ty),
                        Def::Scalar(ScalarDef::$variant($def::of::<$ty>())),
                    )
                    .zeroed::<$ty>()
                };
            }
        )+
    };
}

impl_form_for_integer!(Signed, SignedDef: i8, i16, i32, i64, i128, isize);
impl_form_for_integer!(Unsigned, UnsignedDef: u8, u16, u32, u64, u128, usize);

impl Form for f32 {
    const SHAPE: &'static Shape = &const {
        Shape::of::<f32>("f32", Def::Scalar(ScalarDef::Float(FloatDef::F32))).zeroed::<f32>()
    };
}

impl Form for f64 {
    const SHAPE: &'static Shape = &const {
        Shape::of::<f64>("f64", Def::Scalar(ScalarDef::Float(FloatDef::F64))).zeroed::<f64>()
    };
}

#[cfg(test)]
mod tests {
    use crate::{Def, Form, ScalarDef};

    #[test]
    fn integer_widths() {
        formbind_testhelpers::setup();

        for (shape, bits) in [
            (<u8 as Form>::SHAPE, 8),
            (<u64 as Form>::SHAPE, 64),
            (<usize as Form>::SHAPE, usize::BITS),
            (<u128 as Form>::SHAPE, 128),
        ] {
            match shape.def {
                Def::Scalar(ScalarDef::Unsigned(def)) => assert_eq!(def.bits, bits, "{shape}"),
                other => panic!("{shape} is not unsigned: {other:?}"),
            }
        }

        match <i16 as Form>::SHAPE.def {
            Def::Scalar(ScalarDef::Signed(def)) => assert_eq!(def.bits, 16),
            other => panic!("i16 is not signed: {other:?}"),
        }
    }
}
