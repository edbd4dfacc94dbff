use crate::{Form, Shape};

crate::text_decodable_via_from_str!(char);

impl Form for char {
    const SHAPE: &'static Shape = &const { text_shape!(char, "char").zeroed::<char>() };
}
