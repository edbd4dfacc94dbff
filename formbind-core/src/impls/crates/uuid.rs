use core::any::Any;

use uuid::Uuid;

use crate::{Form, Shape};

crate::text_decodable_via_from_str!(Uuid);

fn uuid_zero() -> Option<Box<dyn Any>> {
    Some(Box::new(Uuid::nil()))
}

impl Form for Uuid {
    const SHAPE: &'static Shape = &const { text_shape!(Uuid, "Uuid").with_zero(uuid_zero) };
}
