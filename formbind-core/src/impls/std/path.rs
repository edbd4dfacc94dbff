use std::path::PathBuf;

use crate::{Form, Shape};

crate::text_decodable_via_from_str!(PathBuf);

impl Form for PathBuf {
    const SHAPE: &'static Shape = &const { text_shape!(PathBuf, "PathBuf").zeroed::<PathBuf>() };
}
