//! Indirection: `Option<T>` and `Box<T>`. Neither consumes key segments.

use core::any::Any;

use formbind_core::{OptionDef, PointerDef, Shape};

use crate::keypath::consumed_prefix;
use crate::route::{Route, Walk};
use crate::DecodeError;

/// Fills an empty option with its inner zero value, then decodes into it.
pub(crate) fn decode_option(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &OptionDef,
    inner: &Route,
) -> Result<(), DecodeError> {
    let inner_target = (def.get_or_insert)(target).map_err(|err| {
        DecodeError::assign(shape, None, err).with_key(consumed_prefix(walk.full_key, tail))
    })?;
    inner.decode(walk, tail, values, inner_target)
}

pub(crate) fn decode_pointer(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &PointerDef,
    pointee: &Route,
) -> Result<(), DecodeError> {
    let pointee_target = (def.deref_mut)(target).map_err(|err| {
        DecodeError::assign(shape, None, err).with_key(consumed_prefix(walk.full_key, tail))
    })?;
    pointee.decode(walk, tail, values, pointee_target)
}
