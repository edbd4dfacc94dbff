//! Leaf decoders: a single value, no further key segments.

use core::any::Any;

use formbind_core::{BoolDef, FloatDef, Shape, SignedDef, StrDef, TextDecodeFn, UnsignedDef};

use crate::keypath::require_leaf;
use crate::route::Walk;
use crate::DecodeError;

pub(crate) fn decode_bool(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &BoolDef,
) -> Result<(), DecodeError> {
    let value = require_leaf(walk.full_key, tail, values, shape)?;
    let parsed = match value {
        "true" | "1" | "on" => true,
        "false" | "0" | "" => false,
        _ => return Err(DecodeError::value(shape, value, None).with_key(walk.full_key)),
    };
    (def.set)(target, parsed)
        .map_err(|err| DecodeError::assign(shape, Some(value), err).with_key(walk.full_key))
}

pub(crate) fn decode_signed(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &SignedDef,
) -> Result<(), DecodeError> {
    let value = require_leaf(walk.full_key, tail, values, shape)?;
    let parsed = value.parse::<i128>().map_err(|err| {
        DecodeError::value(shape, value, Some(Box::new(err))).with_key(walk.full_key)
    })?;
    (def.set)(target, parsed)
        .map_err(|err| DecodeError::assign(shape, Some(value), err).with_key(walk.full_key))
}

pub(crate) fn decode_unsigned(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &UnsignedDef,
) -> Result<(), DecodeError> {
    let value = require_leaf(walk.full_key, tail, values, shape)?;
    // unsigned literals carry no sign at all
    if value.starts_with('+') {
        return Err(DecodeError::value(shape, value, None).with_key(walk.full_key));
    }
    let parsed = value.parse::<u128>().map_err(|err| {
        DecodeError::value(shape, value, Some(Box::new(err))).with_key(walk.full_key)
    })?;
    (def.set)(target, parsed)
        .map_err(|err| DecodeError::assign(shape, Some(value), err).with_key(walk.full_key))
}

pub(crate) fn decode_float(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &FloatDef,
) -> Result<(), DecodeError> {
    let value = require_leaf(walk.full_key, tail, values, shape)?;
    // parsed at the target width, so `f32` values are rounded only once
    let parsed = if def.bits == 32 {
        value.parse::<f32>().map(f64::from)
    } else {
        value.parse::<f64>()
    }
    .map_err(|err| DecodeError::value(shape, value, Some(Box::new(err))).with_key(walk.full_key))?;
    // `parse` saturates to infinity on overflow instead of failing
    if parsed.is_infinite() && !spells_infinity(value) {
        return Err(DecodeError::assign(
            shape,
            Some(value),
            formbind_core::AssignError::OutOfRange,
        )
        .with_key(walk.full_key));
    }
    (def.set)(target, parsed)
        .map_err(|err| DecodeError::assign(shape, Some(value), err).with_key(walk.full_key))
}

/// `inf`, `-Infinity` and friends, as accepted by `f64::from_str`.
fn spells_infinity(literal: &str) -> bool {
    let unsigned = literal.trim_start_matches(['+', '-']);
    unsigned
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("inf"))
}

pub(crate) fn decode_str(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &StrDef,
) -> Result<(), DecodeError> {
    let value = require_leaf(walk.full_key, tail, values, shape)?;
    (def.set)(target, value.to_owned())
        .map_err(|err| DecodeError::assign(shape, Some(value), err).with_key(walk.full_key))
}

pub(crate) fn decode_text(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    text: TextDecodeFn,
) -> Result<(), DecodeError> {
    let value = require_leaf(walk.full_key, tail, values, shape)?;
    text(target, value)
        .map_err(|err| DecodeError::assign(shape, Some(value), err).with_key(walk.full_key))
}
