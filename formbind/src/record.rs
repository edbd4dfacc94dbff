//! Record decoder: `R[field]...`, and field lookup shared with the top level.

use core::any::Any;

use formbind_core::Shape;

use crate::keypath::{consumed_prefix, take_bracket};
use crate::route::Walk;
use crate::{DecodeError, DecodeErrorKind, FieldTable};

pub(crate) fn decode_record(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
) -> Result<(), DecodeError> {
    let (name, rest) = take_bracket(walk.full_key, tail, shape)?;
    let table = walk
        .cache
        .resolve(shape)
        .map_err(|err| err.with_key(consumed_prefix(walk.full_key, tail)))?;
    decode_field(walk, &table, name, rest, values, target)
}

/// Decodes into the field `name` of `target`, a record described by `table`.
/// `tail` is what follows the field name in the key.
pub(crate) fn decode_field(
    walk: &Walk<'_>,
    table: &FieldTable,
    name: &str,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
) -> Result<(), DecodeError> {
    let shape = table.shape();
    let Some(entry) = table.get(name) else {
        return Err(DecodeError::new(
            DecodeErrorKind::Key {
                field: name.to_owned(),
                full_key: walk.full_key.to_owned(),
                expected: table.names().collect(),
            },
            shape,
        )
        .with_key(consumed_prefix(walk.full_key, tail)));
    };

    let Some(slot) = (entry.field.get_mut)(target) else {
        return Err(DecodeError::invalid_shape(
            shape,
            "target does not match its shape".to_string(),
        )
        .with_key(consumed_prefix(walk.full_key, tail)));
    };
    entry.route.decode(walk, tail, values, slot)
}
