//! Sequence decoder: `S[]`

use core::any::Any;
use core::slice;

use formbind_core::{ListDef, Shape};

use crate::keypath::consumed_prefix;
use crate::route::{Route, Walk};
use crate::DecodeError;

/// Builds one element per value and replaces the whole sequence with them.
pub(crate) fn decode_list(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &ListDef,
    item: &Route,
) -> Result<(), DecodeError> {
    let prefix = consumed_prefix(walk.full_key, tail);
    if tail != "[]" {
        return Err(DecodeError::nesting(shape, tail).with_key(prefix));
    }

    let mut items = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let mut element = item
            .shape()
            .zero()
            .ok_or_else(|| DecodeError::no_zero(item.shape()).with_key(prefix))?;
        let element_key = format!("{prefix}[{index}]");
        let element_walk = Walk {
            cache: walk.cache,
            full_key: &element_key,
        };
        item.decode(&element_walk, "", slice::from_ref(value), &mut *element)?;
        items.push(element);
    }

    (def.replace)(target, items).map_err(|err| DecodeError::assign(shape, None, err).with_key(prefix))
}
