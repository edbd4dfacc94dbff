//! Map decoder: `M[key]...`

use core::any::Any;

use formbind_core::{MapDef, Shape, StrDef};

use crate::keypath::{consumed_prefix, take_bracket};
use crate::route::{Route, Walk};
use crate::{DecodeError, SyntaxErrorKind};

/// Decodes into the entry named by the next bracket segment.
///
/// The entry is taken out of the map (or started from the value type's zero),
/// decoded into, and put back. A fresh entry that fails to decode is dropped,
/// so failures never add keys.
#[allow(clippy::too_many_arguments)]
pub(crate) fn decode_map(
    walk: &Walk<'_>,
    tail: &str,
    values: &[String],
    target: &mut dyn Any,
    shape: &'static Shape,
    def: &MapDef,
    key: &StrDef,
    value: &Route,
) -> Result<(), DecodeError> {
    let (segment, rest) = take_bracket(walk.full_key, tail, shape)?;
    if segment.is_empty() {
        return Err(DecodeError::syntax(shape, SyntaxErrorKind::EmptyMapKey, tail)
            .with_key(consumed_prefix(walk.full_key, tail)));
    }
    let prefix = consumed_prefix(walk.full_key, rest);

    let map_key = (key.from_string)(segment.to_owned());
    let existing = (def.take)(target, &*map_key)
        .map_err(|err| DecodeError::assign(shape, None, err).with_key(prefix))?;
    let existed = existing.is_some();

    let mut element = match existing {
        Some(element) => element,
        None => value
            .shape()
            .zero()
            .ok_or_else(|| DecodeError::no_zero(value.shape()).with_key(prefix))?,
    };

    let result = value.decode(walk, rest, values, &mut *element);
    if result.is_ok() || existed {
        (def.insert)(target, map_key, element)
            .map_err(|err| DecodeError::assign(shape, None, err).with_key(prefix))?;
    }
    result
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use formbind_core::Form;

    use super::*;
    use crate::{DecodeErrorKind, ShapeCache};

    fn decode(
        map: &mut HashMap<String, u8>,
        full_key: &str,
        tail: &str,
        value: &str,
    ) -> Result<(), DecodeError> {
        let cache = ShapeCache::new();
        let walk = Walk {
            cache: &cache,
            full_key,
        };
        let route = Route::plan(<HashMap<String, u8> as Form>::SHAPE)?;
        route.decode(&walk, tail, &[value.to_string()], map)
    }

    #[test]
    fn failed_entries_are_not_added() {
        formbind_testhelpers::setup();

        let mut map = HashMap::new();
        decode(&mut map, "M[a]", "[a]", "1").unwrap();
        assert_eq!(map.get("a"), Some(&1));

        let err = decode(&mut map, "M[b]", "[b]", "x").unwrap_err();
        assert_eq!(err.code(), "form::value");
        assert_eq!(err.key(), Some("M[b]"));
        assert!(!map.contains_key("b"));

        // an existing entry survives a failed update
        decode(&mut map, "M[a]", "[a]", "300").unwrap_err();
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn empty_segment_is_rejected() {
        formbind_testhelpers::setup();

        let mut map = HashMap::new();
        for (full_key, tail) in [("M[]", "[]"), ("M[][a]", "[][a]")] {
            let err = decode(&mut map, full_key, tail, "7").unwrap_err();
            assert!(matches!(
                err.kind(),
                DecodeErrorKind::Syntax { kind: SyntaxErrorKind::EmptyMapKey, part } if part == tail
            ));
            assert_eq!(err.key(), Some("M"));
        }
        assert!(map.is_empty());
    }

    #[test]
    fn map_needs_a_segment() {
        formbind_testhelpers::setup();

        let mut map = HashMap::new();
        let err = decode(&mut map, "M", "", "7").unwrap_err();
        assert_eq!(err.code(), "form::syntax");
        assert_eq!(err.key(), Some("M"));

        let err = decode(&mut map, "M[", "[", "7").unwrap_err();
        assert_eq!(err.code(), "form::syntax");
        assert!(map.is_empty());
    }
}
