//! Bracket key grammar.
//!
//! A key is a head followed by bracket segments: `foo[bar][]`. While
//! decoding, the full key is carried around together with its unconsumed
//! tail (`[bar][]` once `foo` has been resolved).

use formbind_core::Shape;

use crate::{DecodeError, SyntaxErrorKind};

/// Splits a key into the part before the first `[` and the rest.
pub(crate) fn split_head(key: &str) -> (&str, &str) {
    match key.find('[') {
        Some(index) => key.split_at(index),
        None => (key, ""),
    }
}

/// Returns the part of `full_key` that has already been consumed, given the
/// remaining `tail`. Used for error messages only.
pub(crate) fn consumed_prefix<'k>(full_key: &'k str, tail: &str) -> &'k str {
    full_key.strip_suffix(tail).unwrap_or(full_key)
}

/// Takes one `[segment]` off the front of `tail`, returning the segment's
/// content and what follows it.
pub(crate) fn take_bracket<'t>(
    full_key: &str,
    tail: &'t str,
    shape: &'static Shape,
) -> Result<(&'t str, &'t str), DecodeError> {
    let Some(rest) = tail.strip_prefix('[') else {
        return Err(
            DecodeError::syntax(shape, SyntaxErrorKind::MissingOpeningBracket, tail)
                .with_key(consumed_prefix(full_key, tail)),
        );
    };
    let Some(close) = rest.find(']') else {
        return Err(
            DecodeError::syntax(shape, SyntaxErrorKind::MissingClosingBracket, rest)
                .with_key(consumed_prefix(full_key, tail)),
        );
    };
    Ok((&rest[..close], &rest[close + 1..]))
}

/// Checks that a leaf is addressed without nesting and with exactly one
/// value, and returns that value.
pub(crate) fn require_leaf<'v>(
    full_key: &str,
    tail: &str,
    values: &'v [String],
    shape: &'static Shape,
) -> Result<&'v str, DecodeError> {
    if !tail.is_empty() {
        return Err(DecodeError::nesting(shape, tail).with_key(consumed_prefix(full_key, tail)));
    }
    match values {
        [value] => Ok(value),
        _ => Err(DecodeError::singleton(shape, values).with_key(full_key)),
    }
}
