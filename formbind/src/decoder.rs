//! Entry points.

use core::any::Any;
use formbind_core::{Form, Shape, zero_of};

use crate::keypath::split_head;
use crate::record::decode_field;
use crate::route::Walk;
use crate::{DecodeError, FormValues, ShapeCache};

/// Decodes form values into records, using the field tables of a
/// [`ShapeCache`].
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'c> {
    cache: &'c ShapeCache,
}

impl<'c> Decoder<'c> {
    /// A decoder backed by `cache`.
    pub fn new(cache: &'c ShapeCache) -> Self {
        Decoder { cache }
    }

    /// The cache this decoder uses.
    pub fn cache(&self) -> &'c ShapeCache {
        self.cache
    }

    /// Decodes `values` into `target`, which must be a record.
    ///
    /// Fields not named by any key are left alone. The first failing key
    /// aborts the call, possibly after other keys have already been applied.
    pub fn decode_into<T: Form>(&self, values: &FormValues, target: &mut T) -> Result<(), DecodeError> {
        self.decode_erased(values, Some(target as &mut dyn Any), T::SHAPE)
    }

    /// Type-erased form of [`Decoder::decode_into`].
    pub fn decode_erased(
        &self,
        values: &FormValues,
        target: Option<&mut dyn Any>,
        shape: &'static Shape,
    ) -> Result<(), DecodeError> {
        if shape.as_record().is_none() {
            return Err(DecodeError::invalid_shape(
                shape,
                "target must be a record".to_string(),
            ));
        }
        let Some(target) = target else {
            return Err(DecodeError::invalid_shape(
                shape,
                "target may not be absent".to_string(),
            ));
        };
        if (*target).type_id() != shape.id() {
            return Err(DecodeError::invalid_shape(
                shape,
                "target does not match its shape".to_string(),
            ));
        }

        // resolved before any key, even with no keys at all; a build error
        // is labelled with the first key
        let table = self.cache.resolve(shape).map_err(|err| match values.iter().next() {
            Some((key, _)) => err.with_key(key.as_str()),
            None => err,
        })?;
        for (key, key_values) in values {
            trace!(key = %key, values = key_values.len(), "decoding key");
            let walk = Walk {
                cache: self.cache,
                full_key: key,
            };
            let (head, tail) = split_head(key);
            decode_field(&walk, &table, head, tail, key_values, &mut *target)?;
        }
        Ok(())
    }
}

impl Decoder<'static> {
    /// A decoder backed by the process-wide cache.
    pub fn global() -> Self {
        Decoder::new(ShapeCache::global())
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::global()
    }
}

/// Decodes `values` into `target` using the process-wide cache.
pub fn decode_into<T: Form>(values: &FormValues, target: &mut T) -> Result<(), DecodeError> {
    Decoder::global().decode_into(values, target)
}

/// Decodes `values` into a fresh `T`, starting from its zero value.
pub fn from_values<T: Form>(values: &FormValues) -> Result<T, DecodeError> {
    let mut target = zero_of::<T>().ok_or_else(|| DecodeError::no_zero(T::SHAPE))?;
    decode_into(values, &mut target)?;
    Ok(target)
}

/// Parses an urlencoded query string and decodes it into a fresh `T`.
pub fn from_str<T: Form>(query: &str) -> Result<T, DecodeError> {
    from_values(&FormValues::parse(query))
}
