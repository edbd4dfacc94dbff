use core::any::Any;

use crate::{AssignError, Shape};

/// Removes the entry for `key` from the map and returns its value, if any.
pub type MapTakeFn =
    fn(map: &mut dyn Any, key: &dyn Any) -> Result<Option<Box<dyn Any>>, AssignError>;

/// Inserts `value` under `key`, replacing any existing entry.
pub type MapInsertFn =
    fn(map: &mut dyn Any, key: Box<dyn Any>, value: Box<dyn Any>) -> Result<(), AssignError>;

/// Fields for map types
///
/// Map values are not addressable in place through the erased interface, so
/// the decoder works on an entry by taking it out, mutating it, and putting
/// it back.
#[derive(Clone, Copy, Debug)]
pub struct MapDef {
    /// shape of the keys in the map
    pub k: &'static Shape,
    /// shape of the values in the map
    pub v: &'static Shape,
    /// cf. [`MapTakeFn`]
    pub take: MapTakeFn,
    /// cf. [`MapInsertFn`]
    pub insert: MapInsertFn,
}

impl MapDef {
    /// Construct a `MapDef` from key/value shapes and its vtable.
    pub const fn new(
        k: &'static Shape,
        v: &'static Shape,
        take: MapTakeFn,
        insert: MapInsertFn,
    ) -> Self {
        Self { k, v, take, insert }
    }
}
