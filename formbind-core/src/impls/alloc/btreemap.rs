use core::any::Any;
use std::collections::BTreeMap;

use crate::def::{downcast_box, downcast_mut};
use crate::{AssignError, Def, Form, MapDef, Shape};

fn btreemap_take<K: Form + Ord, V: Form>(
    target: &mut dyn Any,
    key: &dyn Any,
) -> Result<Option<Box<dyn Any>>, AssignError> {
    let map = downcast_mut::<BTreeMap<K, V>>(target)?;
    let key = key
        .downcast_ref::<K>()
        .ok_or_else(AssignError::type_mismatch::<K>)?;
    Ok(map.remove(key).map(|value| Box::new(value) as Box<dyn Any>))
}

fn btreemap_insert<K: Form + Ord, V: Form>(
    target: &mut dyn Any,
    key: Box<dyn Any>,
    value: Box<dyn Any>,
) -> Result<(), AssignError> {
    let map = downcast_mut::<BTreeMap<K, V>>(target)?;
    map.insert(downcast_box::<K>(key)?, downcast_box::<V>(value)?);
    Ok(())
}

impl<K: Form + Ord, V: Form> Form for BTreeMap<K, V> {
    const SHAPE: &'static Shape = &const {
        Shape::of::<BTreeMap<K, V>>(
            "BTreeMap",
            Def::Map(MapDef::new(
                K::SHAPE,
                V::SHAPE,
                btreemap_take::<K, V>,
                btreemap_insert::<K, V>,
            )),
        )
        .zeroed::<BTreeMap<K, V>>()
    };
}
