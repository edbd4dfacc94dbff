use core::any::Any;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::def::{downcast_box, downcast_mut};
use crate::{AssignError, Def, Form, MapDef, Shape};

fn hashmap_take<K, V, S>(
    target: &mut dyn Any,
    key: &dyn Any,
) -> Result<Option<Box<dyn Any>>, AssignError>
where
    K: Form + Eq + Hash,
    V: Form,
    S: BuildHasher + 'static,
{
    let map = downcast_mut::<HashMap<K, V, S>>(target)?;
    let key = key
        .downcast_ref::<K>()
        .ok_or_else(AssignError::type_mismatch::<K>)?;
    Ok(map.remove(key).map(|value| Box::new(value) as Box<dyn Any>))
}

fn hashmap_insert<K, V, S>(
    target: &mut dyn Any,
    key: Box<dyn Any>,
    value: Box<dyn Any>,
) -> Result<(), AssignError>
where
    K: Form + Eq + Hash,
    V: Form,
    S: BuildHasher + 'static,
{
    let map = downcast_mut::<HashMap<K, V, S>>(target)?;
    map.insert(downcast_box::<K>(key)?, downcast_box::<V>(value)?);
    Ok(())
}

impl<K, V, S> Form for HashMap<K, V, S>
where
    K: Form + Eq + Hash,
    V: Form,
    S: BuildHasher + Default + 'static,
{
    const SHAPE: &'static Shape = &const {
        Shape::of::<HashMap<K, V, S>>(
            "HashMap",
            Def::Map(MapDef::new(
                K::SHAPE,
                V::SHAPE,
                hashmap_take::<K, V, S>,
                hashmap_insert::<K, V, S>,
            )),
        )
        .zeroed::<HashMap<K, V, S>>()
    };
}
