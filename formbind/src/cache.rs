//! Field tables for record shapes, built once per type and shared.
//!
//! Lookups take a read lock. A miss builds the table without holding any
//! lock and then publishes it under a short write lock; if another thread
//! got there first, its table wins and ours is dropped.

use core::any::TypeId;
use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use formbind_core::{FieldDef, FieldFlags, Shape};
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::{DecodeError, Route};

/// Cache of [`FieldTable`]s, keyed by record type.
///
/// Most callers use [`ShapeCache::global`]. A separate instance can be handed
/// to a [`Decoder`](crate::Decoder) to keep its tables apart, such as in tests.
pub struct ShapeCache {
    tables: RwLock<HashMap<TypeId, Arc<FieldTable>>>,
}

static GLOBAL: OnceLock<ShapeCache> = OnceLock::new();

impl ShapeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        ShapeCache {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static ShapeCache {
        GLOBAL.get_or_init(ShapeCache::new)
    }

    /// Returns the published table for `shape`, if any.
    pub fn get(&self, shape: &'static Shape) -> Option<Arc<FieldTable>> {
        self.tables.read().get(&shape.id()).cloned()
    }

    /// Builds the field table of a record shape. Does not touch any cache.
    pub fn build(shape: &'static Shape) -> Result<FieldTable, DecodeError> {
        FieldTable::build(shape)
    }

    /// Publishes `table` unless a table for the same shape is already there.
    /// Returns whichever table ended up in the cache.
    pub fn publish(&self, table: FieldTable) -> Arc<FieldTable> {
        let id = table.shape.id();
        let mut tables = self.tables.write();
        let published = tables.entry(id).or_insert_with(|| {
            debug!(shape = %table.shape, fields = table.len(), "publishing field table");
            Arc::new(table)
        });
        Arc::clone(published)
    }

    /// Returns the table for `shape`, building and publishing it on first use.
    pub fn resolve(&self, shape: &'static Shape) -> Result<Arc<FieldTable>, DecodeError> {
        if let Some(table) = self.get(shape) {
            return Ok(table);
        }
        debug!(shape = %shape, "field table miss");
        let table = Self::build(shape)?;
        Ok(self.publish(table))
    }

    /// Number of published tables.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Returns true if nothing has been published yet.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Drops every published table. Tables already handed out stay valid.
    pub fn clear(&self) {
        self.tables.write().clear();
    }
}

impl Default for ShapeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeCache")
            .field("tables", &self.len())
            .finish()
    }
}

/// The decodable fields of one record type, by external name.
pub struct FieldTable {
    shape: &'static Shape,
    fields: IndexMap<&'static str, FieldEntry>,
}

/// One decodable field: where it lives and how to decode into it.
#[derive(Clone)]
pub struct FieldEntry {
    pub(crate) index: usize,
    pub(crate) field: &'static FieldDef,
    pub(crate) route: Route,
}

impl FieldTable {
    fn build(shape: &'static Shape) -> Result<FieldTable, DecodeError> {
        let Some(record) = shape.as_record() else {
            return Err(DecodeError::invalid_shape(
                shape,
                "target must be a record".to_string(),
            ));
        };
        let declared: &'static [FieldDef] = record.fields;

        let mut fields = IndexMap::with_capacity(declared.len());
        for (index, field) in declared.iter().enumerate() {
            if !field.flags.contains(FieldFlags::EXPORTED)
                && !field.flags.contains(FieldFlags::ANONYMOUS)
            {
                continue;
            }
            let name = external_name(field);
            if name == "-" {
                continue;
            }

            let route = Route::plan(field.shape()).map_err(|err| {
                DecodeError::invalid_shape(shape, format!("field `{}`: {err}", field.name))
            })?;
            // a later field with the same name replaces an earlier one
            fields.insert(name, FieldEntry { index, field, route });
        }

        debug!(shape = %shape, fields = fields.len(), "built field table");
        Ok(FieldTable { shape, fields })
    }

    /// The record shape this table describes.
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Looks up a field by external name.
    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.get(name)
    }

    /// External names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Number of decodable fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no decodable fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for FieldTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTable")
            .field("shape", &format_args!("{}", self.shape))
            .field("fields", &self.fields)
            .finish()
    }
}

impl FieldEntry {
    /// Position of the field in [`RecordDef::fields`](formbind_core::RecordDef::fields).
    pub fn index(&self) -> usize {
        self.index
    }

    /// The field's declaration.
    pub fn field(&self) -> &'static FieldDef {
        self.field
    }

    /// The decode route for the field's type.
    pub fn route(&self) -> &Route {
        &self.route
    }
}

impl fmt::Debug for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {:?}", self.index, self.field.name, self.route)
    }
}

/// `#[form(rename)]`, then `#[serde(rename)]` up to its first comma, then
/// the declared name.
fn external_name(field: &'static FieldDef) -> &'static str {
    if let Some(rename) = field.rename.filter(|rename| !rename.is_empty()) {
        return rename;
    }
    if let Some(rename) = field.serde_rename {
        let rename = rename.split_once(',').map_or(rename, |(name, _)| name);
        if !rename.is_empty() {
            return rename;
        }
    }
    field.name
}
