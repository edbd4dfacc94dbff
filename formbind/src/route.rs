//! Routes: the decode plan for a shape, computed once and stored in the
//! field tables of the [`ShapeCache`](crate::ShapeCache).

use core::any::Any;
use core::fmt;

use formbind_core::{
    BoolDef, Def, FloatDef, ListDef, MapDef, OptionDef, PointerDef, ScalarDef, Shape,
    SignedDef, StrDef, TextDecodeFn, UnsignedDef,
};

use crate::{DecodeError, ShapeCache, leaf, list, map, pointer, record};

/// State shared by every step of decoding one key.
pub(crate) struct Walk<'a> {
    pub(crate) cache: &'a ShapeCache,
    /// The key being decoded, in full. List elements get a synthesized one.
    pub(crate) full_key: &'a str,
}

/// How to decode into a value of a given shape.
///
/// Containers hold the routes of their children, so the shape is inspected
/// once per record field rather than once per key. Records are the exception:
/// they are looked up in the cache when reached, which is what lets record
/// types refer to themselves.
#[derive(Clone)]
pub struct Route {
    pub(crate) shape: &'static Shape,
    pub(crate) kind: RouteKind,
}

#[derive(Clone)]
pub(crate) enum RouteKind {
    Text(TextDecodeFn),
    Bool(BoolDef),
    Signed(SignedDef),
    Unsigned(UnsignedDef),
    Float(FloatDef),
    Str(StrDef),
    Map {
        def: MapDef,
        key: StrDef,
        value: Box<Route>,
    },
    List {
        def: ListDef,
        item: Box<Route>,
    },
    Option {
        def: OptionDef,
        inner: Box<Route>,
    },
    Pointer {
        def: PointerDef,
        pointee: Box<Route>,
    },
    Record,
}

impl Route {
    /// Plans the route for `shape`.
    ///
    /// Fails with an invalid-shape error if the shape, or any shape reachable
    /// from it without going through a record, cannot be decoded into.
    pub fn plan(shape: &'static Shape) -> Result<Route, DecodeError> {
        if let Some(text) = shape.text {
            return Ok(Route::new(shape, RouteKind::Text(text)));
        }

        let kind = match shape.def {
            Def::Scalar(ScalarDef::Bool(def)) => RouteKind::Bool(def),
            Def::Scalar(ScalarDef::Signed(def)) => RouteKind::Signed(def),
            Def::Scalar(ScalarDef::Unsigned(def)) => RouteKind::Unsigned(def),
            Def::Scalar(ScalarDef::Float(def)) => RouteKind::Float(def),
            Def::Scalar(ScalarDef::Str(def)) => RouteKind::Str(def),
            Def::Map(def) => {
                let key = match def.k.def {
                    Def::Scalar(ScalarDef::Str(key)) if def.k.is_string_like() => key,
                    _ => {
                        return Err(DecodeError::invalid_shape(
                            shape,
                            format!("map keys must be strings, not {}", def.k),
                        ));
                    }
                };
                RouteKind::Map {
                    def,
                    key,
                    value: Box::new(Route::plan(def.v)?),
                }
            }
            Def::List(def) => RouteKind::List {
                def,
                item: Box::new(Route::plan(def.t)?),
            },
            Def::Option(def) => RouteKind::Option {
                def,
                inner: Box::new(Route::plan(def.t)?),
            },
            Def::Pointer(def) => RouteKind::Pointer {
                def,
                pointee: Box::new(Route::plan(def.pointee)?),
            },
            Def::Record(_) => RouteKind::Record,
            Def::Unsupported(kind) => {
                return Err(DecodeError::invalid_shape(
                    shape,
                    format!("{kind} types are not supported"),
                ));
            }
            _ => {
                return Err(DecodeError::invalid_shape(
                    shape,
                    "unknown kind of shape".to_string(),
                ));
            }
        };
        Ok(Route::new(shape, kind))
    }

    fn new(shape: &'static Shape, kind: RouteKind) -> Self {
        Route { shape, kind }
    }

    /// The shape this route decodes into.
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Decodes `values`, addressed by the unconsumed key `tail`, into `target`.
    ///
    /// This is the only place decoders recurse through.
    pub(crate) fn decode(
        &self,
        walk: &Walk<'_>,
        tail: &str,
        values: &[String],
        target: &mut dyn Any,
    ) -> Result<(), DecodeError> {
        let shape = self.shape;
        match &self.kind {
            RouteKind::Text(text) => leaf::decode_text(walk, tail, values, target, shape, *text),
            RouteKind::Bool(def) => leaf::decode_bool(walk, tail, values, target, shape, def),
            RouteKind::Signed(def) => leaf::decode_signed(walk, tail, values, target, shape, def),
            RouteKind::Unsigned(def) => {
                leaf::decode_unsigned(walk, tail, values, target, shape, def)
            }
            RouteKind::Float(def) => leaf::decode_float(walk, tail, values, target, shape, def),
            RouteKind::Str(def) => leaf::decode_str(walk, tail, values, target, shape, def),
            RouteKind::Map { def, key, value } => {
                map::decode_map(walk, tail, values, target, shape, def, key, value)
            }
            RouteKind::List { def, item } => {
                list::decode_list(walk, tail, values, target, shape, def, item)
            }
            RouteKind::Option { def, inner } => {
                pointer::decode_option(walk, tail, values, target, shape, def, inner)
            }
            RouteKind::Pointer { def, pointee } => {
                pointer::decode_pointer(walk, tail, values, target, shape, def, pointee)
            }
            RouteKind::Record => record::decode_record(walk, tail, values, target, shape),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RouteKind::Text(_) => write!(f, "Text({})", self.shape),
            RouteKind::Bool(_) => f.write_str("Bool"),
            RouteKind::Signed(def) => write!(f, "Signed({})", def.bits),
            RouteKind::Unsigned(def) => write!(f, "Unsigned({})", def.bits),
            RouteKind::Float(def) => write!(f, "Float({})", def.bits),
            RouteKind::Str(_) => write!(f, "Str({})", self.shape),
            RouteKind::Map { value, .. } => write!(f, "Map({value:?})"),
            RouteKind::List { item, .. } => write!(f, "List({item:?})"),
            RouteKind::Option { inner, .. } => write!(f, "Option({inner:?})"),
            RouteKind::Pointer { pointee, .. } => write!(f, "Pointer({pointee:?})"),
            RouteKind::Record => write!(f, "Record({})", self.shape),
        }
    }
}
