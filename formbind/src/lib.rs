#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

// The derive names items through `::formbind`, which includes our own tests.
extern crate self as formbind;

#[macro_use]
mod tracing_macros;

pub use formbind_core::*;

pub use formbind_macros::Form;

mod error;
pub use error::{DecodeError, DecodeErrorKind, SyntaxErrorKind};

mod cache;
pub use cache::{FieldEntry, FieldTable, ShapeCache};

mod route;
pub use route::Route;

mod values;
pub use values::FormValues;

mod decoder;
pub use decoder::{Decoder, decode_into, from_str, from_values};

mod keypath;

mod leaf;
mod list;
mod map;
mod pointer;
mod record;
