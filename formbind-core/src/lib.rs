#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod shape;
pub use shape::*;

mod def;
pub use def::*;

mod error;
pub use error::*;

mod text;
pub use text::*;

// `Form` implementations for foreign types
mod impls;

/// A type whose structure can be described to the form decoder.
///
/// Implement this with `#[derive(Form)]` for records. For leaf types that
/// parse themselves from text, implement [`TextDecodable`] and build the
/// shape with [`Shape::text_decodable`]:
///
/// ```
/// use formbind_core::{BoxError, Def, Form, Shape, TextDecodable, UnsupportedKind};
///
/// #[derive(Default)]
/// struct Hex(u32);
///
/// impl TextDecodable for Hex {
///     fn decode_text(&mut self, text: &str) -> Result<(), BoxError> {
///         self.0 = u32::from_str_radix(text.trim_start_matches("0x"), 16)?;
///         Ok(())
///     }
/// }
///
/// impl Form for Hex {
///     const SHAPE: &'static Shape = &const {
///         Shape::of::<Hex>("Hex", Def::Unsupported(UnsupportedKind::Opaque))
///             .text_decodable::<Hex>()
///             .zeroed::<Hex>()
///     };
/// }
///
/// assert!(Hex::SHAPE.text.is_some());
/// ```
pub trait Form: 'static {
    /// The shape of this type.
    const SHAPE: &'static Shape;
}

/// Returns the shape of `T`.
///
/// Usable as a `fn() -> &'static Shape`, which is how record fields refer to
/// their types without forcing the shapes to be evaluated eagerly.
pub const fn shape_of<T: Form>() -> &'static Shape {
    T::SHAPE
}

/// Builds the zero value of `T` through its shape.
///
/// Returns `None` when the shape has no zero constructor.
pub fn zero_of<T: Form>() -> Option<T> {
    let zero = T::SHAPE.zero()?;
    zero.downcast::<T>().ok().map(|boxed| *boxed)
}
