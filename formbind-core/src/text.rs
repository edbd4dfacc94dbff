use crate::BoxError;

/// A value that decodes itself from a single piece of text.
///
/// Shapes built with [`crate::Shape::text_decodable`] route every decode
/// through this trait, before any structural handling. The form decoder
/// still enforces that exactly one value and no nested key segments are
/// supplied.
pub trait TextDecodable {
    /// Replaces `self` with the value described by `text`.
    fn decode_text(&mut self, text: &str) -> Result<(), BoxError>;
}

/// Implements [`TextDecodable`] through [`core::str::FromStr`].
#[macro_export]
macro_rules! text_decodable_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::TextDecodable for $ty {
                fn decode_text(&mut self, text: &str) -> Result<(), $crate::BoxError> {
                    *self = text.parse::<$ty>()?;
                    Ok(())
                }
            }
        )*
    };
}
