use core::any::{Any, TypeId};
use core::fmt;

use crate::{AssignError, Def, RecordDef, ScalarDef, TextDecodable};

/// Constructs the zero value of a shape, boxed and type-erased.
///
/// Returns `None` when the type has no zero value.
pub type ZeroFn = fn() -> Option<Box<dyn Any>>;

/// Decodes text into an existing value, in place.
pub type TextDecodeFn = fn(target: &mut dyn Any, text: &str) -> Result<(), AssignError>;

/// Schema for a decodable type.
///
/// Shapes are built in `const` context and live in static memory; nothing in
/// a shape is ever mutated.
#[derive(Clone, Copy)]
pub struct Shape {
    /// Identity of the described type, used as the cache key for record tables.
    pub id: fn() -> TypeId,

    /// Short name of the type, without module path or generic parameters.
    pub type_identifier: &'static str,

    /// Full name of the type, as reported by [`core::any::type_name`].
    pub type_name: fn() -> &'static str,

    /// What the type looks like structurally.
    pub def: Def,

    /// Text decoding capability. Takes precedence over [`Shape::def`].
    pub text: Option<TextDecodeFn>,

    /// Builds the zero value used when an optional, map entry or list
    /// element has to be allocated.
    pub zero: ZeroFn,
}

impl Shape {
    /// Creates a shape for `T` with no text capability and no zero value.
    pub const fn of<T: 'static>(type_identifier: &'static str, def: Def) -> Self {
        Shape {
            id: TypeId::of::<T>,
            type_identifier,
            type_name: core::any::type_name::<T>,
            def,
            text: None,
            zero: no_zero,
        }
    }

    /// Uses `T::default()` as the zero value.
    pub const fn zeroed<T: Default + 'static>(self) -> Self {
        Shape {
            zero: zero_default::<T>,
            ..self
        }
    }

    /// Uses a custom zero constructor.
    pub const fn with_zero(self, zero: ZeroFn) -> Self {
        Shape { zero, ..self }
    }

    /// Routes decoding through `T`'s [`TextDecodable`] implementation.
    pub const fn text_decodable<T: TextDecodable + 'static>(self) -> Self {
        Shape {
            text: Some(decode_text::<T>),
            ..self
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline]
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// Returns the full type name of the described type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Returns true if this shape describes `T`.
    #[inline]
    pub fn is_type<T: 'static>(&self) -> bool {
        self.id() == TypeId::of::<T>()
    }

    /// Builds a fresh zero value, if the type has one.
    #[inline]
    pub fn zero(&self) -> Option<Box<dyn Any>> {
        (self.zero)()
    }

    /// Returns the record definition, if this shape is a record.
    pub fn as_record(&self) -> Option<&RecordDef> {
        match &self.def {
            Def::Record(rd) => Some(rd),
            _ => None,
        }
    }

    /// Returns true if this shape can serve as a map key: a string-like
    /// scalar without a text capability of its own.
    pub fn is_string_like(&self) -> bool {
        self.text.is_none() && matches!(self.def, Def::Scalar(ScalarDef::Str(_)))
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Shape {}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short_type_name(f, self.type_name())
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_identifier", &self.type_identifier)
            .field("def", &self.def)
            .field("text", &self.text.is_some())
            .finish_non_exhaustive()
    }
}

/// Writes a type name with every path prefix stripped, so that
/// `alloc::vec::Vec<core::option::Option<my::Thing>>` reads `Vec<Option<Thing>>`.
fn write_short_type_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let mut segment_start = 0;
    for (i, c) in name.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            continue;
        }
        write_last_segment(f, &name[segment_start..i])?;
        write!(f, "{c}")?;
        segment_start = i + c.len_utf8();
    }
    write_last_segment(f, &name[segment_start..])
}

fn write_last_segment(f: &mut fmt::Formatter<'_>, path: &str) -> fmt::Result {
    let last = path.rsplit("::").next().unwrap_or(path);
    f.write_str(last)
}

fn no_zero() -> Option<Box<dyn Any>> {
    None
}

fn zero_default<T: Default + 'static>() -> Option<Box<dyn Any>> {
    Some(Box::new(T::default()))
}

fn decode_text<T: TextDecodable + 'static>(target: &mut dyn Any, text: &str) -> Result<(), AssignError> {
    let target = target
        .downcast_mut::<T>()
        .ok_or_else(AssignError::type_mismatch::<T>)?;
    target.decode_text(text).map_err(AssignError::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Form;

    #[test]
    fn display_strips_paths() {
        formbind_testhelpers::setup();

        assert_eq!(<Option<u8> as Form>::SHAPE.to_string(), "Option<u8>");
        assert_eq!(
            <(Option<String>, [u8; 4]) as Form>::SHAPE.to_string(),
            "(Option<String>, [u8; 4])"
        );
    }

    #[test]
    fn shapes_compare_by_type() {
        formbind_testhelpers::setup();

        assert_eq!(<u8 as Form>::SHAPE, <u8 as Form>::SHAPE);
        assert_ne!(<u8 as Form>::SHAPE, <i8 as Form>::SHAPE);
        assert!(<String as Form>::SHAPE.is_type::<String>());
    }

    #[test]
    fn string_like_shapes() {
        formbind_testhelpers::setup();

        assert!(<String as Form>::SHAPE.is_string_like());
        assert!(<Box<str> as Form>::SHAPE.is_string_like());
        assert!(<std::sync::Arc<str> as Form>::SHAPE.is_string_like());
        assert!(!<i32 as Form>::SHAPE.is_string_like());
        assert!(!<char as Form>::SHAPE.is_string_like());
    }

    #[test]
    fn zero_values() {
        formbind_testhelpers::setup();

        assert_eq!(crate::zero_of::<u32>(), Some(0));
        assert_eq!(crate::zero_of::<Option<String>>(), Some(None));
        assert_eq!(crate::zero_of::<Box<i8>>(), Some(Box::new(0)));
        assert!(crate::zero_of::<(u8, u8)>().is_none());
    }
}
