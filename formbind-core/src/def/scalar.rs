use core::any::Any;

use super::downcast_mut;
use crate::AssignError;

/// Writes a converted scalar into an erased value.
pub type ScalarSetFn<V> = fn(target: &mut dyn Any, value: V) -> Result<(), AssignError>;

/// Definition of a leaf value, by numeric family.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum ScalarDef {
    /// `bool`
    Bool(BoolDef),
    /// `i8` through `i128`, `isize`
    Signed(SignedDef),
    /// `u8` through `u128`, `usize`
    Unsigned(UnsignedDef),
    /// `f32`, `f64`
    Float(FloatDef),
    /// `String` and friends
    Str(StrDef),
}

/// Booleans
#[derive(Clone, Copy, Debug)]
pub struct BoolDef {
    /// Stores a boolean
    pub set: ScalarSetFn<bool>,
}

impl BoolDef {
    /// Definition for `T`
    pub const fn of<T: From<bool> + 'static>() -> Self {
        Self {
            set: set_converted::<T, bool>,
        }
    }
}

/// Signed integers of a given width
#[derive(Clone, Copy, Debug)]
pub struct SignedDef {
    /// Width in bits
    pub bits: u32,
    /// Stores a value, narrowing from `i128`
    pub set: ScalarSetFn<i128>,
}

impl SignedDef {
    /// Definition for `T`
    pub const fn of<T: TryFrom<i128> + 'static>() -> Self {
        Self {
            bits: bits_of::<T>(),
            set: set_converted::<T, i128>,
        }
    }
}

/// Unsigned integers of a given width
#[derive(Clone, Copy, Debug)]
pub struct UnsignedDef {
    /// Width in bits
    pub bits: u32,
    /// Stores a value, narrowing from `u128`
    pub set: ScalarSetFn<u128>,
}

impl UnsignedDef {
    /// Definition for `T`
    pub const fn of<T: TryFrom<u128> + 'static>() -> Self {
        Self {
            bits: bits_of::<T>(),
            set: set_converted::<T, u128>,
        }
    }
}

/// Floating point numbers of a given width
#[derive(Clone, Copy, Debug)]
pub struct FloatDef {
    /// Width in bits
    pub bits: u32,
    /// Stores a value, narrowing from `f64`
    pub set: ScalarSetFn<f64>,
}

impl FloatDef {
    /// `f32`: finite values that overflow the narrower width are out of range.
    pub const F32: Self = Self {
        bits: 32,
        set: set_f32,
    };

    /// `f64`
    pub const F64: Self = Self {
        bits: 64,
        set: set_converted::<f64, f64>,
    };
}

/// Strings, stored verbatim
#[derive(Clone, Copy, Debug)]
pub struct StrDef {
    /// Stores a string
    pub set: ScalarSetFn<String>,
    /// Builds a fresh, boxed value from a string (used for map keys)
    pub from_string: fn(String) -> Box<dyn Any>,
}

impl StrDef {
    /// Definition for `T`
    pub const fn of<T: From<String> + 'static>() -> Self {
        Self {
            set: set_converted::<T, String>,
            from_string: box_from_string::<T>,
        }
    }
}

const fn bits_of<T>() -> u32 {
    (core::mem::size_of::<T>() * 8) as u32
}

fn set_converted<T: TryFrom<V> + 'static, V>(target: &mut dyn Any, value: V) -> Result<(), AssignError> {
    let slot = downcast_mut::<T>(target)?;
    *slot = T::try_from(value).map_err(|_| AssignError::OutOfRange)?;
    Ok(())
}

fn set_f32(target: &mut dyn Any, value: f64) -> Result<(), AssignError> {
    let slot = downcast_mut::<f32>(target)?;
    let narrowed = value as f32;
    if value.is_finite() && narrowed.is_infinite() {
        return Err(AssignError::OutOfRange);
    }
    *slot = narrowed;
    Ok(())
}

fn box_from_string<T: From<String> + 'static>(s: String) -> Box<dyn Any> {
    Box::new(T::from(s))
}
