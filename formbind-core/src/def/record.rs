use core::any::Any;
use core::fmt;

use crate::Shape;

/// Borrows one field of an erased record, or `None` if the record is not of
/// the expected type.
pub type FieldGetMutFn = fn(record: &mut dyn Any) -> Option<&mut dyn Any>;

/// Describes a struct and its fields, in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct RecordDef {
    /// Fields, in declaration order. `#[derive(Form)]` leaves out skipped
    /// and private named fields.
    pub fields: &'static [FieldDef],
}

impl RecordDef {
    /// Construct a `RecordDef`.
    pub const fn new(fields: &'static [FieldDef]) -> Self {
        Self { fields }
    }
}

/// Describes a field of a record
#[derive(Clone, Copy)]
pub struct FieldDef {
    /// Declared identifier (`"0"`, `"1"`, .. for tuple structs)
    pub name: &'static str,

    /// Name given by `#[form(rename = "..")]`
    pub rename: Option<&'static str>,

    /// Name given by `#[serde(rename = "..")]`
    pub serde_rename: Option<&'static str>,

    /// Visibility and embedding flags
    pub flags: FieldFlags,

    /// Shape of the field's type, resolved lazily so records may refer to
    /// themselves.
    pub shape: fn() -> &'static Shape,

    /// cf. [`FieldGetMutFn`]
    pub get_mut: FieldGetMutFn,
}

impl FieldDef {
    /// A field with no annotations and no flags.
    pub const fn new(name: &'static str, shape: fn() -> &'static Shape, get_mut: FieldGetMutFn) -> Self {
        Self {
            name,
            rename: None,
            serde_rename: None,
            flags: FieldFlags::EMPTY,
            shape,
            get_mut,
        }
    }

    /// Sets the `form` rename annotation.
    pub const fn rename(mut self, rename: &'static str) -> Self {
        self.rename = Some(rename);
        self
    }

    /// Sets the `serde` rename annotation.
    pub const fn serde_rename(mut self, rename: &'static str) -> Self {
        self.serde_rename = Some(rename);
        self
    }

    /// Sets the flags.
    pub const fn flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns the shape of the field's type.
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("rename", &self.rename)
            .field("serde_rename", &self.serde_rename)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Flags attached to a [`FieldDef`]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldFlags(u8);

impl FieldFlags {
    /// No flags
    pub const EMPTY: Self = Self(0);

    /// The field is `pub`
    pub const EXPORTED: Self = Self(1 << 0);

    /// The field has no name of its own (tuple struct fields)
    pub const ANONYMOUS: Self = Self(1 << 1);

    /// Both sets of flags.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if every flag of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl fmt::Debug for FieldFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.contains(Self::EXPORTED) {
            set.entry(&"EXPORTED");
        }
        if self.contains(Self::ANONYMOUS) {
            set.entry(&"ANONYMOUS");
        }
        set.finish()
    }
}
