//! Stable type index handle.
//!
//! `TypeIdx` is the canonical way to refer to a type owned by a
//! [`TypeSystemContext`](crate::TypeSystemContext). Well-known definitions
//! and the two canonical placeholders occupy fixed indices, so common
//! lookups are O(1) array accesses and the same index means the same
//! well-known type in every context.

use std::fmt;

/// A 32-bit index into a context's type table.
///
/// Indices below [`TypeIdx::FIRST_DYNAMIC`] are reserved: they name the
/// well-known definitions and the canonical placeholders, pre-built at
/// context construction. Equality is index comparison; an index is only
/// meaningful together with the context that issued it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeIdx(u32);

impl TypeIdx {
    // === Well-Known Definitions (indices 0-15) ===
    // Pre-built at context construction, in this order.

    /// `System.Object`, the root reference type.
    pub const OBJECT: Self = Self(0);
    /// `System.ValueType`, the base of all value types.
    pub const VALUE_TYPE: Self = Self(1);
    /// `System.String`.
    pub const STRING: Self = Self(2);
    /// `System.Void`.
    pub const VOID: Self = Self(3);
    /// `System.Boolean`.
    pub const BOOL: Self = Self(4);
    /// `System.Char`.
    pub const CHAR: Self = Self(5);
    /// `System.SByte` (8-bit signed integer).
    pub const SBYTE: Self = Self(6);
    /// `System.Byte` (8-bit unsigned integer).
    pub const BYTE: Self = Self(7);
    /// `System.Int16`.
    pub const INT16: Self = Self(8);
    /// `System.UInt16`.
    pub const UINT16: Self = Self(9);
    /// `System.Int32`.
    pub const INT32: Self = Self(10);
    /// `System.UInt32`.
    pub const UINT32: Self = Self(11);
    /// `System.Int64`.
    pub const INT64: Self = Self(12);
    /// `System.UInt64`.
    pub const UINT64: Self = Self(13);
    /// `System.Single` (32-bit floating point).
    pub const SINGLE: Self = Self(14);
    /// `System.Double` (64-bit floating point).
    pub const DOUBLE: Self = Self(15);

    // === Canonical Placeholders (indices 16-17) ===
    // Not definitions: they stand in for "some type" in shared generic code.

    /// `System.__Canon`, the specific canonical placeholder.
    pub const CANON: Self = Self(16);
    /// `System.__UniversalCanon`, the universal canonical placeholder.
    pub const UNIVERSAL_CANON: Self = Self(17);

    // === Reserved Range (18-31) ===
    // Reserved for future pre-built types.

    /// First index available for dynamically created types.
    pub const FIRST_DYNAMIC: u32 = 32;

    /// Number of pre-built well-known definitions (placeholders excluded).
    pub const WELL_KNOWN_COUNT: u32 = 16;

    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index is valid in its owning context.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the value as a table offset.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this index names a pre-built well-known definition.
    #[inline]
    pub const fn is_well_known(self) -> bool {
        self.0 < Self::WELL_KNOWN_COUNT
    }

    /// Check if this index names one of the two canonical placeholders.
    #[inline]
    pub const fn is_canonical(self) -> bool {
        self.0 == Self::CANON.0 || self.0 == Self::UNIVERSAL_CANON.0
    }

    /// Get the name for pre-built types.
    ///
    /// Returns `None` for dynamic indices, which need their owning context
    /// to render a name.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("System.Object"),
            1 => Some("System.ValueType"),
            2 => Some("System.String"),
            3 => Some("System.Void"),
            4 => Some("System.Boolean"),
            5 => Some("System.Char"),
            6 => Some("System.SByte"),
            7 => Some("System.Byte"),
            8 => Some("System.Int16"),
            9 => Some("System.UInt16"),
            10 => Some("System.Int32"),
            11 => Some("System.UInt32"),
            12 => Some("System.Int64"),
            13 => Some("System.UInt64"),
            14 => Some("System.Single"),
            15 => Some("System.Double"),
            16 => Some("System.__Canon"),
            17 => Some("System.__UniversalCanon"),
            _ => None,
        }
    }
}

impl fmt::Debug for TypeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OBJECT => write!(f, "TypeIdx::OBJECT"),
            Self::VALUE_TYPE => write!(f, "TypeIdx::VALUE_TYPE"),
            Self::STRING => write!(f, "TypeIdx::STRING"),
            Self::VOID => write!(f, "TypeIdx::VOID"),
            Self::BOOL => write!(f, "TypeIdx::BOOL"),
            Self::CHAR => write!(f, "TypeIdx::CHAR"),
            Self::SBYTE => write!(f, "TypeIdx::SBYTE"),
            Self::BYTE => write!(f, "TypeIdx::BYTE"),
            Self::INT16 => write!(f, "TypeIdx::INT16"),
            Self::UINT16 => write!(f, "TypeIdx::UINT16"),
            Self::INT32 => write!(f, "TypeIdx::INT32"),
            Self::UINT32 => write!(f, "TypeIdx::UINT32"),
            Self::INT64 => write!(f, "TypeIdx::INT64"),
            Self::UINT64 => write!(f, "TypeIdx::UINT64"),
            Self::SINGLE => write!(f, "TypeIdx::SINGLE"),
            Self::DOUBLE => write!(f, "TypeIdx::DOUBLE"),
            Self::CANON => write!(f, "TypeIdx::CANON"),
            Self::UNIVERSAL_CANON => write!(f, "TypeIdx::UNIVERSAL_CANON"),
            _ => write!(f, "TypeIdx({})", self.0),
        }
    }
}

impl fmt::Display for TypeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "type#{}", self.0),
        }
    }
}

// Compile-time size assertion: TypeIdx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<TypeIdx>() == 4);
