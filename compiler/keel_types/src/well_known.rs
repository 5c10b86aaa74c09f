//! Well-known type definitions.
//!
//! The compiler needs direct handles to a small set of runtime types: the
//! root reference type, the base of value types, and the primitives. Every
//! [`TypeSystemContext`](crate::TypeSystemContext) pre-builds exactly these
//! definitions, in [`WellKnownType::ALL`] order, so `WellKnownType` and the
//! fixed [`TypeIdx`] constants are two spellings of the same identity.

use crate::flags::TypeFlags;
use crate::idx::TypeIdx;

/// Identity of a pre-built runtime type definition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum WellKnownType {
    /// `System.Object`, the root reference type.
    Object,
    /// `System.ValueType`, the base of all value types.
    ValueType,
    /// `System.String`.
    String,
    /// `System.Void`.
    Void,
    /// `System.Boolean`.
    Bool,
    /// `System.Char`.
    Char,
    /// `System.SByte`.
    SByte,
    /// `System.Byte`.
    Byte,
    /// `System.Int16`.
    Int16,
    /// `System.UInt16`.
    UInt16,
    /// `System.Int32`.
    Int32,
    /// `System.UInt32`.
    UInt32,
    /// `System.Int64`.
    Int64,
    /// `System.UInt64`.
    UInt64,
    /// `System.Single`.
    Single,
    /// `System.Double`.
    Double,
}

impl WellKnownType {
    /// Every well-known definition, in table order. Context construction
    /// builds the definition table by iterating this array, so position `i`
    /// here is index `i` in every context.
    pub const ALL: [Self; 16] = [
        Self::Object,
        Self::ValueType,
        Self::String,
        Self::Void,
        Self::Bool,
        Self::Char,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Single,
        Self::Double,
    ];

    /// The fixed index of this definition in every context.
    #[inline]
    pub const fn idx(self) -> TypeIdx {
        match self {
            Self::Object => TypeIdx::OBJECT,
            Self::ValueType => TypeIdx::VALUE_TYPE,
            Self::String => TypeIdx::STRING,
            Self::Void => TypeIdx::VOID,
            Self::Bool => TypeIdx::BOOL,
            Self::Char => TypeIdx::CHAR,
            Self::SByte => TypeIdx::SBYTE,
            Self::Byte => TypeIdx::BYTE,
            Self::Int16 => TypeIdx::INT16,
            Self::UInt16 => TypeIdx::UINT16,
            Self::Int32 => TypeIdx::INT32,
            Self::UInt32 => TypeIdx::UINT32,
            Self::Int64 => TypeIdx::INT64,
            Self::UInt64 => TypeIdx::UINT64,
            Self::Single => TypeIdx::SINGLE,
            Self::Double => TypeIdx::DOUBLE,
        }
    }

    /// Look up the well-known definition at `idx`, if any.
    #[inline]
    pub const fn from_idx(idx: TypeIdx) -> Option<Self> {
        match idx.raw() {
            0 => Some(Self::Object),
            1 => Some(Self::ValueType),
            2 => Some(Self::String),
            3 => Some(Self::Void),
            4 => Some(Self::Bool),
            5 => Some(Self::Char),
            6 => Some(Self::SByte),
            7 => Some(Self::Byte),
            8 => Some(Self::Int16),
            9 => Some(Self::UInt16),
            10 => Some(Self::Int32),
            11 => Some(Self::UInt32),
            12 => Some(Self::Int64),
            13 => Some(Self::UInt64),
            14 => Some(Self::Single),
            15 => Some(Self::Double),
            _ => None,
        }
    }

    /// The runtime name of this definition.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Object => "System.Object",
            Self::ValueType => "System.ValueType",
            Self::String => "System.String",
            Self::Void => "System.Void",
            Self::Bool => "System.Boolean",
            Self::Char => "System.Char",
            Self::SByte => "System.SByte",
            Self::Byte => "System.Byte",
            Self::Int16 => "System.Int16",
            Self::UInt16 => "System.UInt16",
            Self::Int32 => "System.Int32",
            Self::UInt32 => "System.UInt32",
            Self::Int64 => "System.Int64",
            Self::UInt64 => "System.UInt64",
            Self::Single => "System.Single",
            Self::Double => "System.Double",
        }
    }

    /// The category flags of this definition.
    ///
    /// `ValueType` itself is a class: it is the reference-typed base that
    /// value types derive from, not a value type.
    #[inline]
    pub const fn category_flags(self) -> TypeFlags {
        match self {
            Self::Object | Self::ValueType | Self::String => TypeFlags::IS_CLASS,
            Self::Void => TypeFlags::IS_VALUE_TYPE,
            _ => TypeFlags::IS_VALUE_TYPE.union(TypeFlags::IS_PRIMITIVE),
        }
    }

    /// The base definition, or `None` for the root.
    #[inline]
    pub const fn base(self) -> Option<TypeIdx> {
        match self {
            Self::Object => None,
            Self::ValueType | Self::String => Some(TypeIdx::OBJECT),
            _ => Some(TypeIdx::VALUE_TYPE),
        }
    }

    /// Check if this is one of the primitive definitions.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.category_flags().is_primitive()
    }
}

#[cfg(test)]
mod tests;
