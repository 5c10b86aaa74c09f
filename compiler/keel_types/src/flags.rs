//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once when a type definition is built and cached
//! on it, enabling O(1) category queries without walking base chains.
//!
//! Flags are organized into two ranges:
//! - **Category flags**: what kind of type is this? Exactly the bits covered
//!   by [`TypeFlags::CATEGORY_MASK`]; every type answers these.
//! - **Attribute flags**: properties derived from field and method layout.
//!   Canonical placeholders cannot answer these (their layout depends on the
//!   concrete instantiation), which is what makes a flags query on them
//!   fallible.

use bitflags::bitflags;

bitflags! {
    /// Cached type properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Category Flags (bits 0-7) ===
        // Mutually exclusive kinds, except that primitives are also
        // value types.

        /// Value type: instances are stored inline, not behind a reference.
        const IS_VALUE_TYPE = 1 << 0;
        /// Built-in primitive (bool, char, the numeric types).
        const IS_PRIMITIVE = 1 << 1;
        /// Reference type with a class definition.
        const IS_CLASS = 1 << 2;
        /// Interface definition.
        const IS_INTERFACE = 1 << 3;

        // === Attribute Flags (bits 8-15) ===
        // Derived from member layout when a definition is completed.
        // Never set on canonical placeholders.

        /// Type has a static constructor that must run before first use.
        const HAS_STATIC_CONSTRUCTOR = 1 << 8;
        /// Type has a finalizer the GC must honor.
        const HAS_FINALIZER = 1 << 9;
        /// Instance layout contains GC-tracked pointers.
        const CONTAINS_GC_POINTERS = 1 << 10;
    }
}

impl TypeFlags {
    /// All category bits. A flags query that intersects this mask is asking
    /// what kind of type it is addressing.
    pub const CATEGORY_MASK: Self = Self::from_bits_truncate(
        Self::IS_VALUE_TYPE.bits()
            | Self::IS_PRIMITIVE.bits()
            | Self::IS_CLASS.bits()
            | Self::IS_INTERFACE.bits(),
    );

    /// The category bits of this flag set.
    #[inline]
    pub const fn category(self) -> Self {
        self.intersection(Self::CATEGORY_MASK)
    }

    /// Check if the flags mark a value type.
    #[inline]
    pub const fn is_value_type(self) -> bool {
        self.contains(Self::IS_VALUE_TYPE)
    }

    /// Check if the flags mark a primitive.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.contains(Self::IS_PRIMITIVE)
    }

    /// Check if the flags mark a class (reference) type.
    #[inline]
    pub const fn is_class(self) -> bool {
        self.contains(Self::IS_CLASS)
    }

    /// Check if the flags mark an interface.
    #[inline]
    pub const fn is_interface(self) -> bool {
        self.contains(Self::IS_INTERFACE)
    }
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}
