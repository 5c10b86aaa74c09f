//! Canonical placeholder types for shared generic code.
//!
//! Ahead-of-time compilation cannot emit a method body per generic
//! instantiation, so instantiations that share a representation share one
//! compiled body. The placeholders in this module stand in for the type
//! arguments of such shared bodies:
//!
//! - [`CanonKind::Specific`] (`System.__Canon`) replaces arguments that are
//!   reference types. All reference types share one pointer-sized
//!   representation, so one body serves them all.
//! - [`CanonKind::Universal`] (`System.__UniversalCanon`) replaces arguments
//!   that may be any type at all, including value types whose size is
//!   unknown until runtime.
//!
//! Queries against a placeholder answer only what holds for *every* type it
//! could stand for. The specific placeholder is known to be a reference
//! type, so it has a category and a base type. The universal placeholder
//! guarantees nothing, so those queries return
//! [`UnsupportedQuery`] instead of an answer.
//!
//! Placeholders are compared by identity, never by structure: each
//! [`TypeSystemContext`](crate::TypeSystemContext) owns exactly one instance
//! of each, built at context construction.

use std::fmt;

use crate::context::{ContextId, DefType, TypeSystemContext};
use crate::flags::TypeFlags;
use crate::hashing;
use crate::idx::TypeIdx;

/// Canonicalization policy: which placeholder a conversion targets, or how
/// wide a canonical-subtype check casts its net.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CanonicalPolicy {
    /// Canonicalize reference-type arguments only.
    Specific,
    /// Canonicalize every argument, value types included.
    Universal,
    /// Wildcard for lookups: matches either placeholder. Converting a type
    /// under `Any` is a caller bug; only subtype checks accept it.
    Any,
}

impl CanonicalPolicy {
    /// The placeholder this policy converts to, or `None` for the `Any`
    /// wildcard.
    #[inline]
    pub const fn as_kind(self) -> Option<CanonKind> {
        match self {
            Self::Specific => Some(CanonKind::Specific),
            Self::Universal => Some(CanonKind::Universal),
            Self::Any => None,
        }
    }
}

/// The two canonical placeholders.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CanonKind {
    /// `System.__Canon`: stands for any reference type.
    Specific,
    /// `System.__UniversalCanon`: stands for any type whatsoever.
    Universal,
}

impl CanonKind {
    /// The reserved runtime name of this placeholder.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Specific => "System.__Canon",
            Self::Universal => "System.__UniversalCanon",
        }
    }

    /// The policy under which this placeholder is the conversion target.
    #[inline]
    pub const fn policy(self) -> CanonicalPolicy {
        match self {
            Self::Specific => CanonicalPolicy::Specific,
            Self::Universal => CanonicalPolicy::Universal,
        }
    }

    /// The fixed index of this placeholder in every context.
    #[inline]
    pub const fn idx(self) -> TypeIdx {
        match self {
            Self::Specific => TypeIdx::CANON,
            Self::Universal => TypeIdx::UNIVERSAL_CANON,
        }
    }

    /// Look up the placeholder at `idx`, if any.
    #[inline]
    pub const fn from_idx(idx: TypeIdx) -> Option<Self> {
        if idx.raw() == TypeIdx::CANON.raw() {
            Some(Self::Specific)
        } else if idx.raw() == TypeIdx::UNIVERSAL_CANON.raw() {
            Some(Self::Universal)
        } else {
            None
        }
    }
}

/// Check if `name` is reserved for a canonical placeholder.
///
/// Metadata loaders use this to reject user definitions that would collide
/// with `System.__Canon` or `System.__UniversalCanon`.
#[inline]
pub fn is_reserved_type_name(name: &str) -> bool {
    name == CanonKind::Specific.name() || name == CanonKind::Universal.name()
}

/// A canonical placeholder instance, owned by one context.
///
/// Not `Clone` and deliberately without `PartialEq`: placeholders are
/// compared by address. Two references to the same context's placeholder
/// are `std::ptr::eq`; placeholders from different contexts never compare
/// equal even though they print the same name.
#[derive(Debug)]
pub struct CanonType {
    kind: CanonKind,
    owner: ContextId,
    /// Hash of the reserved name, computed once at construction. Matches
    /// [`hashing::name_hash`] of [`CanonKind::name`].
    name_hash: u32,
}

impl CanonType {
    pub(crate) fn new(kind: CanonKind, owner: ContextId) -> Self {
        Self {
            kind,
            owner,
            name_hash: hashing::name_hash(kind.name()),
        }
    }

    /// Which placeholder this is.
    #[inline]
    pub const fn kind(&self) -> CanonKind {
        self.kind
    }

    /// The reserved runtime name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The stable hash of the reserved name.
    #[inline]
    pub const fn name_hash(&self) -> u32 {
        self.name_hash
    }

    /// The context this instance belongs to.
    #[inline]
    pub const fn owner(&self) -> ContextId {
        self.owner
    }

    /// Check if this placeholder is matched by `policy`.
    ///
    /// Each placeholder matches its own policy; [`CanonicalPolicy::Any`]
    /// matches both.
    #[inline]
    pub fn is_canonical_subtype(&self, policy: CanonicalPolicy) -> bool {
        matches!(
            (self.kind, policy),
            (
                CanonKind::Specific,
                CanonicalPolicy::Specific | CanonicalPolicy::Any
            ) | (
                CanonKind::Universal,
                CanonicalPolicy::Universal | CanonicalPolicy::Any
            )
        )
    }

    /// Convert to canonical form under `policy`.
    ///
    /// A placeholder is already canonical, so this returns `self`. Asking
    /// for a different policy's form, or converting under
    /// [`CanonicalPolicy::Any`], is a caller bug caught by a debug
    /// assertion.
    #[inline]
    pub fn to_canonical(&self, policy: CanonicalPolicy) -> &Self {
        debug_assert_eq!(
            policy.as_kind(),
            Some(self.kind),
            "{self} cannot convert under policy {policy:?}"
        );
        self
    }

    /// Query cached type flags for the bits in `mask`.
    ///
    /// The specific placeholder answers category queries with
    /// [`TypeFlags::IS_CLASS`]; any other requested bit comes back unset.
    /// A mask without category bits is a caller bug caught by a debug
    /// assertion. The universal placeholder refuses every mask.
    pub fn type_flags(&self, mask: TypeFlags) -> Result<TypeFlags, UnsupportedQuery> {
        match self.kind {
            CanonKind::Specific => {
                debug_assert!(
                    mask.intersects(TypeFlags::CATEGORY_MASK),
                    "flags query on {self} answers only category bits"
                );
                let mut flags = TypeFlags::empty();
                if mask.intersects(TypeFlags::CATEGORY_MASK) {
                    flags |= TypeFlags::IS_CLASS;
                }
                Ok(flags)
            }
            CanonKind::Universal => Err(UnsupportedQuery::TypeFlags { kind: self.kind }),
        }
    }

    /// Resolve the base type against the owning context.
    ///
    /// The specific placeholder is some reference type, so its base is the
    /// context's root reference type. The universal placeholder may stand
    /// for a value type and has no usable base. Passing a context other
    /// than the owner is a caller bug caught by a debug assertion.
    pub fn base_type<'ctx>(
        &self,
        context: &'ctx TypeSystemContext,
    ) -> Result<&'ctx DefType, UnsupportedQuery> {
        debug_assert_eq!(
            self.owner,
            context.id(),
            "base type of {self} resolved against a foreign context"
        );
        match self.kind {
            CanonKind::Specific => Ok(context.root_reference_type()),
            CanonKind::Universal => Err(UnsupportedQuery::BaseType { kind: self.kind }),
        }
    }
}

impl fmt::Display for CanonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A query a canonical placeholder cannot answer.
///
/// Placeholders only report what is true for every type they could stand
/// for; a query that depends on the concrete instantiation comes back as
/// this error instead of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedQuery {
    /// The placeholder does not define a base type.
    BaseType { kind: CanonKind },
    /// The placeholder cannot answer a cached-flags query.
    TypeFlags { kind: CanonKind },
}

impl fmt::Display for UnsupportedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedQuery::BaseType { kind } => {
                write!(f, "{} does not define a base type", kind.name())
            }
            UnsupportedQuery::TypeFlags { kind } => {
                write!(f, "{} cannot answer a type flags query", kind.name())
            }
        }
    }
}

impl std::error::Error for UnsupportedQuery {}

#[cfg(test)]
mod tests;
