//! Type system context: owner of all type instances.
//!
//! A [`TypeSystemContext`] is one compilation universe. Construction eagerly
//! builds the full reserved table: every well-known definition from
//! [`WellKnownType::ALL`] followed by the two canonical placeholders, at the
//! fixed indices [`TypeIdx`] names. Nothing is created lazily, so a
//! constructed context is immutable and can be shared across threads
//! without locks.
//!
//! Types are compared by identity within a context. The placeholders are
//! boxed so the references the context hands out keep one stable address
//! even when the context value itself moves.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use rustc_hash::FxHashMap;

use crate::canon::{CanonKind, CanonType, CanonicalPolicy};
use crate::flags::TypeFlags;
use crate::hashing;
use crate::idx::TypeIdx;
use crate::well_known::WellKnownType;

static NEXT_CONTEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique identity of a [`TypeSystemContext`].
///
/// Lets a type remember which context owns it without holding a reference
/// back into the context, which would tie the two structs together in a
/// cycle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContextId(u32);

impl ContextId {
    fn next() -> Self {
        Self(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A well-known type definition, fully built at context construction.
///
/// Like [`CanonType`], definitions are compared by identity: each context
/// owns exactly one instance per [`WellKnownType`].
#[derive(Debug)]
pub struct DefType {
    wk: WellKnownType,
    flags: TypeFlags,
    base: Option<TypeIdx>,
    name_hash: u32,
}

impl DefType {
    fn new(wk: WellKnownType) -> Self {
        Self {
            wk,
            flags: wk.category_flags(),
            base: wk.base(),
            name_hash: hashing::name_hash(wk.name()),
        }
    }

    /// Which well-known definition this is.
    #[inline]
    pub const fn well_known(&self) -> WellKnownType {
        self.wk
    }

    /// The fixed index of this definition.
    #[inline]
    pub const fn idx(&self) -> TypeIdx {
        self.wk.idx()
    }

    /// The runtime name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.wk.name()
    }

    /// The stable hash of the name.
    #[inline]
    pub const fn name_hash(&self) -> u32 {
        self.name_hash
    }

    /// The cached type flags. Definitions answer flags queries directly;
    /// only canonical placeholders make them fallible.
    #[inline]
    pub const fn flags(&self) -> TypeFlags {
        self.flags
    }

    /// Resolve the base definition, or `None` for the root reference type.
    ///
    /// Definition tables are identical in every context, so any context
    /// resolves the same chain.
    pub fn base_type<'ctx>(&self, context: &'ctx TypeSystemContext) -> Option<&'ctx DefType> {
        self.base.map(|idx| context.def(idx))
    }

    /// Check if this definition is matched by a canonicalization policy.
    ///
    /// Definitions are concrete types, never placeholders, so the answer is
    /// always `false`.
    #[inline]
    pub const fn is_canonical_subtype(&self, _policy: CanonicalPolicy) -> bool {
        false
    }
}

impl fmt::Display for DefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved type handle: either a definition or a canonical placeholder.
#[derive(Copy, Clone, Debug)]
pub enum TypeRef<'ctx> {
    /// A well-known definition.
    Def(&'ctx DefType),
    /// A canonical placeholder.
    Canon(&'ctx CanonType),
}

impl<'ctx> TypeRef<'ctx> {
    /// The fixed index of the referenced type.
    #[inline]
    pub fn idx(self) -> TypeIdx {
        match self {
            TypeRef::Def(def) => def.idx(),
            TypeRef::Canon(canon) => canon.kind().idx(),
        }
    }

    /// The runtime name of the referenced type.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            TypeRef::Def(def) => def.name(),
            TypeRef::Canon(canon) => canon.name(),
        }
    }

    /// The stable hash of the name.
    #[inline]
    pub fn name_hash(self) -> u32 {
        match self {
            TypeRef::Def(def) => def.name_hash(),
            TypeRef::Canon(canon) => canon.name_hash(),
        }
    }

    /// Check if the referenced type is matched by `policy`.
    #[inline]
    pub fn is_canonical_subtype(self, policy: CanonicalPolicy) -> bool {
        match self {
            TypeRef::Def(def) => def.is_canonical_subtype(policy),
            TypeRef::Canon(canon) => canon.is_canonical_subtype(policy),
        }
    }

    /// The definition, if this is one.
    #[inline]
    pub fn as_def(self) -> Option<&'ctx DefType> {
        match self {
            TypeRef::Def(def) => Some(def),
            TypeRef::Canon(_) => None,
        }
    }

    /// The canonical placeholder, if this is one.
    #[inline]
    pub fn as_canon(self) -> Option<&'ctx CanonType> {
        match self {
            TypeRef::Def(_) => None,
            TypeRef::Canon(canon) => Some(canon),
        }
    }
}

impl fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One compilation universe: the owner of every type instance.
pub struct TypeSystemContext {
    id: ContextId,
    defs: Vec<DefType>,
    by_name: FxHashMap<&'static str, TypeIdx>,
    // Boxed for a stable address across moves of the context value.
    specific_canon: Box<CanonType>,
    universal_canon: Box<CanonType>,
}

impl TypeSystemContext {
    /// Build a context with its full reserved type table.
    pub fn new() -> Self {
        Self::with_canon_hook(|_, _| {})
    }

    /// Build a context, invoking `hook` once per canonical placeholder as
    /// it is created: the specific placeholder first, then the universal
    /// one.
    ///
    /// Embedders use the hook to register the placeholders with side tables
    /// (debug info, metadata emission) at the moment they exist, in a
    /// deterministic order.
    pub fn with_canon_hook<F>(mut hook: F) -> Self
    where
        F: FnMut(TypeIdx, &CanonType),
    {
        let id = ContextId::next();

        let mut defs = Vec::with_capacity(WellKnownType::ALL.len());
        let mut by_name = FxHashMap::default();
        for wk in WellKnownType::ALL {
            by_name.insert(wk.name(), wk.idx());
            defs.push(DefType::new(wk));
        }

        let specific_canon = Box::new(CanonType::new(CanonKind::Specific, id));
        hook(TypeIdx::CANON, &specific_canon);
        tracing::trace!(name = specific_canon.name(), "canonical placeholder built");

        let universal_canon = Box::new(CanonType::new(CanonKind::Universal, id));
        hook(TypeIdx::UNIVERSAL_CANON, &universal_canon);
        tracing::trace!(name = universal_canon.name(), "canonical placeholder built");

        by_name.insert(CanonKind::Specific.name(), TypeIdx::CANON);
        by_name.insert(CanonKind::Universal.name(), TypeIdx::UNIVERSAL_CANON);

        let ctx = Self {
            id,
            defs,
            by_name,
            specific_canon,
            universal_canon,
        };
        tracing::debug!(
            context = ctx.id.raw(),
            types = ctx.type_count(),
            "type system context ready"
        );
        ctx
    }

    /// This context's process-unique id.
    #[inline]
    pub const fn id(&self) -> ContextId {
        self.id
    }

    /// Number of pre-built types, placeholders included.
    #[inline]
    pub fn type_count(&self) -> usize {
        self.defs.len() + 2
    }

    /// Resolve an index issued by this context.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not issued by this context.
    pub fn get(&self, idx: TypeIdx) -> TypeRef<'_> {
        match idx {
            TypeIdx::CANON => TypeRef::Canon(&self.specific_canon),
            TypeIdx::UNIVERSAL_CANON => TypeRef::Canon(&self.universal_canon),
            _ => TypeRef::Def(&self.defs[idx.index()]),
        }
    }

    fn def(&self, idx: TypeIdx) -> &DefType {
        &self.defs[idx.index()]
    }

    /// Get a well-known definition.
    #[inline]
    pub fn well_known(&self, wk: WellKnownType) -> &DefType {
        self.def(wk.idx())
    }

    /// The root reference type, `System.Object`.
    #[inline]
    pub fn root_reference_type(&self) -> &DefType {
        self.well_known(WellKnownType::Object)
    }

    /// This context's specific canonical placeholder, `System.__Canon`.
    #[inline]
    pub fn specific_canon(&self) -> &CanonType {
        &self.specific_canon
    }

    /// This context's universal canonical placeholder,
    /// `System.__UniversalCanon`.
    #[inline]
    pub fn universal_canon(&self) -> &CanonType {
        &self.universal_canon
    }

    /// The placeholder instance for `kind`.
    #[inline]
    pub fn canon_type(&self, kind: CanonKind) -> &CanonType {
        match kind {
            CanonKind::Specific => &self.specific_canon,
            CanonKind::Universal => &self.universal_canon,
        }
    }

    /// Check if the type at `idx` is matched by `policy`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not issued by this context.
    pub fn is_canonical_subtype(&self, idx: TypeIdx, policy: CanonicalPolicy) -> bool {
        self.get(idx).is_canonical_subtype(policy)
    }

    /// Look up a pre-built type by its runtime name. Covers the well-known
    /// definitions and both reserved placeholder names.
    pub fn find_by_name(&self, name: &str) -> Option<TypeIdx> {
        self.by_name.get(name).copied()
    }
}

impl Default for TypeSystemContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeSystemContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSystemContext")
            .field("id", &self.id)
            .field("types", &self.type_count())
            .finish_non_exhaustive()
    }
}
