//! Type system core for the Keel compiler.
//!
//! Keel compiles generic code ahead of time, so generic instantiations that
//! share a machine representation share one compiled body. The canonical
//! placeholder types in this crate stand in for the erased type arguments
//! of those shared bodies; everything else here exists to give the
//! placeholders a home: a context that owns all type instances, the
//! well-known runtime definitions, cached category flags, and the stable
//! name hash other tools cross-check against.
//!
//! # Reserved type table
//!
//! Every [`TypeSystemContext`] eagerly builds the same table at fixed
//! indices:
//!
//! ```text
//! 0..=15   well-known definitions (System.Object .. System.Double)
//! 16       System.__Canon           (specific placeholder)
//! 17       System.__UniversalCanon  (universal placeholder)
//! 18..=31  reserved
//! 32..     dynamic types
//! ```
//!
//! # Identity
//!
//! Types are compared by identity within their owning context, never by
//! structure. `ctx.specific_canon()` returns the same instance for the
//! lifetime of `ctx`; two contexts never share instances.
//!
//! # Threading
//!
//! A constructed context is immutable. Share `&TypeSystemContext` across
//! threads freely; there are no locks and no lazy initialization.

mod canon;
mod context;
mod flags;
mod hashing;
mod idx;
mod well_known;

// Re-export the public surface at the crate root
pub use canon::{CanonKind, CanonType, CanonicalPolicy, UnsupportedQuery, is_reserved_type_name};
pub use context::{ContextId, DefType, TypeRef, TypeSystemContext};
pub use flags::TypeFlags;
pub use hashing::name_hash;
pub use idx::TypeIdx;
pub use well_known::WellKnownType;
