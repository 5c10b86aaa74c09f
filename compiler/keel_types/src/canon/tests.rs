#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::ptr;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn classification_table() {
    let ctx = TypeSystemContext::new();
    let specific = ctx.specific_canon();
    let universal = ctx.universal_canon();

    assert!(specific.is_canonical_subtype(CanonicalPolicy::Specific));
    assert!(!specific.is_canonical_subtype(CanonicalPolicy::Universal));
    assert!(specific.is_canonical_subtype(CanonicalPolicy::Any));

    assert!(!universal.is_canonical_subtype(CanonicalPolicy::Specific));
    assert!(universal.is_canonical_subtype(CanonicalPolicy::Universal));
    assert!(universal.is_canonical_subtype(CanonicalPolicy::Any));
}

#[test]
fn names_are_verbatim() {
    let ctx = TypeSystemContext::new();
    assert_eq!(ctx.specific_canon().name(), "System.__Canon");
    assert_eq!(ctx.universal_canon().name(), "System.__UniversalCanon");

    // Display renders the same string.
    assert_eq!(ctx.specific_canon().to_string(), "System.__Canon");
    assert_eq!(
        ctx.universal_canon().to_string(),
        "System.__UniversalCanon"
    );
}

#[test]
fn to_canonical_returns_the_same_instance() {
    let ctx = TypeSystemContext::new();
    let specific = ctx.specific_canon();
    let universal = ctx.universal_canon();

    assert!(ptr::eq(
        specific.to_canonical(CanonicalPolicy::Specific),
        specific
    ));
    assert!(ptr::eq(
        universal.to_canonical(CanonicalPolicy::Universal),
        universal
    ));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "cannot convert under policy")]
fn to_canonical_rejects_the_wrong_policy() {
    let ctx = TypeSystemContext::new();
    let _ = ctx.specific_canon().to_canonical(CanonicalPolicy::Universal);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "cannot convert under policy")]
fn to_canonical_rejects_the_any_wildcard() {
    let ctx = TypeSystemContext::new();
    let _ = ctx.universal_canon().to_canonical(CanonicalPolicy::Any);
}

#[test]
fn specific_flags_report_the_class_category() {
    let ctx = TypeSystemContext::new();
    let specific = ctx.specific_canon();

    assert_eq!(
        specific.type_flags(TypeFlags::CATEGORY_MASK),
        Ok(TypeFlags::IS_CLASS)
    );
    // A wider mask still only gets the category bit back.
    assert_eq!(specific.type_flags(TypeFlags::all()), Ok(TypeFlags::IS_CLASS));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "answers only category bits")]
fn specific_flags_reject_a_category_free_mask() {
    let ctx = TypeSystemContext::new();
    let _ = ctx.specific_canon().type_flags(TypeFlags::HAS_FINALIZER);
}

#[test]
fn specific_base_is_the_root_reference_type() {
    let ctx = TypeSystemContext::new();
    let base = ctx.specific_canon().base_type(&ctx).unwrap();

    assert!(ptr::eq(base, ctx.root_reference_type()));
    assert_eq!(base.name(), "System.Object");
}

#[test]
fn universal_refusals_are_deterministic() {
    let ctx = TypeSystemContext::new();
    let universal = ctx.universal_canon();

    let first = universal.base_type(&ctx).unwrap_err();
    let second = universal.base_type(&ctx).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(
        first,
        UnsupportedQuery::BaseType {
            kind: CanonKind::Universal
        }
    );

    for mask in [
        TypeFlags::CATEGORY_MASK,
        TypeFlags::IS_VALUE_TYPE,
        TypeFlags::HAS_FINALIZER,
        TypeFlags::all(),
        TypeFlags::empty(),
    ] {
        assert_eq!(
            universal.type_flags(mask),
            Err(UnsupportedQuery::TypeFlags {
                kind: CanonKind::Universal
            }),
            "mask {mask:?}"
        );
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "foreign context")]
fn base_type_rejects_a_foreign_context() {
    let owner = TypeSystemContext::new();
    let other = TypeSystemContext::new();
    let _ = owner.specific_canon().base_type(&other);
}

#[test]
fn name_hash_matches_the_algorithm() {
    let ctx = TypeSystemContext::new();
    let specific = ctx.specific_canon();
    let universal = ctx.universal_canon();

    assert_eq!(specific.name_hash(), hashing::name_hash(specific.name()));
    assert_eq!(universal.name_hash(), hashing::name_hash(universal.name()));
    assert_ne!(specific.name_hash(), universal.name_hash());
}

#[test]
fn reserved_names() {
    assert!(is_reserved_type_name("System.__Canon"));
    assert!(is_reserved_type_name("System.__UniversalCanon"));
    assert!(!is_reserved_type_name("System.Object"));
    assert!(!is_reserved_type_name("system.__canon"));
    assert!(!is_reserved_type_name(""));
}

#[test]
fn policy_as_kind() {
    assert_eq!(
        CanonicalPolicy::Specific.as_kind(),
        Some(CanonKind::Specific)
    );
    assert_eq!(
        CanonicalPolicy::Universal.as_kind(),
        Some(CanonKind::Universal)
    );
    assert_eq!(CanonicalPolicy::Any.as_kind(), None);
}

#[test]
fn kind_idx_round_trips() {
    for kind in [CanonKind::Specific, CanonKind::Universal] {
        assert_eq!(CanonKind::from_idx(kind.idx()), Some(kind));
        assert_eq!(kind.policy().as_kind(), Some(kind));
    }
    assert_eq!(CanonKind::from_idx(TypeIdx::OBJECT), None);
}

#[test]
fn unsupported_query_messages_name_the_placeholder() {
    assert_eq!(
        UnsupportedQuery::BaseType {
            kind: CanonKind::Universal
        }
        .to_string(),
        "System.__UniversalCanon does not define a base type"
    );
    assert_eq!(
        UnsupportedQuery::TypeFlags {
            kind: CanonKind::Universal
        }
        .to_string(),
        "System.__UniversalCanon cannot answer a type flags query"
    );
}
