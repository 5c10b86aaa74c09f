use pretty_assertions::assert_eq;

use super::*;

#[test]
fn all_matches_table_order() {
    for (i, wk) in WellKnownType::ALL.iter().enumerate() {
        assert_eq!(wk.idx().index(), i, "{wk:?}");
    }
    assert_eq!(
        WellKnownType::ALL.len(),
        TypeIdx::WELL_KNOWN_COUNT as usize
    );
}

#[test]
fn idx_round_trips() {
    for wk in WellKnownType::ALL {
        assert_eq!(WellKnownType::from_idx(wk.idx()), Some(wk));
    }
    assert_eq!(WellKnownType::from_idx(TypeIdx::CANON), None);
    assert_eq!(WellKnownType::from_idx(TypeIdx::UNIVERSAL_CANON), None);
    assert_eq!(
        WellKnownType::from_idx(TypeIdx::from_raw(TypeIdx::FIRST_DYNAMIC)),
        None
    );
}

#[test]
fn names_agree_with_idx_names() {
    for wk in WellKnownType::ALL {
        assert_eq!(Some(wk.name()), wk.idx().name());
    }
}

#[test]
fn reference_types_are_classes() {
    for wk in [
        WellKnownType::Object,
        WellKnownType::ValueType,
        WellKnownType::String,
    ] {
        assert_eq!(wk.category_flags(), TypeFlags::IS_CLASS, "{wk:?}");
        assert!(!wk.is_primitive());
    }
}

#[test]
fn void_is_a_non_primitive_value_type() {
    assert_eq!(
        WellKnownType::Void.category_flags(),
        TypeFlags::IS_VALUE_TYPE
    );
    assert!(!WellKnownType::Void.is_primitive());
}

#[test]
fn numerics_are_primitive_value_types() {
    for wk in [
        WellKnownType::Bool,
        WellKnownType::Char,
        WellKnownType::SByte,
        WellKnownType::Byte,
        WellKnownType::Int16,
        WellKnownType::UInt16,
        WellKnownType::Int32,
        WellKnownType::UInt32,
        WellKnownType::Int64,
        WellKnownType::UInt64,
        WellKnownType::Single,
        WellKnownType::Double,
    ] {
        assert_eq!(
            wk.category_flags(),
            TypeFlags::IS_VALUE_TYPE | TypeFlags::IS_PRIMITIVE,
            "{wk:?}"
        );
        assert!(wk.is_primitive());
    }
}

#[test]
fn base_chains_reach_the_root() {
    assert_eq!(WellKnownType::Object.base(), None);
    assert_eq!(WellKnownType::ValueType.base(), Some(TypeIdx::OBJECT));
    assert_eq!(WellKnownType::String.base(), Some(TypeIdx::OBJECT));
    assert_eq!(WellKnownType::Void.base(), Some(TypeIdx::VALUE_TYPE));
    assert_eq!(WellKnownType::Int32.base(), Some(TypeIdx::VALUE_TYPE));
    assert_eq!(WellKnownType::Double.base(), Some(TypeIdx::VALUE_TYPE));
}
