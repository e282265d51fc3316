//! Tests for the type-code-to-kernel-kind mapping.
//!
//! These tests verify the fixed mapping table shared by the 1D and 2D
//! paths:
//! - Bijection between codes 1-8 and the eight transform kinds
//! - Rejection of out-of-range codes
//! - Kind metadata (names, cosine/sine split, inverse pairing)

use std::collections::HashSet;

use dtt::prelude::*;

// ============================================================================
// Bijection Tests
// ============================================================================

/// All eight valid codes map, and onto eight distinct kinds.
#[test]
fn test_mapping_is_bijective() {
    let mut seen = HashSet::new();
    for code in 1..=8u8 {
        let kind = map_type_code(code).expect("codes 1-8 must map");
        assert!(seen.insert(kind), "{} mapped twice", kind.name());
        assert_eq!(kind.type_code(), code);
    }
    assert_eq!(seen.len(), 8);
}

/// The table preserves the FFTW r2r ordering: cosine kinds first.
#[test]
fn test_mapping_order() {
    assert_eq!(map_type_code(1), Ok(TransformKind::Dct1));
    assert_eq!(map_type_code(2), Ok(TransformKind::Dct2));
    assert_eq!(map_type_code(3), Ok(TransformKind::Dct3));
    assert_eq!(map_type_code(4), Ok(TransformKind::Dct4));
    assert_eq!(map_type_code(5), Ok(TransformKind::Dst1));
    assert_eq!(map_type_code(6), Ok(TransformKind::Dst2));
    assert_eq!(map_type_code(7), Ok(TransformKind::Dst3));
    assert_eq!(map_type_code(8), Ok(TransformKind::Dst4));
}

/// Codes just outside the range fail with InvalidTypeCode.
#[test]
fn test_out_of_range_codes_rejected() {
    assert_eq!(map_type_code(0), Err(DttError::InvalidTypeCode(0)));
    assert_eq!(map_type_code(9), Err(DttError::InvalidTypeCode(9)));
    assert_eq!(map_type_code(255), Err(DttError::InvalidTypeCode(255)));
}

// ============================================================================
// Metadata Tests
// ============================================================================

/// Codes 1-4 are cosine variants, 5-8 sine variants.
#[test]
fn test_cosine_sine_split() {
    for code in 1..=8u8 {
        let kind = map_type_code(code).unwrap();
        assert_eq!(kind.is_cosine(), code <= 4, "{}", kind.name());
    }
}

/// Kind names follow the DCT-N / DST-N convention.
#[test]
fn test_kind_names() {
    assert_eq!(TransformKind::Dct1.name(), "DCT-I");
    assert_eq!(TransformKind::Dct4.name(), "DCT-IV");
    assert_eq!(TransformKind::Dst1.name(), "DST-I");
    assert_eq!(TransformKind::Dst4.name(), "DST-IV");
}

/// The inverse pairing is the documented one: I and IV variants are
/// self-inverse, II and III invert each other.
#[test]
fn test_inverse_pairing() {
    assert_eq!(TransformKind::Dct1.inverse(), TransformKind::Dct1);
    assert_eq!(TransformKind::Dct2.inverse(), TransformKind::Dct3);
    assert_eq!(TransformKind::Dct3.inverse(), TransformKind::Dct2);
    assert_eq!(TransformKind::Dct4.inverse(), TransformKind::Dct4);
    assert_eq!(TransformKind::Dst1.inverse(), TransformKind::Dst1);
    assert_eq!(TransformKind::Dst2.inverse(), TransformKind::Dst3);
    assert_eq!(TransformKind::Dst3.inverse(), TransformKind::Dst2);
    assert_eq!(TransformKind::Dst4.inverse(), TransformKind::Dst4);
}

/// Inverting twice is the identity for every kind.
#[test]
fn test_inverse_is_involution() {
    for code in 1..=8u8 {
        let kind = map_type_code(code).unwrap();
        assert_eq!(kind.inverse().inverse(), kind);
    }
}

/// Round-trip scale is the variant's logical DFT length.
#[test]
fn test_round_trip_scale() {
    assert_eq!(TransformKind::Dct1.round_trip_scale(4), 6);
    assert_eq!(TransformKind::Dst1.round_trip_scale(4), 10);
    for code in [2, 3, 4, 6, 7, 8] {
        let kind = map_type_code(code).unwrap();
        assert_eq!(kind.round_trip_scale(4), 8, "{}", kind.name());
    }
}

/// DCT-I needs two samples; every other variant accepts one.
#[test]
fn test_min_length() {
    for code in 1..=8u8 {
        let kind = map_type_code(code).unwrap();
        let expected = if kind == TransformKind::Dct1 { 2 } else { 1 };
        assert_eq!(kind.min_length(), expected, "{}", kind.name());
    }
}
