//! Tests for fused 2D transforms.
//!
//! These tests verify the 2D orchestration path:
//! - Closed-form DCT-I of a constant input (the axis-order inversion check)
//! - Per-axis routing of mixed kinds
//! - Equivalence with two separable 1D passes
//! - The scalar-or-pair type-code list convention
//! - Boundary validation

use approx::assert_relative_eq;

use dtt::prelude::*;

// ============================================================================
// Closed Forms
// ============================================================================

/// DCT-I on both axes of a constant 2 x 2 array concentrates everything in
/// the DC element: 4.0 there, zeros elsewhere.
#[test]
fn test_dct1_constant_input() {
    let input = Array2D::from_vec(vec![1.0; 4], 2, 2).unwrap();
    let output = dtt_2d(&input, 1).unwrap();

    assert_relative_eq!(output.get(0, 0), 4.0, epsilon = 1e-12);
    assert_relative_eq!(output.get(1, 0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(output.get(0, 1), 0.0, epsilon = 1e-12);
    assert_relative_eq!(output.get(1, 1), 0.0, epsilon = 1e-12);
}

/// A 2D DCT-II/DCT-III round trip reproduces the input after dividing by
/// both axes' 2N normalizations.
#[test]
fn test_2d_round_trip() {
    let input =
        Array2D::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 4)
            .unwrap();

    let forward = dtt_2d(&input, 2).unwrap();
    let back = dtt_2d(&forward, 3).unwrap();

    // (2 * NX) * (2 * NY) = 6 * 8.
    let scale = 48.0;
    for x in 0..3 {
        for y in 0..4 {
            assert_relative_eq!(back.get(x, y) / scale, input.get(x, y), epsilon = 1e-9);
        }
    }
}

// ============================================================================
// Axis Routing
// ============================================================================

/// Mixed kinds are routed to the correct axes: swapping the codes on a
/// non-square asymmetric input changes the result.
#[test]
fn test_mixed_codes_not_swapped() {
    let input = Array2D::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();

    let xy = dtt_2d_codes(&input, &[2, 3]).unwrap();
    let yx = dtt_2d_codes(&input, &[3, 2]).unwrap();

    let differs = xy
        .as_slice()
        .iter()
        .zip(yx.as_slice())
        .any(|(a, b)| (a - b).abs() > 1e-9);
    assert!(differs, "swapped per-axis kinds produced identical output");
}

/// The fused 2D transform equals a columns pass with the x kind followed
/// by a rows pass with the y kind.
#[test]
fn test_fused_equals_separable_passes() {
    let input = Array2D::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();

    let fused = dtt_2d_codes(&input, &[2, 7]).unwrap();

    let cols = dtt_1d(&input, 2, Some(Axis::Columns)).unwrap();
    let separable = dtt_1d(&cols, 7, Some(Axis::Rows)).unwrap();

    for (a, b) in fused.as_slice().iter().zip(separable.as_slice()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-9);
    }
}

// ============================================================================
// Type-Code List Convention
// ============================================================================

/// A single code applies to both axes.
#[test]
fn test_scalar_code_list() {
    let input = Array2D::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    let scalar = dtt_2d_codes(&input, &[2]).unwrap();
    let both = dtt_2d(&input, 2).unwrap();
    assert_eq!(scalar.as_slice(), both.as_slice());
}

/// Code lists of unsupported length fail with ShapeMismatch.
#[test]
fn test_bad_code_list_length() {
    let input = Array2D::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    assert!(matches!(
        dtt_2d_codes(&input, &[]),
        Err(DttError::ShapeMismatch(_))
    ));
    assert!(matches!(
        dtt_2d_codes(&input, &[2, 3, 4]),
        Err(DttError::ShapeMismatch(_))
    ));
}

// ============================================================================
// Failure Paths
// ============================================================================

/// Each code of a mixed pair is validated independently.
#[test]
fn test_invalid_codes() {
    let input = Array2D::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    assert_eq!(
        dtt_2d_codes(&input, &[0, 2]),
        Err(DttError::InvalidTypeCode(0))
    );
    assert_eq!(
        dtt_2d_codes(&input, &[2, 9]),
        Err(DttError::InvalidTypeCode(9))
    );
    assert_eq!(dtt_2d(&input, 9), Err(DttError::InvalidTypeCode(9)));
}

/// DCT-I along an axis of extent 1 cannot be planned.
#[test]
fn test_2d_planning_failure() {
    let input = Array2D::from_vec(vec![1.0, 2.0, 3.0], 3, 1).unwrap();
    assert_eq!(
        dtt_2d(&input, 1),
        Err(DttError::PlanningFailure {
            kind: "DCT-I",
            length: 1
        })
    );
}

/// Builder accessors report the per-axis kinds.
#[test]
fn test_model_accessors() {
    let model = Dtt2d::mixed(2, 6).build().unwrap();
    assert_eq!(model.kind_x(), TransformKind::Dct2);
    assert_eq!(model.kind_y(), TransformKind::Dst2);
}
