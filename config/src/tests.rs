//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_loop_tolerance_larger_than_epsilon() {
    assert!(
        LOOP_HEIGHT_TOLERANCE > EPSILON,
        "LOOP_HEIGHT_TOLERANCE should exceed EPSILON"
    );
}

// =============================================================================
// MESHING TESTS
// =============================================================================

#[test]
fn test_default_resolution() {
    assert_eq!(DEFAULT_RESOLUTION, 0.1);
}

#[test]
fn test_default_layers_positive() {
    assert!(DEFAULT_LAYERS >= 1);
}

#[test]
fn test_min_loop_vertices_is_four() {
    // A hex needs four distinct corners per level
    assert_eq!(MIN_LOOP_VERTICES, 4);
}

// =============================================================================
// FORMAT TESTS
// =============================================================================

#[test]
fn test_vtk_hexahedron_code() {
    assert_eq!(VTK_HEXAHEDRON, 12);
}

#[test]
fn test_vtk_header_version() {
    assert!(VTK_HEADER.starts_with("# vtk DataFile Version 3.0"));
}

// =============================================================================
// WHOLE_CELLS TESTS
// =============================================================================

#[test]
fn test_whole_cells_exact_multiple() {
    assert_eq!(whole_cells(2.0, 0.5), 4);
}

#[test]
fn test_whole_cells_drops_remainder() {
    assert_eq!(whole_cells(2.4, 0.5), 4);
    assert_eq!(whole_cells(0.49, 0.5), 0);
}

#[test]
fn test_whole_cells_absorbs_division_noise() {
    // 0.3 / 0.1 == 2.9999999999999996 in f64
    assert!((0.3_f64 / 0.1).floor() < 3.0);
    assert_eq!(whole_cells(0.3, 0.1), 3);
    assert_eq!(whole_cells(0.7, 0.1), 7);
}

#[test]
fn test_whole_cells_saturates_huge_extent() {
    assert_eq!(whole_cells(1e30, 1.0), usize::MAX);
}

#[test]
fn test_whole_cells_degenerate_extent() {
    assert_eq!(whole_cells(0.0, 0.1), 0);
    assert_eq!(whole_cells(-1.0, 0.1), 0);
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 2.0));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_reasonable() {
    // Should allow dense lattices but prevent memory exhaustion
    assert!(MAX_VERTICES >= 1_000_000);
}
