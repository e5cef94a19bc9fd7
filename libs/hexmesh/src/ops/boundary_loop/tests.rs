//! # Boundary Loop Tests

use super::*;
use std::f64::consts::TAU;

/// Closed prism: an `n`-gon ring at z = 0, one at z = `height`, plus an
/// intermediate ring at half height, listed in a scrambled order. Corners sit
/// at half-step angles so none lies on the ±π seam for even `n`.
fn prism(n: usize, radius: f64, height: f64) -> SurfaceMesh {
    let mut surface = SurfaceMesh::new();
    let order: Vec<usize> = (0..n).rev().map(|i| (i + n / 2) % n).collect();
    for z in [height, 0.5 * height, 0.0] {
        for &i in &order {
            let a = TAU * (i as f64 + 0.5) / n as f64;
            surface.add_vertex(DVec3::new(radius * a.cos() + 2.0, radius * a.sin() - 1.0, z));
        }
    }
    surface
}

fn sorted(mut points: Vec<DVec3>) -> Vec<[u64; 3]> {
    let mut keys: Vec<[u64; 3]> = points
        .drain(..)
        .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn test_empty_surface_gives_empty_loop() {
    let surface = SurfaceMesh::new();
    assert!(extract_top_loop(&surface).is_empty());
    assert!(extract_bottom_loop(&surface).is_empty());
    assert!(extract_top_loop(&surface).centroid().is_none());
}

#[test]
fn test_top_loop_is_exactly_the_top_ring() {
    let surface = prism(8, 1.0, 3.0);
    let top = extract_top_loop(&surface);

    let expected: Vec<DVec3> = surface.vertices()[..8].to_vec();
    assert_eq!(sorted(top.positions().to_vec()), sorted(expected));
    assert!(top.positions().iter().all(|p| p.z == 3.0));
}

#[test]
fn test_bottom_loop_is_exactly_the_bottom_ring() {
    let surface = prism(5, 2.0, 1.0);
    let bottom = extract_bottom_loop(&surface);

    let expected: Vec<DVec3> = surface.vertices()[10..].to_vec();
    assert_eq!(sorted(bottom.positions().to_vec()), sorted(expected));
}

#[test]
fn test_loop_angles_non_decreasing() {
    let surface = prism(12, 1.5, 2.0);
    for ring in [extract_top_loop(&surface), extract_bottom_loop(&surface)] {
        let angles = ring.angles();
        assert_eq!(angles.len(), 12);
        assert!(angles.windows(2).all(|w| w[0] <= w[1]), "{angles:?}");
    }
}

#[test]
fn test_angular_sort_is_counter_clockwise() {
    let surface = prism(6, 1.0, 1.0);
    let top = extract_top_loop(&surface);
    assert!(top.signed_area() > 0.0);
}

#[test]
fn test_tolerance_groups_near_planar_ring() {
    let mut surface = SurfaceMesh::new();
    surface.add_vertex(DVec3::new(0.0, 0.0, 1.0));
    surface.add_vertex(DVec3::new(1.0, 0.0, 0.9995));
    surface.add_vertex(DVec3::new(1.0, 1.0, 1.0));
    surface.add_vertex(DVec3::new(0.0, 1.0, 0.998));

    assert_eq!(extract_top_loop(&surface).len(), 3);
    let wide = extract_loop(&surface, Extremum::Top, 1e-2).unwrap();
    assert_eq!(wide.len(), 4);
}

#[test]
fn test_invalid_tolerance() {
    let surface = prism(4, 1.0, 1.0);
    for tol in [0.0, -1e-3, f64::NAN] {
        let err = extract_loop(&surface, Extremum::Top, tol).unwrap_err();
        assert!(matches!(err, HexMeshError::InvalidTolerance(_)));
    }
}

#[test]
fn test_unit_square_order() {
    let mut surface = SurfaceMesh::new();
    surface.add_vertex(DVec3::new(1.0, 1.0, 1.0));
    surface.add_vertex(DVec3::new(0.0, 0.0, 1.0));
    surface.add_vertex(DVec3::new(0.0, 1.0, 1.0));
    surface.add_vertex(DVec3::new(1.0, 0.0, 1.0));

    let top = extract_top_loop(&surface);
    // atan2 from the centre: (0,0) -3π/4, (1,0) -π/4, (1,1) π/4, (0,1) 3π/4
    assert_eq!(
        top.positions(),
        &[
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        ]
    );
}

#[test]
fn test_ensure_counter_clockwise_reverses_clockwise_loop() {
    let mut ring = BoundaryLoop::new(vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
    ]);
    assert!(ring.signed_area() < 0.0);
    assert!(ring.ensure_counter_clockwise());
    assert_eq!(ring.signed_area(), 1.0);
    assert!(!ring.ensure_counter_clockwise());
}
