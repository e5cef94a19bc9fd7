//! # Boundary Loop Extraction
//!
//! Isolates the ring of surface vertices at the highest (or lowest) z and
//! orders it by polar angle around the ring's centroid, as seen from +z.
//!
//! ## Limitations
//!
//! The ring is assumed planar within tolerance and to be the only ring at
//! that height. Rings that are not star-shaped around their centroid, or
//! several disjoint components at the same height, produce a wrong loop
//! without an error. The angular sort yields ascending `atan2` order, which
//! is counter-clockwise for star-shaped rings; use
//! [`BoundaryLoop::ensure_counter_clockwise`] when a fixed winding matters.

use config::constants::LOOP_HEIGHT_TOLERANCE;
use glam::{DVec2, DVec3};

use crate::error::{HexMeshError, HexMeshResult};
use crate::mesh::SurfaceMesh;

#[cfg(test)]
mod tests;

/// Which extremal ring to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Ring at maximum z.
    Top,
    /// Ring at minimum z.
    Bottom,
}

/// An ordered ring of positions at one extremal height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryLoop {
    positions: Vec<DVec3>,
}

impl BoundaryLoop {
    /// Wraps already-ordered positions.
    pub fn new(positions: Vec<DVec3>) -> Self {
        Self { positions }
    }

    /// Number of positions in the loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the loop has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Loop positions in order.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Consumes the loop, returning its positions.
    pub fn into_positions(self) -> Vec<DVec3> {
        self.positions
    }

    /// Mean of the xy components, or `None` for an empty loop.
    pub fn centroid(&self) -> Option<DVec2> {
        horizontal_centroid(&self.positions)
    }

    /// Polar angle of each position around the centroid, in `[-π, π]`.
    pub fn angles(&self) -> Vec<f64> {
        let Some(center) = self.centroid() else {
            return Vec::new();
        };
        self.positions.iter().map(|p| polar_angle(*p, center)).collect()
    }

    /// Shoelace area in the xy plane; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        let n = self.positions.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.positions[i];
                let b = self.positions[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice * 0.5
    }

    /// Reverses the loop if it winds clockwise seen from +z.
    ///
    /// Returns true if the order was reversed.
    pub fn ensure_counter_clockwise(&mut self) -> bool {
        if self.signed_area() < 0.0 {
            self.positions.reverse();
            true
        } else {
            false
        }
    }
}

/// Extracts the ring at maximum z using the default tolerance.
///
/// An empty surface gives an empty loop.
///
/// # Example
///
/// ```rust
/// use hexmesh::{extract_top_loop, SurfaceMesh};
/// use glam::DVec3;
///
/// let surface = SurfaceMesh::from_parts(
///     vec![
///         DVec3::new(0.0, 0.0, 0.0),
///         DVec3::new(1.0, 1.0, 1.0),
///         DVec3::new(0.0, 0.0, 1.0),
///         DVec3::new(1.0, 0.0, 1.0),
///     ],
///     Vec::new(),
/// );
/// let top = extract_top_loop(&surface);
/// assert_eq!(top.len(), 3);
/// ```
pub fn extract_top_loop(surface: &SurfaceMesh) -> BoundaryLoop {
    collect_ring(surface, Extremum::Top, LOOP_HEIGHT_TOLERANCE)
}

/// Extracts the ring at minimum z using the default tolerance.
pub fn extract_bottom_loop(surface: &SurfaceMesh) -> BoundaryLoop {
    collect_ring(surface, Extremum::Bottom, LOOP_HEIGHT_TOLERANCE)
}

/// Extracts an extremal ring with an explicit height tolerance.
///
/// # Errors
///
/// [`HexMeshError::InvalidTolerance`] if `tolerance` is not positive and
/// finite.
pub fn extract_loop(
    surface: &SurfaceMesh,
    which: Extremum,
    tolerance: f64,
) -> HexMeshResult<BoundaryLoop> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(HexMeshError::InvalidTolerance(tolerance));
    }
    Ok(collect_ring(surface, which, tolerance))
}

fn collect_ring(surface: &SurfaceMesh, which: Extremum, tolerance: f64) -> BoundaryLoop {
    let vertices = surface.vertices();
    let pick: fn(f64, f64) -> f64 = match which {
        Extremum::Top => f64::max,
        Extremum::Bottom => f64::min,
    };
    let extreme = vertices.iter().map(|v| v.z).reduce(pick);
    let Some(extreme) = extreme else {
        return BoundaryLoop::default();
    };

    let ring: Vec<DVec3> = vertices
        .iter()
        .copied()
        .filter(|v| (v.z - extreme).abs() < tolerance)
        .collect();

    let Some(center) = horizontal_centroid(&ring) else {
        return BoundaryLoop::default();
    };

    // Stable: equal angles keep surface order.
    let mut keyed: Vec<(f64, DVec3)> = ring.into_iter().map(|p| (polar_angle(p, center), p)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    BoundaryLoop::new(keyed.into_iter().map(|(_, p)| p).collect())
}

fn horizontal_centroid(points: &[DVec3]) -> Option<DVec2> {
    if points.is_empty() {
        return None;
    }
    let sum: DVec2 = points.iter().map(|p| p.truncate()).sum();
    Some(sum / points.len() as f64)
}

#[inline]
fn polar_angle(p: DVec3, center: DVec2) -> f64 {
    let d = p.truncate() - center;
    d.y.atan2(d.x)
}
