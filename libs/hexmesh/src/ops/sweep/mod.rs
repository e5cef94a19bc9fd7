//! # Loft Sweep
//!
//! Builds a layered hex mesh between the top and bottom boundary loops of a
//! surface.
//!
//! ## Algorithm
//!
//! 1. Level `l` of `0..=layers` sits at `t = l / layers`; each loop position
//!    is `top * (1 - t) + bottom * t`. Level `l` owns vertex indices
//!    `[l * n, (l + 1) * n)`, so level 0 is the top loop and level `layers`
//!    the bottom loop.
//! 2. For every layer and every loop position `i`, one cell spans the four
//!    consecutive loop positions `i, i+1, i+2, i+3 (mod n)`. Its first face is
//!    the lower level (toward the bottom loop), its second face the same
//!    positions one level up. With counter-clockwise loops the first face's
//!    normal points at the second face, as VTK expects.
//! 3. The optional [`UniformTransform`] is applied last.
//!
//! Output: `(layers + 1) * n` vertices and `layers * n` hexahedra.

use config::constants::{DEFAULT_LAYERS, LOOP_HEIGHT_TOLERANCE, MAX_VERTICES, MIN_LOOP_VERTICES};
use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{HexMeshError, HexMeshResult};
use crate::mesh::{HexMesh, Hexahedron, SurfaceMesh};
use crate::ops::boundary_loop::{extract_loop, BoundaryLoop, Extremum};
use crate::transform::UniformTransform;


/// Parameters for the loft sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoftOptions {
    /// Number of cell layers between the loops.
    pub layers: u32,
    /// Height tolerance for collecting each extremal ring.
    pub tolerance: f64,
    /// Reverse clockwise loops before pairing them.
    pub normalize_winding: bool,
    /// Post-transform applied to every output vertex.
    pub transform: UniformTransform,
}

impl Default for LoftOptions {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            tolerance: LOOP_HEIGHT_TOLERANCE,
            normalize_winding: true,
            transform: UniformTransform::IDENTITY,
        }
    }
}

/// Lofts a surface's top loop down to its bottom loop.
///
/// Uses the default tolerance, winding normalization and no transform.
///
/// # Errors
///
/// See [`sweep_loops`].
///
/// # Example
///
/// ```rust
/// use hexmesh::{sweep_hex_mesh, SurfaceMesh};
/// use glam::DVec3;
///
/// let mut surface = SurfaceMesh::new();
/// for z in [1.0, 0.0] {
///     surface.add_vertex(DVec3::new(0.0, 0.0, z));
///     surface.add_vertex(DVec3::new(1.0, 0.0, z));
///     surface.add_vertex(DVec3::new(1.0, 1.0, z));
///     surface.add_vertex(DVec3::new(0.0, 1.0, z));
/// }
/// let mesh = sweep_hex_mesh(&surface, 3).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.hex_count(), 12);
/// ```
pub fn sweep_hex_mesh(surface: &SurfaceMesh, layers: u32) -> HexMeshResult<HexMesh> {
    sweep_hex_mesh_with(
        surface,
        &LoftOptions {
            layers,
            ..LoftOptions::default()
        },
    )
}

/// Lofts a surface's top loop down to its bottom loop with explicit options.
pub fn sweep_hex_mesh_with(surface: &SurfaceMesh, options: &LoftOptions) -> HexMeshResult<HexMesh> {
    if options.layers == 0 {
        return Err(HexMeshError::InvalidLayers(options.layers));
    }
    options.transform.validate()?;

    let mut top = extract_loop(surface, Extremum::Top, options.tolerance)?;
    let mut bottom = extract_loop(surface, Extremum::Bottom, options.tolerance)?;
    debug!(
        "sweep: top loop {} vertices, bottom loop {} vertices",
        top.len(),
        bottom.len()
    );

    if options.normalize_winding {
        if top.ensure_counter_clockwise() {
            debug!("sweep: reversed clockwise top loop");
        }
        if bottom.ensure_counter_clockwise() {
            debug!("sweep: reversed clockwise bottom loop");
        }
    }

    let mut mesh = sweep_loops(&top, &bottom, options.layers)?;
    options.transform.apply(&mut mesh);
    Ok(mesh)
}

/// Interpolates between two loops and stitches the levels into hexahedra.
///
/// # Errors
///
/// - [`HexMeshError::InvalidLayers`] for `layers == 0`
/// - [`HexMeshError::EmptyInput`] if either loop is empty
/// - [`HexMeshError::LoopMismatch`] if the loops differ in length
/// - [`HexMeshError::LoopTooShort`] for loops under [`MIN_LOOP_VERTICES`]
/// - [`HexMeshError::TooManyVertices`] when `(layers + 1) * n` exceeds
///   [`MAX_VERTICES`]
pub fn sweep_loops(top: &BoundaryLoop, bottom: &BoundaryLoop, layers: u32) -> HexMeshResult<HexMesh> {
    if layers == 0 {
        return Err(HexMeshError::InvalidLayers(layers));
    }
    if top.is_empty() || bottom.is_empty() {
        return Err(HexMeshError::EmptyInput {
            operation: "sweep_hex_mesh",
        });
    }
    if top.len() != bottom.len() {
        return Err(HexMeshError::LoopMismatch {
            top: top.len(),
            bottom: bottom.len(),
        });
    }
    let n = top.len();
    if n < MIN_LOOP_VERTICES {
        return Err(HexMeshError::LoopTooShort {
            len: n,
            min: MIN_LOOP_VERTICES,
        });
    }

    let layers = layers as usize;
    let vertex_count = layers
        .checked_add(1)
        .and_then(|levels| levels.checked_mul(n))
        .unwrap_or(usize::MAX);
    if vertex_count > MAX_VERTICES {
        return Err(HexMeshError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }

    // Every index below fits in u32 once the vertex count is bounded.
    let mut mesh = HexMesh::with_capacity(vertex_count, layers * n);

    for level in 0..=layers {
        let t = level as f64 / layers as f64;
        for (a, b) in top.positions().iter().zip(bottom.positions()) {
            mesh.add_vertex(interpolate(*a, *b, t));
        }
    }

    for layer in 0..layers {
        let upper = (layer * n) as u32;
        let lower = ((layer + 1) * n) as u32;
        for i in 0..n {
            let window: [u32; 4] = std::array::from_fn(|q| ((i + q) % n) as u32);
            mesh.add_hex(Hexahedron::from_faces(
                window.map(|w| lower + w),
                window.map(|w| upper + w),
            ));
        }
    }

    Ok(mesh)
}

/// `a * (1 - t) + b * t`; exact at both ends.
#[inline]
fn interpolate(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    a * (1.0 - t) + b * t
}
