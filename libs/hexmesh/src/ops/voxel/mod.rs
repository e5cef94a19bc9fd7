//! # Lattice Voxel Fill
//!
//! Tiles the bounding box of a surface with cubic hexahedral cells.
//!
//! The box is filled, not the solid the surface encloses: there is no
//! containment test, so concavities and holes are not respected. Along each
//! axis `floor(extent / resolution)` cells are emitted; the remainder beyond
//! the last whole cell is left uncovered.
//!
//! ## Layout
//!
//! Cells are ordered with `i` (x) outermost and `k` (z) innermost. Each cell
//! uses VTK corner order with offsets
//! `(0,0,0) (1,0,0) (1,1,0) (0,1,0) (0,0,1) (1,0,1) (1,1,1) (0,1,1)`.
//!
//! - Unwelded (default): cell `c` owns the eight fresh vertices
//!   `[8c, 8c + 8)`; neighbouring cells never share an index.
//! - Welded: coincident corners are merged through their [`SpatialKey`],
//!   giving `(nx+1)(ny+1)(nz+1)` vertices in first-use order.

use std::collections::HashMap;

use config::constants::{whole_cells, DEFAULT_RESOLUTION, MAX_VERTICES};
use glam::DVec3;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::error::{HexMeshError, HexMeshResult};
use crate::mesh::{HexMesh, Hexahedron, SurfaceMesh};
use crate::spatial_key::SpatialKey;


/// Corner offsets of a unit cell in VTK hexahedron order.
pub const CORNER_OFFSETS: [[i64; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Parameters for the lattice voxel fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoxelOptions {
    /// Cell edge length.
    pub resolution: f64,
    /// Merge coincident cell corners into shared vertices.
    pub weld: bool,
}

impl Default for VoxelOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            weld: false,
        }
    }
}

/// Cell counts along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Cells along x.
    pub nx: usize,
    /// Cells along y.
    pub ny: usize,
    /// Cells along z.
    pub nz: usize,
}

impl GridDims {
    /// Whole cells of size `resolution` that fit in `bbox`.
    pub fn fit(bbox: &BoundingBox, resolution: f64) -> Self {
        let extent = bbox.extent();
        Self {
            nx: whole_cells(extent.x, resolution),
            ny: whole_cells(extent.y, resolution),
            nz: whole_cells(extent.z, resolution),
        }
    }

    /// Total number of cells, `None` on overflow.
    pub fn cell_count(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }

    /// Number of distinct lattice nodes, `None` on overflow.
    pub fn node_count(&self) -> Option<usize> {
        self.nx
            .checked_add(1)?
            .checked_mul(self.ny.checked_add(1)?)?
            .checked_mul(self.nz.checked_add(1)?)
    }

    /// Grid coordinate of the `cell`-th cell in emission order.
    #[inline]
    fn cell_coord(&self, cell: usize) -> SpatialKey {
        let k = cell % self.nz;
        let j = (cell / self.nz) % self.ny;
        let i = cell / (self.nz * self.ny);
        SpatialKey::new(i as i64, j as i64, k as i64)
    }
}

/// Fills the surface's bounding box with an unwelded lattice of cubes.
///
/// # Arguments
///
/// * `surface` - Only its vertex positions are used
/// * `resolution` - Cube edge length
///
/// # Errors
///
/// [`HexMeshError::InvalidResolution`] for a non-positive or non-finite
/// resolution, [`HexMeshError::TooManyVertices`] when the lattice would
/// exceed [`MAX_VERTICES`]. An empty surface is not an error: it yields an
/// empty mesh.
///
/// # Example
///
/// ```rust
/// use hexmesh::{voxel_fill, SurfaceMesh};
/// use glam::DVec3;
///
/// let surface = SurfaceMesh::from_parts(vec![DVec3::ZERO, DVec3::splat(1.0)], Vec::new());
/// let mesh = voxel_fill(&surface, 0.5).unwrap();
/// assert_eq!(mesh.hex_count(), 8);
/// assert_eq!(mesh.vertex_count(), 64);
/// ```
pub fn voxel_fill(surface: &SurfaceMesh, resolution: f64) -> HexMeshResult<HexMesh> {
    voxel_fill_with(
        surface,
        &VoxelOptions {
            resolution,
            weld: false,
        },
    )
}

/// Fills the surface's bounding box with a lattice of cubes.
///
/// See [`voxel_fill`]; `options.weld` selects the shared-vertex layout.
pub fn voxel_fill_with(surface: &SurfaceMesh, options: &VoxelOptions) -> HexMeshResult<HexMesh> {
    let resolution = options.resolution;
    if !(resolution.is_finite() && resolution > 0.0) {
        return Err(HexMeshError::InvalidResolution(resolution));
    }

    if surface.is_empty() {
        debug!("voxel_fill: empty surface, returning empty lattice");
        return Ok(HexMesh::new());
    }

    let bbox = BoundingBox::from_points(surface.vertices())?;
    let dims = GridDims::fit(&bbox, resolution);
    let cells = dims.cell_count().ok_or(HexMeshError::TooManyVertices {
        count: usize::MAX,
        max: MAX_VERTICES,
    })?;

    if cells == 0 {
        debug!("voxel_fill: bounding box thinner than one cell ({dims:?})");
        return Ok(HexMesh::new());
    }

    let vertex_count = if options.weld {
        dims.node_count()
    } else {
        cells.checked_mul(CORNER_OFFSETS.len())
    }
    .unwrap_or(usize::MAX);
    if vertex_count > MAX_VERTICES {
        return Err(HexMeshError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }

    debug!(
        "voxel_fill: {}x{}x{} cells at resolution {resolution}, weld={}",
        dims.nx, dims.ny, dims.nz, options.weld
    );

    let mesh = if options.weld {
        welded_lattice(bbox.min, resolution, dims, cells, vertex_count)
    } else {
        unwelded_lattice(bbox.min, resolution, dims, cells)
    };
    Ok(mesh)
}

/// Position of a lattice node.
#[inline]
fn node_position(origin: DVec3, resolution: f64, node: SpatialKey) -> DVec3 {
    origin + DVec3::new(node.x as f64, node.y as f64, node.z as f64) * resolution
}

fn unwelded_lattice(origin: DVec3, resolution: f64, dims: GridDims, cells: usize) -> HexMesh {
    // Each cell writes its own disjoint 8-vertex block; collect keeps index order.
    let blocks: Vec<[DVec3; 8]> = (0..cells)
        .into_par_iter()
        .map(|cell| {
            let base = dims.cell_coord(cell);
            CORNER_OFFSETS.map(|[dx, dy, dz]| node_position(origin, resolution, base.offset(dx, dy, dz)))
        })
        .collect();

    let vertices: Vec<DVec3> = blocks.into_iter().flatten().collect();
    let hexes: Vec<Hexahedron> = (0..cells)
        .map(|cell| {
            let first = (cell * CORNER_OFFSETS.len()) as u32;
            Hexahedron::new(std::array::from_fn(|q| first + q as u32))
        })
        .collect();

    HexMesh::from_parts(vertices, hexes)
}

fn welded_lattice(
    origin: DVec3,
    resolution: f64,
    dims: GridDims,
    cells: usize,
    vertex_count: usize,
) -> HexMesh {
    let mut mesh = HexMesh::with_capacity(vertex_count, cells);
    let mut nodes: HashMap<SpatialKey, u32> = HashMap::with_capacity(vertex_count);

    for cell in 0..cells {
        let base = dims.cell_coord(cell);
        let corners = CORNER_OFFSETS.map(|[dx, dy, dz]| {
            let node = base.offset(dx, dy, dz);
            *nodes
                .entry(node)
                .or_insert_with(|| mesh.add_vertex(node_position(origin, resolution, node)))
        });
        mesh.add_hex(Hexahedron::new(corners));
    }

    mesh
}
